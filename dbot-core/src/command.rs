//! Command token parsing shared by the router and command handlers.
//!
//! A command is text starting with [`COMMAND_PREFIX`]; the token runs to the first whitespace and may
//! carry an `@botname` suffix (`/ai@my_bot what is rust`).

/// Reserved first character of a command.
pub const COMMAND_PREFIX: char = '/';

/// A command split into its parts. Borrowed from the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Command name without prefix or bot suffix (`"ai"`).
    pub name: &'a str,
    /// Bot username after `@`, if the command was addressed explicitly.
    pub bot_name: Option<&'a str>,
    /// Everything after the command token, trimmed.
    pub args: &'a str,
}

impl<'a> ParsedCommand<'a> {
    /// True when the command carries no `@bot` suffix or the suffix matches `bot_username`
    /// (case-insensitive, like Telegram usernames). Unknown own username accepts any suffix.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self.bot_name, bot_username) {
            (Some(target), Some(me)) => target.eq_ignore_ascii_case(me),
            _ => true,
        }
    }
}

/// Returns true if `text` begins with the command prefix.
#[inline]
pub fn is_command(text: &str) -> bool {
    text.starts_with(COMMAND_PREFIX)
}

/// Splits `text` into a [`ParsedCommand`]. Returns `None` when the text is not a command or the
/// command name is empty (`"/"`, `"/ hello"`, `"/@bot"`).
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let rest = text.strip_prefix(COMMAND_PREFIX)?;
    let (token, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };
    let (name, bot_name) = match token.split_once('@') {
        Some((name, bot)) => (name, Some(bot).filter(|b| !b.is_empty())),
        None => (token, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        name,
        bot_name,
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_command() {
        let cmd = parse_command("/hello").unwrap();
        assert_eq!(cmd.name, "hello");
        assert_eq!(cmd.bot_name, None);
        assert_eq!(cmd.args, "");
    }

    #[test]
    fn test_parse_command_with_args_and_bot_suffix() {
        let cmd = parse_command("/ai@my_bot   what is rust?  ").unwrap();
        assert_eq!(cmd.name, "ai");
        assert_eq!(cmd.bot_name, Some("my_bot"));
        assert_eq!(cmd.args, "what is rust?");
    }

    #[test]
    fn test_parse_command_multiline_args() {
        let cmd = parse_command("/ai\nline one\nline two").unwrap();
        assert_eq!(cmd.name, "ai");
        assert_eq!(cmd.args, "line one\nline two");
    }

    #[test]
    fn test_parse_rejects_non_commands() {
        assert!(parse_command("hello").is_none());
        assert!(parse_command(" /hello").is_none());
        assert!(parse_command("/").is_none());
        assert!(parse_command("/ hello").is_none());
        assert!(parse_command("/@bot").is_none());
        assert!(parse_command("").is_none());
    }

    #[test]
    fn test_is_addressed_to() {
        let mine = parse_command("/ai@My_Bot hi").unwrap();
        assert!(mine.is_addressed_to(Some("my_bot")));
        assert!(!mine.is_addressed_to(Some("other_bot")));
        assert!(mine.is_addressed_to(None));

        let bare = parse_command("/ai hi").unwrap();
        assert!(bare.is_addressed_to(Some("my_bot")));
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/start"));
        assert!(!is_command("start"));
    }
}
