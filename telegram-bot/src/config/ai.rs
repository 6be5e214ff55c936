//! `/ai` settings: provider selection, tracker tunables, mock delay.

use ai_chat::{OpenAiSettings, TrackerConfig};
use dbot_core::{env_parse, first_env, ConfigError};
use std::time::Duration;

/// Mock generator delay used when `MOCK_DELAY_MS` is unset.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 1500;

const SYSTEM_PROMPT_VARS: &[&str] = &["LLM_SYSTEM_PROMPT", "SYSTEM_PROMPT"];

#[derive(Debug, Clone)]
pub struct AiConfig {
    /// `Some` when OPENAI_API_KEY is set; otherwise the mock generator answers.
    pub openai: Option<OpenAiSettings>,
    pub tracker: TrackerConfig,
    pub mock_delay: Duration,
}

impl AiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai = first_env(&["OPENAI_API_KEY"]).map(|(_, api_key)| {
            let mut settings = OpenAiSettings::new(api_key);
            settings.base_url = first_env(&["OPENAI_BASE_URL"]).map(|(_, v)| v);
            if let Some((_, model)) = first_env(&["MODEL"]) {
                settings.model = model;
            }
            settings.system_prompt = first_env(SYSTEM_PROMPT_VARS).map(|(_, v)| v);
            settings
        });

        let defaults = TrackerConfig::default();
        let cooldown_ms = env_parse("AI_COOLDOWN_MS", defaults.cooldown.as_millis() as u64)?;
        let max_turns: usize = env_parse("AI_HISTORY_LIMIT", defaults.max_turns)?;
        // Whole exchanges only, so the kept history always starts with a user turn.
        if max_turns < 2 || max_turns % 2 != 0 {
            return Err(ConfigError::InvalidValue {
                name: "AI_HISTORY_LIMIT",
                value: max_turns.to_string(),
            });
        }
        let timeout_secs = env_parse("AI_TIMEOUT_SECS", defaults.generation_timeout.as_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "AI_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        let mock_delay_ms = env_parse("MOCK_DELAY_MS", DEFAULT_MOCK_DELAY_MS)?;

        Ok(Self {
            openai,
            tracker: TrackerConfig {
                cooldown: Duration::from_millis(cooldown_ms),
                max_turns,
                generation_timeout: Duration::from_secs(timeout_secs),
            },
            mock_delay: Duration::from_millis(mock_delay_ms),
        })
    }

    /// Name of the generator this config selects, for logs.
    pub fn generator_name(&self) -> &'static str {
        if self.openai.is_some() {
            "openai"
        } else {
            "mock"
        }
    }
}
