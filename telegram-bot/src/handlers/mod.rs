//! Application handlers: greetings, the "unrecognized" fallback and chain-level logging.

mod hello;
mod logging;
mod unknown;

pub use hello::{greeting, HelloHandler};
pub use logging::LoggingHandler;
pub use unknown::{UnknownTextHandler, UNRECOGNIZED_REPLY};
