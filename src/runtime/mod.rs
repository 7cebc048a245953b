mod commands;
mod config;
mod error;
mod log;

pub use self::commands::*;
pub use self::config::*;
pub use self::error::*;
pub use self::log::*;
