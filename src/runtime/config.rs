use std::sync::OnceLock;

use crate::runtime;

///////////////////////////////
/// Global Config Options
pub static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: runtime::LogLevel,
    /// Also compute diagnostics that cost extra time, such as read table statistics
    pub debug: bool,
}

impl Config {
    /// Store the options given on the command line. Only the first call has an effect
    pub fn init(config: Config) -> &'static Config {
        CONFIG.get_or_init(|| config)
    }

    /// Options for this run; falls back to defaults when nothing was stored (library use, tests)
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(|| Config {
            log_level: runtime::LogLevel(log::LevelFilter::Info),
            debug: false,
        })
    }
}
