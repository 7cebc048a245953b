use log::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);
impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" | "warning" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" | "none" => LevelFilter::Off,
            _ => return Err(format!("Invalid log level: {}", s)),
        };
        Ok(LogLevel(level))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

///////////////////////////////
/// Set up the global logger. Everything goes to stderr so that reports written to stdout stay clean.
/// RUST_LOG, if set, takes precedence over the level given here
pub fn setup_global_logger(log_level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_level.0)
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    //A second init (tests) is not an error worth reporting
    let _ = builder.try_init();
}
