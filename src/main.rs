use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use primerseek::runtime::{self, Commands, Config, LogLevel};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// trace, debug, info, warn or error
    #[arg(long = "log-level", global = true, value_parser = clap::value_parser!(LogLevel), default_value = "info")]
    log_level: LogLevel,

    /// Same as --log-level debug
    #[arg(long = "debug", global = true)]
    debug: bool,
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();

    let config = Config::init(Config {
        log_level: if cli.debug {
            LogLevel(log::LevelFilter::Debug)
        } else {
            cli.log_level
        },
        debug: cli.debug,
    });
    runtime::setup_global_logger(config.log_level);
    debug!("Running {}", cli.command);

    if let Err(e) = cli.command.try_execute() {
        error!("{} failed: {:#}", cli.command, e);
        return runtime::exit_code_for(&e);
    }
    ExitCode::SUCCESS
}
