use clap::Subcommand;

use crate::command;

///////////////////////////////
/// Possible subcommands to parse
#[derive(Subcommand, strum_macros::Display)]
pub enum Commands {
    /// Report every exact primer hit in a FASTQ file
    #[strum(to_string = "Find")]
    Find(command::FindCMD),

    /// Cut reads at their first exact primer hit
    #[strum(to_string = "TrimAtMatch")]
    TrimAtMatch(command::TrimAtMatchCMD),

    /// Trim reads using mismatch-tolerant primer anchors and poly tails
    #[strum(to_string = "Trim")]
    Trim(command::TrimCMD),

    /// Trim paired-end files and keep R1/R2 offsets consistent
    #[strum(to_string = "Pair")]
    Pair(command::PairCMD),

    /// Positional base composition at both read ends
    #[strum(to_string = "Basecount")]
    Basecount(command::BasecountCMD),
}

impl Commands {
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        match self {
            Commands::Find(cmd) => cmd.try_execute(),
            Commands::TrimAtMatch(cmd) => cmd.try_execute(),
            Commands::Trim(cmd) => cmd.try_execute(),
            Commands::Pair(cmd) => cmd.try_execute(),
            Commands::Basecount(cmd) => cmd.try_execute(),
        }
    }
}
