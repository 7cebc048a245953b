use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Args;

use crate::index::resolve_primer;
use crate::pairing::{PairedTrimParams, PairedTrimmer};

pub const DEFAULT_TABLE_SIZE: usize = 100003;

#[derive(Args)]
pub struct PairCMD {
    // FASTQ for r1
    #[arg(long = "r1", value_parser)]
    pub path_r1: PathBuf,

    // FASTQ for r2
    #[arg(long = "r2", value_parser)]
    pub path_r2: PathBuf,

    // Trimmed r1 output, gzip compressed
    #[arg(long = "out-r1", value_parser)]
    pub path_r1_out: PathBuf,

    // Trimmed r2 output, gzip compressed
    #[arg(long = "out-r2", value_parser)]
    pub path_r2_out: PathBuf,

    /// Primer to find in R1; a sequence or a FASTA file
    #[arg(long = "i7left", value_parser)]
    pub i7left: String,

    /// Primer whose reverse complement is found in R2; a sequence or a FASTA file
    #[arg(long = "i5right", value_parser)]
    pub i5right: String,

    // Optional: where R1 primer hits are reported; stdout if not given
    #[arg(long = "r1-matches", value_parser)]
    pub path_r1_matches: Option<PathBuf>,

    // Optional: where R2 primer hits are reported; stdout if not given
    #[arg(long = "r2-matches", value_parser)]
    pub path_r2_matches: Option<PathBuf>,

    // Optional: where offset adjustments are logged; stdout if not given
    #[arg(long = "adjustments", value_parser)]
    pub path_adjustments: Option<PathBuf>,

    /// Number of buckets in the R1 read table. Roughly the number of reads works well
    #[arg(short = 't', long = "table-size", value_parser = clap::value_parser!(usize), default_value_t = DEFAULT_TABLE_SIZE)]
    pub table_size: usize,

    /// Also match primers with a single substituted base
    #[arg(long = "snps")]
    pub snps: bool,
}
impl PairCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let i7left = resolve_primer(&self.i7left).context("Bad --i7left")?;
        let i5right = resolve_primer(&self.i5right).context("Bad --i5right")?;

        let counters = PairedTrimmer::run(&PairedTrimParams {
            path_r1: self.path_r1.clone(),
            path_r2: self.path_r2.clone(),
            path_r1_out: self.path_r1_out.clone(),
            path_r2_out: self.path_r2_out.clone(),
            path_r1_matches: self.path_r1_matches.clone(),
            path_r2_matches: self.path_r2_matches.clone(),
            path_adjustments: self.path_adjustments.clone(),
            i7left,
            i5right,
            table_size: self.table_size,
            snps: self.snps,
        })?;

        log::info!(
            "Pair has finished succesfully; {} read pairs",
            counters.r2.seen
        );
        Ok(())
    }
}
