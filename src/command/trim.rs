use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use log::{debug, info};

use crate::fileformat::{for_each_record_unchecked, load_raw_primers, FastqGzWriter};
use crate::trim::{find_poly_tail, AnchorParams, AnchorTrimmer, DEFAULT_MIN_RUN};

#[derive(Args)]
#[command(group(ArgGroup::new("primers").required(true).multiple(true).args(["path_left", "path_right"])))]
pub struct TrimCMD {
    // FASTQ file to trim, plain or compressed
    #[arg(short = 'i', value_parser)]
    pub path_in: PathBuf,

    // Output FASTQ, gzip compressed
    #[arg(short = 'o', value_parser)]
    pub path_out: PathBuf,

    /// Primers to remove from the start of reads, one per line
    #[arg(short = 'l', long = "left", value_parser)]
    pub path_left: Option<PathBuf>,

    /// Primers to remove from the end of reads, one per line
    #[arg(short = 'r', long = "right", value_parser)]
    pub path_right: Option<PathBuf>,

    /// Trim a trailing run of identical bases longer than this
    #[arg(long = "poly-min-run", value_parser = clap::value_parser!(usize), default_value_t = DEFAULT_MIN_RUN)]
    pub poly_min_run: usize,

    /// Do not trim trailing runs of identical bases
    #[arg(long = "no-poly")]
    pub no_poly: bool,
}
impl TrimCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let left_primers = match &self.path_left {
            Some(p) => load_raw_primers(p)?,
            None => Vec::new(),
        };
        let right_primers = match &self.path_right {
            Some(p) => load_raw_primers(p)?,
            None => Vec::new(),
        };
        debug!(
            "Loaded {} left and {} right primers",
            left_primers.len(),
            right_primers.len()
        );

        let stats = TrimReads::run(&TrimReads {
            path_in: self.path_in.clone(),
            path_out: self.path_out.clone(),
            trimmer: AnchorTrimmer {
                left_primers,
                right_primers,
                poly_min_run: (!self.no_poly).then_some(self.poly_min_run),
                params: AnchorParams::default(),
            },
        })?;
        stats.log_summary();

        log::info!("Trim has finished succesfully");
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrimStats {
    pub reads: u64,
    pub left_trimmed: u64,
    pub right_trimmed: u64,
    pub poly_trimmed: u64,
    /// Quality and sequence of different length
    pub skipped: u64,
}
impl TrimStats {
    pub fn log_summary(&self) {
        info!("Total reads: {}", self.reads);
        info!(
            "Trimmed: left {} right {} poly tail {}",
            self.left_trimmed, self.right_trimmed, self.poly_trimmed
        );
        info!("Skipped with bad quality line: {}", self.skipped);
    }
}

pub struct TrimReads {
    pub path_in: PathBuf,
    pub path_out: PathBuf,
    pub trimmer: AnchorTrimmer,
}
impl TrimReads {
    /// Trim primers and poly tails off every read
    pub fn run(params: &TrimReads) -> anyhow::Result<TrimStats> {
        let mut writer = FastqGzWriter::new(&params.path_out)?;
        let mut stats = TrimStats::default();

        for_each_record_unchecked(&params.path_in, |record| {
            stats.reads += 1;
            if !record.has_consistent_quality() {
                debug!(
                    "Skipping {}: sequence and quality lengths differ",
                    String::from_utf8_lossy(&record.id)
                );
                stats.skipped += 1;
                return Ok(());
            }

            let region = params.trimmer.region(&record.seq);
            let len = record.seq.len();
            if region.start > 0 {
                stats.left_trimmed += 1;
            }
            if region.end < len {
                //Attribute the cut to whichever boundary came first
                let poly = params
                    .trimmer
                    .poly_min_run
                    .map(|min_run| find_poly_tail(&record.seq, min_run))
                    .unwrap_or(len);
                if poly <= region.end {
                    stats.poly_trimmed += 1;
                } else {
                    stats.right_trimmed += 1;
                }
            }
            writer.write_trimmed(&record, region)?;
            Ok(())
        })?;

        writer.finish()?;
        Ok(stats)
    }
}
