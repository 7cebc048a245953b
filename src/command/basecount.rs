use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use itertools::Itertools;
use log::{debug, info};

use crate::fileformat::for_each_record;
use crate::kmer::codec::base_code;

pub const DEFAULT_WINDOW: usize = 20;
pub const DEFAULT_CUTOFF: f64 = 0.5;

/// Slots per position: A, C, G, T, anything else
const NUM_SLOTS: usize = 5;
const SLOT_SYMBOLS: [u8; NUM_SLOTS] = [b'A', b'C', b'G', b'T', b'N'];

#[derive(Args)]
pub struct BasecountCMD {
    // FASTQ file, plain or compressed
    #[arg(short = 'i', value_parser)]
    pub path_in: PathBuf,

    /// Number of positions counted at each end of the reads
    #[arg(short = 'k', long = "window", value_parser = clap::value_parser!(usize), default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// A base is reported when more than this fraction of reads has it
    #[arg(long = "cutoff", value_parser = clap::value_parser!(f64), default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,
}
impl BasecountCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let counts = BaseCounts::from_file(&self.path_in, self.window)?;
        debug!("Counted {} reads", counts.num_reads());

        println!("Left primer: {}", counts.left_consensus(self.cutoff));
        println!("Right primer: {}", counts.right_consensus(self.cutoff));

        log::info!("Basecount has finished succesfully");
        Ok(())
    }
}

///////////////////////////////
/// Per-position base counts over the first and last positions of reads.
/// Right-hand counts are aligned on the last base, which is the last position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseCounts {
    left: Vec<[u64; NUM_SLOTS]>,
    right: Vec<[u64; NUM_SLOTS]>,
    num_reads: u64,
}
impl BaseCounts {
    pub fn new(window: usize) -> Self {
        BaseCounts {
            left: vec![[0; NUM_SLOTS]; window],
            right: vec![[0; NUM_SLOTS]; window],
            num_reads: 0,
        }
    }

    pub fn from_file(path: &std::path::Path, window: usize) -> anyhow::Result<Self> {
        let mut counts = BaseCounts::new(window);
        for_each_record(path, |record| {
            counts.add(&record.seq);
            Ok(())
        })?;
        info!("Counted bases of {} reads", counts.num_reads);
        Ok(counts)
    }

    #[inline(always)]
    fn slot(base: u8) -> usize {
        match base_code(base) {
            Some(code) => code as usize,
            None => NUM_SLOTS - 1,
        }
    }

    /// Count one read. Reads shorter than the window add only the positions they have
    pub fn add(&mut self, seq: &[u8]) {
        let window = self.left.len();
        for (pos, &base) in seq.iter().take(window).enumerate() {
            self.left[pos][Self::slot(base)] += 1;
        }
        for (back, &base) in seq.iter().rev().take(window).enumerate() {
            self.right[window - 1 - back][Self::slot(base)] += 1;
        }
        self.num_reads += 1;
    }

    pub fn num_reads(&self) -> u64 {
        self.num_reads
    }

    pub fn left_consensus(&self, cutoff: f64) -> String {
        self.consensus(&self.left, cutoff)
    }

    pub fn right_consensus(&self, cutoff: f64) -> String {
        self.consensus(&self.right, cutoff)
    }

    ////////////////
    /// Most common symbol per position if it is above the cutoff, otherwise '-'
    fn consensus(&self, counts: &[[u64; NUM_SLOTS]], cutoff: f64) -> String {
        counts
            .iter()
            .map(|slots| {
                //On ties the first slot wins
                let from_back = slots.iter().rev().position_max().unwrap_or(NUM_SLOTS - 1);
                let best = NUM_SLOTS - 1 - from_back;
                let max = slots[best];
                if self.num_reads > 0 && max as f64 / self.num_reads as f64 > cutoff {
                    SLOT_SYMBOLS[best] as char
                } else {
                    '-'
                }
            })
            .collect()
    }
}
