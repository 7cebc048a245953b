use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::info;

use crate::fileformat::{for_each_record, open_report};
use crate::index::load_primer_index;
use crate::kmer::AmbiguousBaseNotice;
use crate::scan::{scan, MatchReport};

pub const DEFAULT_KMER_SIZE: usize = 24;

#[derive(Args)]
pub struct FindCMD {
    // FASTA file with primers
    #[arg(short = 'p', long = "primers", value_parser)]
    pub path_primers: PathBuf,

    // FASTQ file to search, plain or compressed
    #[arg(short = 'i', value_parser)]
    pub path_in: PathBuf,

    // Optional: match report, stdout if not given
    #[arg(short = 'o', long = "out", value_parser)]
    pub path_out: Option<PathBuf>,

    /// K-mer size; reduced to the length of the shortest primer
    #[arg(short = 'k', long = "kmer", value_parser = clap::value_parser!(usize), default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,

    /// Do not look for reverse complements of the primers
    #[arg(long = "no-reverse")]
    pub no_reverse: bool,

    /// Add the matched sequence as a fourth column
    #[arg(long = "print-window")]
    pub print_window: bool,
}
impl FindCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let hits = FindPrimers::run(&FindPrimers {
            path_primers: self.path_primers.clone(),
            path_in: self.path_in.clone(),
            path_out: self.path_out.clone(),
            kmer_size: self.kmer_size,
            with_reverse: !self.no_reverse,
            print_window: self.print_window,
        })?;

        log::info!("Find has finished succesfully; {} hits", hits);
        Ok(())
    }
}

pub struct FindPrimers {
    pub path_primers: PathBuf,
    pub path_in: PathBuf,
    pub path_out: Option<PathBuf>,
    pub kmer_size: usize,
    pub with_reverse: bool,
    pub print_window: bool,
}
impl FindPrimers {
    /// Report every exact primer hit in every read. Returns the number of hits
    pub fn run(params: &FindPrimers) -> anyhow::Result<u64> {
        let loaded = load_primer_index(&params.path_primers, params.kmer_size, params.with_reverse)?;
        let codec = loaded.codec;

        let mut report = MatchReport::new(open_report(params.path_out.as_deref())?);
        let mut ambiguous = AmbiguousBaseNotice::new();
        let mut num_reads = 0u64;

        for_each_record(&params.path_in, |record| {
            num_reads += 1;
            ambiguous.check(&record.id, &record.seq);
            for hit in scan(&record.seq, &loaded.index, codec) {
                //Window is printed as encoded, so N shows up as A
                let window = params.print_window.then(|| codec.decode(hit.encoding));
                report.write_hit(hit.id, &record.id, hit.offset, window.as_deref())?;
            }
            Ok(())
        })?;

        let hits = report.lines();
        report.finish()?;
        info!("Searched {} reads, found {} primer hits", num_reads, hits);
        Ok(hits)
    }
}
