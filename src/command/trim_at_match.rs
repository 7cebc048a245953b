use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::info;

use crate::command::find::DEFAULT_KMER_SIZE;
use crate::fileformat::{for_each_record, FastqGzWriter};
use crate::index::load_primer_index;
use crate::kmer::AmbiguousBaseNotice;
use crate::scan::first_hit;
use crate::trim::TrimRegion;

#[derive(Args)]
pub struct TrimAtMatchCMD {
    // FASTA file with primers
    #[arg(short = 'p', long = "primers", value_parser)]
    pub path_primers: PathBuf,

    // FASTQ file to trim, plain or compressed
    #[arg(short = 'i', value_parser)]
    pub path_in: PathBuf,

    // Output FASTQ, gzip compressed
    #[arg(short = 'o', value_parser)]
    pub path_out: PathBuf,

    /// K-mer size; reduced to the length of the shortest primer
    #[arg(short = 'k', long = "kmer", value_parser = clap::value_parser!(usize), default_value_t = DEFAULT_KMER_SIZE)]
    pub kmer_size: usize,

    /// Do not look for reverse complements of the primers
    #[arg(long = "no-reverse")]
    pub no_reverse: bool,
}
impl TrimAtMatchCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let (num_reads, num_trimmed) = TrimAtMatch::run(&TrimAtMatch {
            path_primers: self.path_primers.clone(),
            path_in: self.path_in.clone(),
            path_out: self.path_out.clone(),
            kmer_size: self.kmer_size,
            with_reverse: !self.no_reverse,
        })?;

        log::info!(
            "TrimAtMatch has finished succesfully; trimmed {} of {} reads",
            num_trimmed,
            num_reads
        );
        Ok(())
    }
}

pub struct TrimAtMatch {
    pub path_primers: PathBuf,
    pub path_in: PathBuf,
    pub path_out: PathBuf,
    pub kmer_size: usize,
    pub with_reverse: bool,
}
impl TrimAtMatch {
    /// Cut each read before its first primer hit. Returns reads seen and reads trimmed
    pub fn run(params: &TrimAtMatch) -> anyhow::Result<(u64, u64)> {
        let loaded = load_primer_index(&params.path_primers, params.kmer_size, params.with_reverse)?;
        let mut writer = FastqGzWriter::new(&params.path_out)?;
        let mut ambiguous = AmbiguousBaseNotice::new();

        let mut num_trimmed = 0u64;
        for_each_record(&params.path_in, |record| {
            ambiguous.check(&record.id, &record.seq);
            let region = match first_hit(&record.seq, &loaded.index, loaded.codec) {
                Some(offset) => {
                    num_trimmed += 1;
                    TrimRegion::cut_at(offset)
                }
                None => TrimRegion::whole(record.seq.len()),
            };
            writer.write_trimmed(&record, region)?;
            Ok(())
        })?;

        let num_reads = writer.written();
        writer.finish()?;
        info!("Trimmed {} of {} reads", num_trimmed, num_reads);
        Ok((num_reads, num_trimmed))
    }
}
