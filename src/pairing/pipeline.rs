use std::path::PathBuf;

use anyhow::Context;
use log::{debug, info, warn};

use crate::fileformat::{for_each_record, open_report, FastqGzWriter};
use crate::index::{encode_primer, substitution_index, KmerLookup, SinglePrimer};
use crate::kmer::{reverse_complement, AmbiguousBaseNotice, KmerCodec};
use crate::pairing::{reconcile, AdjustmentLog, Mate, ReadTable, ReconciliationCounters};
use crate::runtime::{Config, Error};
use crate::scan::{scan, MatchReport};
use crate::trim::TrimRegion;

///////////////////////////////
/// What one mate is searched for
struct MatePrimer {
    lookup: Box<dyn KmerLookup>,
    codec: KmerCodec,
}
impl MatePrimer {
    fn new(primer: &[u8], mate: Mate, reverse: bool, snps: bool) -> Result<MatePrimer, Error> {
        let (mut encoding, codec) = encode_primer(primer)?;
        if reverse {
            encoding = reverse_complement(encoding, codec.kmer_size());
        }
        let label = mate.to_string();
        let lookup: Box<dyn KmerLookup> = if snps {
            let index = substitution_index(encoding, codec.kmer_size(), &label);
            debug!("{} substitution index has {} entries", label, index.len());
            Box::new(index)
        } else {
            Box::new(SinglePrimer::new(encoding, &label))
        };
        debug!(
            "Looking for {} in {} with k-mer {}",
            codec.decode_string(encoding),
            label,
            codec.kmer_size()
        );
        Ok(MatePrimer { lookup, codec })
    }

    /// Leftmost hit; its id and offset. Both mates use it, so R2 keeps its first hit
    /// and not the last one along the read
    fn first_hit<'a>(&'a self, seq: &'a [u8]) -> Option<(&'a str, usize)> {
        scan(seq, self.lookup.as_ref(), self.codec)
            .next()
            .map(|hit| (hit.id, hit.offset))
    }
}

///////////////////////////////
/// Parameters for trimming a pair of FASTQ files at a primer on each mate
#[derive(Clone, Debug)]
pub struct PairedTrimParams {
    pub path_r1: PathBuf,
    pub path_r2: PathBuf,
    pub path_r1_out: PathBuf,
    pub path_r2_out: PathBuf,

    /// None writes to stdout
    pub path_r1_matches: Option<PathBuf>,
    pub path_r2_matches: Option<PathBuf>,
    pub path_adjustments: Option<PathBuf>,

    /// Primer looked for in R1
    pub i7left: Vec<u8>,
    /// Primer whose reverse complement is looked for in R2
    pub i5right: Vec<u8>,

    pub table_size: usize,
    /// Also accept every single-base substitution of the primers
    pub snps: bool,
}

pub struct PairedTrimmer {}
impl PairedTrimmer {
    ///////////////////////////////
    /// Run the three passes. R1 offsets go into the table, R2 is reconciled against them and written,
    /// then R1 is read again and written with the reconciled offsets
    pub fn run(params: &PairedTrimParams) -> anyhow::Result<ReconciliationCounters> {
        //Fail before doing any work if an input is missing
        for path in [&params.path_r1, &params.path_r2] {
            if !path.is_file() {
                return Err(Error::file_not_found(path).into());
            }
        }

        let r1_primer = MatePrimer::new(&params.i7left, Mate::R1, false, params.snps)
            .context("Could not prepare i7left primer")?;
        let r2_primer = MatePrimer::new(&params.i5right, Mate::R2, true, params.snps)
            .context("Could not prepare i5right primer")?;

        let mut table = ReadTable::with_buckets(params.table_size)?;

        //Open all sinks up front so a bad output path does not waste a pass
        let mut r1_matches = MatchReport::new(open_report(params.path_r1_matches.as_deref())?);
        let mut r2_matches = MatchReport::new(open_report(params.path_r2_matches.as_deref())?);
        let mut adjustments = AdjustmentLog::new(open_report(params.path_adjustments.as_deref())?)
            .context("Could not write adjustment log header")?;
        let mut r2_out = FastqGzWriter::new(&params.path_r2_out)?;
        let mut r1_out = FastqGzWriter::new(&params.path_r1_out)?;

        let mut counters = ReconciliationCounters::default();
        let mut ambiguous = AmbiguousBaseNotice::new();

        //Pass 1: find the primer in R1 and remember the offset
        info!("Scanning R1 file {}", params.path_r1.display());
        for_each_record(&params.path_r1, |record| {
            counters.r1.seen += 1;
            ambiguous.check(&record.id, &record.seq);

            let trim = match r1_primer.first_hit(&record.seq) {
                Some((id, offset)) => {
                    r1_matches.write_hit(id, &record.id, offset, None)?;
                    counters.r1.found += 1;
                    Some(offset)
                }
                None => None,
            };
            table.insert(&record.id, trim)?;
            Ok(())
        })?;
        r1_matches.finish().context("Could not flush R1 match report")?;
        if Config::get().debug {
            //Walks every chain, so only on request
            debug!(
                "Stored {} R1 reads in {} buckets, longest chain {}",
                table.len(),
                table.num_buckets(),
                table.longest_chain()
            );
        }

        //Pass 2: find the primer in R2, reconcile with R1 and write R2
        info!("Scanning R2 file {}", params.path_r2.display());
        for_each_record(&params.path_r2, |record| {
            counters.r2.seen += 1;
            ambiguous.check(&record.id, &record.seq);

            let mut trim = match r2_primer.first_hit(&record.seq) {
                Some((id, offset)) => {
                    r2_matches.write_hit(id, &record.id, offset, None)?;
                    counters.r2.found += 1;
                    Some(offset)
                }
                None => None,
            };

            match table.get_mut(&record.id) {
                Some(entry) => {
                    let resolution = reconcile(entry.trim, trim);
                    if resolution.conflict {
                        warn!(
                            "We want to trim starting at {} from R1 and {} from R2 in {}. We went with the shorter",
                            entry.trim.unwrap_or_default(),
                            trim.unwrap_or_default(),
                            String::from_utf8_lossy(&record.id)
                        );
                    }
                    match resolution.adjustment {
                        Some(adjustment) => {
                            adjustments.record(&record.id, &adjustment)?;
                            counters.mate_mut(adjustment.mate).adjusted += 1;
                        }
                        None => counters.same += 1,
                    }
                    entry.trim = resolution.offset;
                    trim = resolution.offset;
                }
                None => {
                    warn!(
                        "We did not find an R1 that matches {}",
                        String::from_utf8_lossy(&record.id)
                    );
                    counters.unpaired += 1;
                }
            }

            let region = trim.map_or_else(|| TrimRegion::whole(record.seq.len()), TrimRegion::cut_at);
            //An adopted offset can lie past the end of this mate
            if region.trims(record.seq.len()) {
                counters.r2.trimmed += 1;
            }
            r2_out.write_trimmed(&record, region)?;
            Ok(())
        })?;
        r2_matches.finish().context("Could not flush R2 match report")?;
        adjustments.finish().context("Could not flush adjustment log")?;
        r2_out.finish().context("Could not finish R2 output")?;

        //Pass 3: read R1 again and write it with the reconciled offsets
        info!("Writing R1 file {}", params.path_r1_out.display());
        for_each_record(&params.path_r1, |record| {
            let trim = match table.get(&record.id) {
                Some(entry) => entry.trim,
                None => {
                    counters.r1_missing += 1;
                    None
                }
            };
            let region = trim.map_or_else(|| TrimRegion::whole(record.seq.len()), TrimRegion::cut_at);
            //An adopted offset can lie past the end of this mate
            if region.trims(record.seq.len()) {
                counters.r1.trimmed += 1;
            }
            r1_out.write_trimmed(&record, region)?;
            Ok(())
        })?;
        r1_out.finish().context("Could not finish R1 output")?;

        counters.log_summary();
        Ok(counters)
    }
}
