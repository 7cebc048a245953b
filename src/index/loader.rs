use std::fs::File;
use std::path::Path;

use bio::io::fasta;
use log::{debug, info, trace, warn};

use crate::index::{InsertOutcome, PrimerIndex};
use crate::kmer::codec::base_code;
use crate::kmer::{encode, reverse_complement, KmerCodec};
use crate::runtime::Error;

/// Suffix given to the id of reverse-complement index entries
pub const REVERSE_COMPLEMENT_SUFFIX: &str = "_rc";

const SUBSTITUTION_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///////////////////////////////
/// A primer index together with the window length it was built for
#[derive(Clone, Debug)]
pub struct LoadedPrimers {
    pub index: PrimerIndex,
    pub codec: KmerCodec,
}

///////////////////////////////
/// Read all records of a FASTA file, plain or compressed
pub fn read_fasta_records(path: &Path) -> Result<Vec<fasta::Record>, Error> {
    let file = File::open(path).map_err(|_| Error::file_not_found(path))?;
    let (reader, compression) = niffler::get_reader(Box::new(file))
        .map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;
    debug!("Opened primer file {} with compression {:?}", path.display(), compression);

    fasta::Reader::new(reader)
        .records()
        .map(|r| r.map_err(|e| Error::file_not_valid(path, Some(e.to_string()))))
        .collect()
}

///////////////////////////////
/// Encode the primers in a FASTA file into an index.
/// Every primer is encoded by its first k bases, where k is shrunk to fit the shortest primer
pub fn load_primer_index(
    path: &Path,
    kmer_size: usize,
    with_reverse: bool,
) -> Result<LoadedPrimers, Error> {
    let records = read_fasta_records(path)?;
    if records.is_empty() {
        return Err(Error::file_not_valid(path, Some("no primers in file")));
    }

    let mut k = kmer_size;
    for rec in &records {
        if rec.seq().len() < k {
            warn!(
                "Length of {} is only {}, so we had to adjust k-mer size down",
                rec.id(),
                rec.seq().len()
            );
            k = rec.seq().len();
        }
    }
    let codec = KmerCodec::new(k)?;

    let mut index = PrimerIndex::new();
    for rec in &records {
        let enc = codec.encode(rec.seq(), 0)?;
        debug!(
            "Encoding {} with length {} using k-mer {}",
            rec.id(),
            rec.seq().len(),
            k
        );
        index.insert(enc, rec.id());
        if with_reverse {
            let rc_id = format!("{}{}", rec.id(), REVERSE_COMPLEMENT_SUFFIX);
            index.insert(reverse_complement(enc, k), &rc_id);
        }
    }
    info!(
        "Loaded {} primers into an index of {} entries, depth {}, k={}",
        records.len(),
        index.len(),
        index.depth(),
        k
    );

    Ok(LoadedPrimers { index, codec })
}

///////////////////////////////
/// Index holding a primer encoding and every single-base substitution of it.
/// The original is inserted first, so substitutions that recreate it are dropped as duplicates
pub fn substitution_index(encoding: u64, kmer_size: usize, label: &str) -> PrimerIndex {
    let mut index = PrimerIndex::new();
    index.insert(encoding, label);

    for pos in 0..kmer_size {
        let shift = 2 * (kmer_size - 1 - pos);
        let cleared = encoding & !(0b11u64 << shift);
        for base in SUBSTITUTION_BASES {
            //base is always one of ACGT
            let code = u64::from(base_code(base).unwrap_or(0));
            let variant = cleared | (code << shift);
            let id = format!("{}:pos{}:{}", label, pos, base as char);
            if let InsertOutcome::Duplicate { existing_id } = index.insert(variant, &id) {
                trace!("{} recreates {}", id, existing_id);
            }
        }
    }
    index
}

///////////////////////////////
/// A primer given on the command line is either a path to a FASTA file (first record is used) or a literal sequence
pub fn resolve_primer(arg: &str) -> Result<Vec<u8>, Error> {
    let path = Path::new(arg);
    if path.is_file() {
        let records = read_fasta_records(path)?;
        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| Error::file_not_valid(path, Some("no primers in file")))?;
        return validate_primer(first.seq());
    }
    validate_primer(arg.as_bytes())
}

fn validate_primer(seq: &[u8]) -> Result<Vec<u8>, Error> {
    if seq.is_empty() || seq.iter().any(|&b| base_code(b).is_none()) {
        return Err(Error::invalid_primer(String::from_utf8_lossy(seq)));
    }
    Ok(seq.to_ascii_uppercase())
}

///////////////////////////////
/// Encode a primer for paired mode; at most 32 bases fit
pub fn encode_primer(primer: &[u8]) -> Result<(u64, KmerCodec), Error> {
    let codec = KmerCodec::new(primer.len())?;
    Ok((encode(primer, 0, primer.len())?, codec))
}
