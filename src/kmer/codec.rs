use log::warn;

use crate::runtime::Error;

/// 64 bits, 2 bits per base
pub const MAX_KMER_SIZE: usize = 32;

const NT_INVALID: u8 = 0xFF;

////////////////
///  Lookup table for ACGT in either case. Maps to 0..3, anything else is NT_INVALID
const NT_LOOKUP: [u8; 256] = {
    let mut table = [NT_INVALID; 256];
    table[b'A' as usize] = 0b00;
    table[b'a' as usize] = 0b00;
    table[b'C' as usize] = 0b01;
    table[b'c' as usize] = 0b01;
    table[b'G' as usize] = 0b10;
    table[b'g' as usize] = 0b10;
    table[b'T' as usize] = 0b11;
    table[b't' as usize] = 0b11;
    table
};

const NT_REVERSE: [u8; 4] = [b'A', b'C', b'G', b'T'];

////////////////
/// 2-bit code of a base, or None for N and other symbols
#[inline(always)]
pub fn base_code(base: u8) -> Option<u8> {
    let code = NT_LOOKUP[base as usize];
    if code == NT_INVALID {
        None
    } else {
        Some(code)
    }
}

////////////////
/// 2-bit code of a base; unknown symbols fold to A
#[inline(always)]
fn base_code_or_a(base: u8) -> u64 {
    let code = NT_LOOKUP[base as usize];
    if code == NT_INVALID {
        0
    } else {
        u64::from(code)
    }
}

////////////////
/// Does the sequence contain anything but ACGT?
pub fn is_ambiguous(seq: &[u8]) -> bool {
    seq.iter().any(|&b| NT_LOOKUP[b as usize] == NT_INVALID)
}

////////////////
/// Encode `length` bases starting at `start`, most significant base first.
/// Symbols other than ACGT are encoded as A
pub fn encode(sequence: &[u8], start: usize, length: usize) -> Result<u64, Error> {
    if length > MAX_KMER_SIZE {
        return Err(Error::length_exceeded(length));
    }
    let end = match start.checked_add(length) {
        Some(end) if end <= sequence.len() => end,
        _ => return Err(Error::window_out_of_bounds(start, length, sequence.len())),
    };

    let mut encoded: u64 = 0;
    for &base in &sequence[start..end] {
        encoded = (encoded << 2) | base_code_or_a(base);
    }
    Ok(encoded)
}

////////////////
/// Encoding of the window starting at `new_start`, given the encoding of the window starting one base earlier.
/// The caller guarantees `1 <= new_start` and `new_start + length <= sequence.len()`
#[inline(always)]
pub fn rolling_encode(sequence: &[u8], new_start: usize, length: usize, previous: u64) -> u64 {
    if length == 0 {
        return 0;
    }
    let outgoing = base_code_or_a(sequence[new_start - 1]) << (2 * (length - 1));
    let incoming = base_code_or_a(sequence[new_start + length - 1]);
    ((previous - outgoing) << 2) | incoming
}

////////////////
/// Inverse of encode
pub fn decode(encoding: u64, length: usize) -> Vec<u8> {
    let mut sequence = Vec::with_capacity(length);
    let mut temp = encoding;
    for _ in 0..length {
        sequence.push(NT_REVERSE[(temp & 0b11) as usize]);
        temp >>= 2;
    }
    sequence.reverse();
    sequence
}

///////////////////////////////
/// Codec for one window length, checked once at construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KmerCodec {
    kmer_size: usize,
}
impl KmerCodec {
    pub fn new(kmer_size: usize) -> Result<Self, Error> {
        if kmer_size > MAX_KMER_SIZE {
            return Err(Error::length_exceeded(kmer_size));
        }
        if kmer_size == 0 {
            return Err(Error::parse_error("k-mer size", Some("must be at least 1")));
        }
        Ok(Self { kmer_size })
    }

    pub fn kmer_size(&self) -> usize {
        self.kmer_size
    }

    #[inline(always)]
    pub fn encode(&self, sequence: &[u8], start: usize) -> Result<u64, Error> {
        encode(sequence, start, self.kmer_size)
    }

    #[inline(always)]
    pub fn roll(&self, sequence: &[u8], new_start: usize, previous: u64) -> u64 {
        rolling_encode(sequence, new_start, self.kmer_size, previous)
    }

    pub fn decode(&self, encoding: u64) -> Vec<u8> {
        decode(encoding, self.kmer_size)
    }

    pub fn decode_string(&self, encoding: u64) -> String {
        //decode only ever emits ACGT
        String::from_utf8_lossy(&self.decode(encoding)).into_owned()
    }
}

///////////////////////////////
/// Emits the "N encoded as A" warning at most once per run
#[derive(Debug, Default)]
pub struct AmbiguousBaseNotice {
    warned: bool,
}
impl AmbiguousBaseNotice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the sequence holds symbols that will be folded to A
    pub fn check(&mut self, read_id: &[u8], seq: &[u8]) -> bool {
        let ambiguous = is_ambiguous(seq);
        if ambiguous && !self.warned {
            warn!(
                "Sequences contain bases other than ACGT (first seen in {}). They are encoded as A",
                String::from_utf8_lossy(read_id)
            );
            self.warned = true;
        }
        ambiguous
    }

    pub fn has_warned(&self) -> bool {
        self.warned
    }
}
