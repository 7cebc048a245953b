use crate::index::KmerLookup;
use crate::kmer::KmerCodec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<'a> {
    pub offset: usize,
    pub id: &'a str,
    pub encoding: u64,
}

///////////////////////////////
/// Walks a read one base at a time, rolling the window encoding and asking the lookup at every offset.
/// Hits come out in ascending offset order; every offset is checked
pub struct ScanHits<'a, L: KmerLookup + ?Sized> {
    read: &'a [u8],
    lookup: &'a L,
    codec: KmerCodec,
    next_offset: usize,
    encoding: u64,
}

pub fn scan<'a, L: KmerLookup + ?Sized>(
    read: &'a [u8],
    lookup: &'a L,
    codec: KmerCodec,
) -> ScanHits<'a, L> {
    ScanHits {
        read,
        lookup,
        codec,
        next_offset: 0,
        encoding: 0,
    }
}

impl<'a, L: KmerLookup + ?Sized> Iterator for ScanHits<'a, L> {
    type Item = Hit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.codec.kmer_size();
        while self.next_offset + k <= self.read.len() {
            let offset = self.next_offset;
            self.encoding = if offset == 0 {
                //Bounds checked by the loop condition
                self.codec.encode(self.read, 0).ok()?
            } else {
                self.codec.roll(self.read, offset, self.encoding)
            };
            self.next_offset += 1;

            if let Some(id) = self.lookup.lookup(self.encoding) {
                return Some(Hit {
                    offset,
                    id,
                    encoding: self.encoding,
                });
            }
        }
        None
    }
}

///////////////////////////////
/// Offset of the leftmost hit, if any
pub fn first_hit<L: KmerLookup + ?Sized>(read: &[u8], lookup: &L, codec: KmerCodec) -> Option<usize> {
    scan(read, lookup, codec).next().map(|hit| hit.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{PrimerIndex, SinglePrimer};
    use crate::kmer::encode;

    #[test]
    fn test_scan_all_hits() {
        let codec = KmerCodec::new(4).unwrap();
        let mut index = PrimerIndex::new();
        index.insert(encode(b"GATC", 0, 4).unwrap(), "p1");
        index.insert(encode(b"TTTT", 0, 4).unwrap(), "p2");

        let read = b"GATCAAGATCTTTTT";
        let hits: Vec<(usize, &str)> = scan(read, &index, codec).map(|h| (h.offset, h.id)).collect();
        assert_eq!(
            hits,
            vec![(0, "p1"), (6, "p1"), (10, "p2"), (11, "p2")]
        );
    }

    #[test]
    fn test_scan_last_window() {
        let codec = KmerCodec::new(3).unwrap();
        let primer = SinglePrimer::new(encode(b"CGT", 0, 3).unwrap(), "end");
        let read = b"AAAACGT";
        assert_eq!(first_hit(read, &primer, codec), Some(4));
    }

    #[test]
    fn test_scan_short_read() {
        let codec = KmerCodec::new(8).unwrap();
        let primer = SinglePrimer::new(0, "A8");
        assert_eq!(scan(b"AAAA", &primer, codec).count(), 0);
        assert_eq!(scan(b"", &primer, codec).count(), 0);
        assert_eq!(first_hit(b"AAAAAAAA", &primer, codec), Some(0));
    }

    #[test]
    fn test_scan_encoding_reported() {
        let codec = KmerCodec::new(5).unwrap();
        let enc = encode(b"ACGTA", 0, 5).unwrap();
        let primer = SinglePrimer::new(enc, "p");
        let hit = scan(b"TTACGTATT", &primer, codec).next().unwrap();
        assert_eq!(hit.offset, 2);
        assert_eq!(codec.decode(hit.encoding), b"ACGTA".to_vec());
    }
}
