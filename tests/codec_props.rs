use primerseek::index::SinglePrimer;
use primerseek::kmer::{decode, encode, reverse_complement, rolling_encode, KmerCodec};
use primerseek::scan::scan;
use primerseek::trim::{find_left_boundary, find_poly_tail, find_right_boundary, AnchorParams};
use proptest::prelude::*;

fn bases(min: usize, max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), min..max)
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(k in 1usize..=32, seq in bases(32, 64)) {
        let enc = encode(&seq, 0, k).unwrap();
        prop_assert_eq!(decode(enc, k), seq[..k].to_vec());
    }

    #[test]
    fn prop_rolling_matches_fresh(k in 1usize..=32, seq in prop::collection::vec(prop::sample::select(b"ACGTN".to_vec()), 32..128)) {
        let mut enc = encode(&seq, 0, k).unwrap();
        for i in 1..=seq.len() - k {
            enc = rolling_encode(&seq, i, k, enc);
            prop_assert_eq!(enc, encode(&seq, i, k).unwrap());
        }
    }

    #[test]
    fn prop_reverse_complement_involution(k in 1usize..=32, seq in bases(32, 33)) {
        let enc = encode(&seq, 0, k).unwrap();
        prop_assert_eq!(reverse_complement(reverse_complement(enc, k), k), enc);
    }

    #[test]
    fn prop_scan_finds_planted_primer(
        primer in bases(8, 20),
        prefix in prop::collection::vec(Just(b'N'), 0..30),
    ) {
        let codec = KmerCodec::new(primer.len()).unwrap();
        let target = SinglePrimer::new(encode(&primer, 0, primer.len()).unwrap(), "p");
        let read = [prefix.as_slice(), &primer].concat();
        // earlier windows may also hit, since N is read as A
        let offsets: Vec<usize> = scan(&read, &target, codec).map(|h| h.offset).collect();
        prop_assert_eq!(offsets.last().copied(), Some(prefix.len()));
    }

    #[test]
    fn prop_anchor_bounds(
        primers in prop::collection::vec(bases(5, 30), 0..4),
        read in bases(0, 80),
    ) {
        let params = AnchorParams::default();
        let left = find_left_boundary(&primers, &read, &params);
        prop_assert!(left <= read.len());
        let right = find_right_boundary(&primers, &read, left, &params);
        prop_assert!(right >= left.min(read.len()) && right <= read.len());
    }

    #[test]
    fn prop_poly_tail_bounds(read in bases(0, 60), min_run in 0usize..10) {
        let poly = find_poly_tail(&read, min_run);
        prop_assert!(poly <= read.len());
        if poly < read.len() {
            let base = read[poly];
            prop_assert!(read[poly..].iter().all(|&b| b == base));
            prop_assert!(read.len() - poly > min_run);
        }
    }
}

#[test]
fn reverse_complement_of_atgc() {
    let enc = encode(b"ATGC", 0, 4).unwrap();
    assert_eq!(reverse_complement(enc, 4), encode(b"GCAT", 0, 4).unwrap());
}
