use std::io::Read;
use std::path::{Path, PathBuf};

use primerseek::pairing::{PairedTrimParams, PairedTrimmer};
use primerseek::runtime::Error;

const I7LEFT: &str = "GATTACAGG";
const I5RIGHT: &str = "CCGTTAGCA";
/// Reverse complement of I5RIGHT, which is what shows up in R2
const I5RIGHT_RC: &str = "TGCTAACGG";
const READ_LEN: usize = 30;

/// A read of C's with `insert` planted at `offset`
fn read_with(insert: &str, offset: usize) -> String {
    let mut read = "C".repeat(offset);
    read.push_str(insert);
    read.push_str(&"C".repeat(READ_LEN - read.len()));
    read
}

fn plain_read() -> String {
    "C".repeat(READ_LEN)
}

fn write_fastq(path: &Path, reads: &[(&str, String)]) {
    let mut text = String::new();
    for (id, seq) in reads {
        text.push_str(&format!("@{} 1:N:0\n{}\n+\n{}\n", id, seq, "I".repeat(seq.len())));
    }
    std::fs::write(path, text).unwrap();
}

fn read_gz(path: &Path) -> String {
    let mut text = String::new();
    flate2::read::GzDecoder::new(std::fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    text
}

fn expected_fastq(reads: &[(&str, usize)]) -> String {
    reads
        .iter()
        .map(|(id, len)| {
            format!(
                "@{} 1:N:0\n{}\n+\n{}\n",
                id,
                "C".repeat(*len),
                "I".repeat(*len)
            )
        })
        .collect()
}

struct Scratch {
    dir: tempfile::TempDir,
}
impl Scratch {
    fn new() -> Self {
        Scratch {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn params(&self) -> PairedTrimParams {
        PairedTrimParams {
            path_r1: self.path("r1.fq"),
            path_r2: self.path("r2.fq"),
            path_r1_out: self.path("r1.out.fq.gz"),
            path_r2_out: self.path("r2.out.fq.gz"),
            path_r1_matches: Some(self.path("r1.matches")),
            path_r2_matches: Some(self.path("r2.matches")),
            path_adjustments: Some(self.path("adjustments")),
            i7left: I7LEFT.as_bytes().to_vec(),
            i5right: I5RIGHT.as_bytes().to_vec(),
            table_size: 17,
            snps: false,
        }
    }
}

fn runtime_error(err: &anyhow::Error) -> &Error {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .expect("a runtime error in the chain")
}

#[test]
fn three_passes_reconcile_offsets() {
    let scratch = Scratch::new();
    write_fastq(
        &scratch.path("r1.fq"),
        &[
            ("same", read_with(I7LEFT, 5)),
            ("onesided", plain_read()),
            ("conflict", read_with(I7LEFT, 10)),
            ("neither", plain_read()),
        ],
    );
    write_fastq(
        &scratch.path("r2.fq"),
        &[
            ("same", read_with(I5RIGHT_RC, 5)),
            ("onesided", read_with(I5RIGHT_RC, 7)),
            ("conflict", read_with(I5RIGHT_RC, 4)),
            ("neither", plain_read()),
            ("orphan", plain_read()),
        ],
    );

    let params = scratch.params();
    let counters = PairedTrimmer::run(&params).unwrap();

    assert_eq!(counters.r1.seen, 4);
    assert_eq!(counters.r2.seen, 5);
    assert_eq!(counters.r1.found, 2);
    assert_eq!(counters.r2.found, 3);
    assert_eq!(counters.same, 2);
    assert_eq!(counters.r1.adjusted, 2);
    assert_eq!(counters.r2.adjusted, 0);
    assert_eq!(counters.unpaired, 1);
    assert_eq!(counters.r1.trimmed, 3);
    assert_eq!(counters.r2.trimmed, 3);
    assert_eq!(counters.r1_missing, 0);

    assert_eq!(
        std::fs::read_to_string(scratch.path("adjustments")).unwrap(),
        "R1/R2\tSeq ID\tFrom\tTo\nR1\tonesided\t-1\t7\nR1\tconflict\t10\t4\n"
    );
    assert_eq!(
        std::fs::read_to_string(scratch.path("r1.matches")).unwrap(),
        "R1\tsame\t5\nR1\tconflict\t10\n"
    );
    assert_eq!(
        std::fs::read_to_string(scratch.path("r2.matches")).unwrap(),
        "R2\tsame\t5\nR2\tonesided\t7\nR2\tconflict\t4\n"
    );

    assert_eq!(
        read_gz(&params.path_r1_out),
        expected_fastq(&[("same", 5), ("onesided", 7), ("conflict", 4), ("neither", READ_LEN)])
    );
    assert_eq!(
        read_gz(&params.path_r2_out),
        expected_fastq(&[
            ("same", 5),
            ("onesided", 7),
            ("conflict", 4),
            ("neither", READ_LEN),
            ("orphan", READ_LEN)
        ])
    );
}

#[test]
fn r2_adopts_r1_offset() {
    let scratch = Scratch::new();
    write_fastq(&scratch.path("r1.fq"), &[("pair", read_with(I7LEFT, 12))]);
    write_fastq(&scratch.path("r2.fq"), &[("pair", plain_read())]);

    let params = scratch.params();
    let counters = PairedTrimmer::run(&params).unwrap();
    assert_eq!(counters.r2.adjusted, 1);
    assert_eq!(counters.r2.trimmed, 1);
    assert_eq!(
        std::fs::read_to_string(scratch.path("adjustments")).unwrap(),
        "R1/R2\tSeq ID\tFrom\tTo\nR2\tpair\t-1\t12\n"
    );
    assert_eq!(read_gz(&params.path_r2_out), expected_fastq(&[("pair", 12)]));
}

#[test]
fn adopted_offset_past_read_end_is_not_a_trim() {
    let scratch = Scratch::new();
    // R1 is longer than R2; its primer starts after the last base of R2
    let r1 = format!("{}{}", "C".repeat(31), I7LEFT);
    write_fastq(&scratch.path("r1.fq"), &[("pair", r1)]);
    write_fastq(&scratch.path("r2.fq"), &[("pair", plain_read())]);

    let params = scratch.params();
    let counters = PairedTrimmer::run(&params).unwrap();
    assert_eq!(counters.r2.adjusted, 1);
    assert_eq!(counters.r2.trimmed, 0);
    assert_eq!(counters.r1.trimmed, 1);
    assert_eq!(read_gz(&params.path_r2_out), expected_fastq(&[("pair", READ_LEN)]));
    assert_eq!(read_gz(&params.path_r1_out), expected_fastq(&[("pair", 31)]));
}

#[test]
fn substitution_index_accepts_one_mismatch() {
    let scratch = Scratch::new();
    // T -> C at position 3 of the primer
    write_fastq(&scratch.path("r1.fq"), &[("pair", read_with("GATCACAGG", 5))]);
    write_fastq(&scratch.path("r2.fq"), &[("pair", read_with(I5RIGHT_RC, 5))]);

    let mut params = scratch.params();
    let counters = PairedTrimmer::run(&params).unwrap();
    assert_eq!(counters.r1.found, 0);
    assert_eq!(counters.r1.adjusted, 1);

    params.snps = true;
    let counters = PairedTrimmer::run(&params).unwrap();
    assert_eq!(counters.r1.found, 1);
    assert_eq!(counters.same, 1);
    assert_eq!(
        std::fs::read_to_string(scratch.path("r1.matches")).unwrap(),
        "R1:pos3:C\tpair\t5\n"
    );
}

#[test]
fn missing_input_is_reported() {
    let scratch = Scratch::new();
    write_fastq(&scratch.path("r2.fq"), &[("pair", plain_read())]);

    let params = scratch.params();
    let err = PairedTrimmer::run(&params).unwrap_err();
    assert!(matches!(runtime_error(&err), Error::FileNotFound { .. }));
    assert_eq!(runtime_error(&err).exit_status(), 4);
    // nothing was written
    assert!(!params.path_r2_out.exists());
}

#[test]
fn overlong_primer_is_refused() {
    let scratch = Scratch::new();
    write_fastq(&scratch.path("r1.fq"), &[("pair", plain_read())]);
    write_fastq(&scratch.path("r2.fq"), &[("pair", plain_read())]);

    let mut params = scratch.params();
    params.i7left = vec![b'A'; 33];
    let err = PairedTrimmer::run(&params).unwrap_err();
    assert!(matches!(
        runtime_error(&err),
        Error::LengthExceeded { length: 33 }
    ));
}

#[test]
fn table_and_sink_failures_have_their_own_status() {
    let scratch = Scratch::new();
    write_fastq(&scratch.path("r1.fq"), &[("pair", plain_read())]);
    write_fastq(&scratch.path("r2.fq"), &[("pair", plain_read())]);

    let mut params = scratch.params();
    params.table_size = 0;
    let err = PairedTrimmer::run(&params).unwrap_err();
    assert_eq!(runtime_error(&err).exit_status(), 3);

    let mut params = scratch.params();
    params.path_r1_out = scratch.path("no/such/dir/r1.fq.gz");
    let err = PairedTrimmer::run(&params).unwrap_err();
    assert!(matches!(runtime_error(&err), Error::OutputSink { .. }));
    assert_eq!(runtime_error(&err).exit_status(), 5);
}
