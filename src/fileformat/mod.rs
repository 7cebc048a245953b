pub mod fastq;
pub mod primers;

pub use fastq::{
    for_each_record, for_each_record_unchecked, open_fastq, open_report, split_head, write_fastq_read, FastqGzWriter,
    ReadRecord,
};
pub use primers::load_raw_primers;
