use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use seq_io::fastq::Reader as FastqReader;
use seq_io::fastq::Record as FastqRecord;

use crate::runtime::Error;
use crate::trim::TrimRegion;

pub type BoxedFastqReader = FastqReader<Box<dyn std::io::Read>>;

///////////////////////////////
/// One FASTQ record, owned. The head line is split at the first whitespace into id and comment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadRecord {
    pub id: Vec<u8>,
    pub comment: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}
impl ReadRecord {
    pub fn from_record<R: FastqRecord>(record: &R) -> ReadRecord {
        let (id, comment) = split_head(record.head());
        ReadRecord {
            id: id.to_vec(),
            comment: comment.to_vec(),
            seq: record.seq().to_vec(),
            qual: record.qual().to_vec(),
        }
    }

    pub fn from_bio(record: &bio::io::fastq::Record) -> ReadRecord {
        let mut head = record.id().as_bytes().to_vec();
        if let Some(desc) = record.desc() {
            head.push(b' ');
            head.extend_from_slice(desc.as_bytes());
        }
        let (id, comment) = split_head(&head);
        ReadRecord {
            id: id.to_vec(),
            comment: comment.to_vec(),
            seq: record.seq().to_vec(),
            qual: record.qual().to_vec(),
        }
    }

    pub fn has_consistent_quality(&self) -> bool {
        self.seq.len() == self.qual.len()
    }
}

////////////////
/// Split a head line into id and comment
pub fn split_head(head: &[u8]) -> (&[u8], &[u8]) {
    match head.iter().position(|b| b.is_ascii_whitespace()) {
        Some(pos) => {
            let comment = &head[pos + 1..];
            let skip = comment
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(comment.len());
            (&head[..pos], &comment[skip..])
        }
        None => (head, &[]),
    }
}

///////////////////////////////
/// Open a FASTQ file, plain or compressed
pub fn open_fastq(path: &Path) -> Result<BoxedFastqReader, Error> {
    Ok(FastqReader::new(open_decompressed(path)?))
}

fn open_decompressed(path: &Path) -> Result<Box<dyn Read>, Error> {
    let opened_handle = File::open(path).map_err(|_| Error::file_not_found(path))?;
    let (reader, compression) = niffler::get_reader(Box::new(opened_handle))
        .map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;

    debug!(
        "Opened file {} with compression {:?}",
        path.display(),
        compression
    );
    Ok(reader)
}

///////////////////////////////
/// Iterate over the records of an opened FASTQ file, converting parse failures to runtime errors
pub fn for_each_record<F>(path: &Path, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(ReadRecord) -> anyhow::Result<()>,
{
    let mut reader = open_fastq(path)?;
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;
        f(ReadRecord::from_record(&record))?;
    }
    Ok(())
}

///////////////////////////////
/// Like for_each_record, but a record whose quality and sequence lengths differ is still
/// handed over. The callback decides what to do with it, see ReadRecord::has_consistent_quality.
/// Other malformed input is still an error
pub fn for_each_record_unchecked<F>(path: &Path, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(ReadRecord) -> anyhow::Result<()>,
{
    let reader = bio::io::fastq::Reader::new(open_decompressed(path)?);
    for record in reader.records() {
        let record = record.map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;
        f(ReadRecord::from_bio(&record))?;
    }
    Ok(())
}

////////// Write one FASTQ read
pub fn write_fastq_read<W: Write>(
    writer: &mut W,
    id: &[u8],
    comment: &[u8],
    seq: &[u8],
    qual: &[u8],
) -> std::io::Result<()> {
    writer.write_all(b"@")?;
    writer.write_all(id)?;
    if !comment.is_empty() {
        writer.write_all(b" ")?;
        writer.write_all(comment)?;
    }
    writer.write_all(b"\n")?;
    writer.write_all(seq)?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(qual)?;
    writer.write_all(b"\n")?;
    Ok(())
}

///////////////////////////////
/// Gzip compressed FASTQ output
pub struct FastqGzWriter {
    writer: GzEncoder<BufWriter<File>>,
    written: u64,
}
impl FastqGzWriter {
    pub fn new(path: &Path) -> Result<FastqGzWriter, Error> {
        let file = File::create(path).map_err(|e| Error::output_sink(path, e))?;
        Ok(FastqGzWriter {
            writer: GzEncoder::new(BufWriter::new(file), Compression::default()),
            written: 0,
        })
    }

    /// Write the part of the record kept by the region; sequence and quality are cut identically
    pub fn write_trimmed(&mut self, record: &ReadRecord, region: TrimRegion) -> std::io::Result<()> {
        self.written += 1;
        write_fastq_read(
            &mut self.writer,
            &record.id,
            &record.comment,
            region.apply(&record.seq),
            region.apply(&record.qual),
        )
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finish(self) -> std::io::Result<()> {
        let mut inner = self.writer.finish()?;
        inner.flush()
    }
}

///////////////////////////////
/// Text report output: a file if given, otherwise stdout
pub fn open_report(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::output_sink(path, e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        //Stdout is line buffered, so reports sharing it interleave by line
        None => Ok(Box::new(std::io::stdout())),
    }
}
