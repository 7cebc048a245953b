use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::runtime::Error;

///////////////////////////////
/// Load a flat list of primers: one per line. Header lines starting with '>' and blank lines are skipped,
/// so a single-line FASTA file works as well
pub fn load_raw_primers(path: &Path) -> Result<Vec<Vec<u8>>, Error> {
    let file = File::open(path).map_err(|_| Error::file_not_found(path))?;
    let mut primers = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::file_not_valid(path, Some(e.to_string())))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        primers.push(line.as_bytes().to_vec());
    }
    Ok(primers)
}
