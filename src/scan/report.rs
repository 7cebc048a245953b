use std::io::Write;

///////////////////////////////
/// Tab separated match report: primer id, read id, offset, optionally the matched window
pub struct MatchReport<W: Write> {
    writer: W,
    lines: u64,
}
impl<W: Write> MatchReport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    pub fn write_hit(
        &mut self,
        primer_id: &str,
        read_id: &[u8],
        offset: usize,
        window: Option<&[u8]>,
    ) -> std::io::Result<()> {
        self.writer.write_all(primer_id.as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(read_id)?;
        write!(self.writer, "\t{}", offset)?;
        if let Some(window) = window {
            self.writer.write_all(b"\t")?;
            self.writer.write_all(window)?;
        }
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
