use std::fmt;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mate {
    R1,
    R2,
}
impl fmt::Display for Mate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mate::R1 => write!(f, "R1"),
            Mate::R2 => write!(f, "R2"),
        }
    }
}

///////////////////////////////
/// One mate had its trim offset moved to agree with the other mate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjustment {
    pub mate: Mate,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

///////////////////////////////
/// Outcome of comparing the offsets found in R1 and R2 for one read pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Offset both mates are trimmed at; None means neither is trimmed
    pub offset: Option<usize>,
    pub adjustment: Option<Adjustment>,
    /// Both mates had a primer, at different offsets
    pub conflict: bool,
}
impl Resolution {
    pub fn is_same(&self) -> bool {
        self.adjustment.is_none()
    }
}

///////////////////////////////
/// Decide the offset for a read pair.
///
/// * equal offsets (including both missing) are kept as they are
/// * if only one mate has a primer, the other adopts its offset
/// * if the mates disagree, both take the smaller offset and the mate that moved is recorded
pub fn reconcile(r1: Option<usize>, r2: Option<usize>) -> Resolution {
    match (r1, r2) {
        (a, b) if a == b => Resolution {
            offset: a,
            adjustment: None,
            conflict: false,
        },
        (Some(r1_offset), None) => Resolution {
            offset: Some(r1_offset),
            adjustment: Some(Adjustment {
                mate: Mate::R2,
                from: None,
                to: Some(r1_offset),
            }),
            conflict: false,
        },
        (None, Some(r2_offset)) => Resolution {
            offset: Some(r2_offset),
            adjustment: Some(Adjustment {
                mate: Mate::R1,
                from: None,
                to: Some(r2_offset),
            }),
            conflict: false,
        },
        (Some(r1_offset), Some(r2_offset)) => {
            let (mate, from, to) = if r2_offset < r1_offset {
                (Mate::R1, r1_offset, r2_offset)
            } else {
                (Mate::R2, r2_offset, r1_offset)
            };
            Resolution {
                offset: Some(to),
                adjustment: Some(Adjustment {
                    mate,
                    from: Some(from),
                    to: Some(to),
                }),
                conflict: true,
            }
        }
        //Covered by the equality arm
        (None, None) => Resolution {
            offset: None,
            adjustment: None,
            conflict: false,
        },
    }
}

////////////////
/// Offsets are printed as -1 when no primer was found
pub fn format_offset(offset: Option<usize>) -> String {
    match offset {
        Some(o) => o.to_string(),
        None => "-1".to_string(),
    }
}

///////////////////////////////
/// Audit trail of offset adjustments, one tab separated row per adjustment
pub struct AdjustmentLog<W: Write> {
    writer: W,
    rows: u64,
}
impl<W: Write> AdjustmentLog<W> {
    /// Writes the header line right away
    pub fn new(mut writer: W) -> std::io::Result<Self> {
        writeln!(writer, "R1/R2\tSeq ID\tFrom\tTo")?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn record(&mut self, read_id: &[u8], adjustment: &Adjustment) -> std::io::Result<()> {
        write!(self.writer, "{}\t", adjustment.mate)?;
        self.writer.write_all(read_id)?;
        writeln!(
            self.writer,
            "\t{}\t{}",
            format_offset(adjustment.from),
            format_offset(adjustment.to)
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_offsets() {
        let res = reconcile(Some(5), Some(5));
        assert_eq!(res.offset, Some(5));
        assert!(res.is_same());
        assert!(!res.conflict);

        let res = reconcile(None, None);
        assert_eq!(res.offset, None);
        assert!(res.is_same());
    }

    #[test]
    fn test_only_r2_matched() {
        let res = reconcile(None, Some(7));
        assert_eq!(res.offset, Some(7));
        assert_eq!(
            res.adjustment,
            Some(Adjustment {
                mate: Mate::R1,
                from: None,
                to: Some(7)
            })
        );
    }

    #[test]
    fn test_only_r1_matched() {
        let res = reconcile(Some(12), None);
        assert_eq!(res.offset, Some(12));
        assert_eq!(res.adjustment.unwrap().mate, Mate::R2);
        assert_eq!(res.adjustment.unwrap().from, None);
    }

    #[test]
    fn test_conflict_takes_smaller() {
        let res = reconcile(Some(10), Some(4));
        assert_eq!(res.offset, Some(4));
        assert!(res.conflict);
        assert_eq!(
            res.adjustment,
            Some(Adjustment {
                mate: Mate::R1,
                from: Some(10),
                to: Some(4)
            })
        );

        let res = reconcile(Some(3), Some(9));
        assert_eq!(res.offset, Some(3));
        assert_eq!(res.adjustment.unwrap().mate, Mate::R2);
    }

    #[test]
    fn test_adjustment_log_rows() {
        let mut log = AdjustmentLog::new(Vec::new()).unwrap();
        log.record(b"readA", &reconcile(None, Some(7)).adjustment.unwrap())
            .unwrap();
        log.record(b"readB", &reconcile(Some(10), Some(4)).adjustment.unwrap())
            .unwrap();
        assert_eq!(log.rows(), 2);
        let out = String::from_utf8(log.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "R1/R2\tSeq ID\tFrom\tTo\nR1\treadA\t-1\t7\nR1\treadB\t10\t4\n"
        );
    }
}
