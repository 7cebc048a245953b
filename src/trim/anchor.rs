use crate::trim::{find_poly_tail, TrimRegion};

/// Primers are searched for at read offsets below this on the left end
pub const SEARCH_WINDOW: usize = 20;
/// Shortest aligned span accepted as a primer hit
pub const MIN_ANCHOR: usize = 11;
pub const MAX_MISMATCHES: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorParams {
    pub search_window: usize,
    pub min_anchor: usize,
    pub max_mismatches: usize,
}
impl Default for AnchorParams {
    fn default() -> Self {
        AnchorParams {
            search_window: SEARCH_WINDOW,
            min_anchor: MIN_ANCHOR,
            max_mismatches: MAX_MISMATCHES,
        }
    }
}

////////////////
/// Length of the ungapped alignment of primer and read from their first bases, stopping before the
/// mismatch that exceeds the budget. The span always ends on a matching base
fn aligned_span(primer: &[u8], read: &[u8], max_mismatches: usize) -> usize {
    let mut mismatches = 0;
    let mut span = 0;
    for (p, r) in primer.iter().zip(read) {
        if !p.eq_ignore_ascii_case(r) {
            mismatches += 1;
            if mismatches > max_mismatches {
                break;
            }
        }
        span += 1;
    }
    while span > 0 && !primer[span - 1].eq_ignore_ascii_case(&read[span - 1]) {
        span -= 1;
    }
    span
}

///////////////////////////////
/// Boundary right after a primer found near the start of the read, or 0 if there is none.
/// Any suffix of a primer may anchor, as long as at least `min_anchor` bases of it align
pub fn find_left_boundary<P: AsRef<[u8]>>(primers: &[P], read: &[u8], params: &AnchorParams) -> usize {
    for primer in primers {
        let primer = primer.as_ref();
        if primer.len() < params.min_anchor {
            continue;
        }
        for read_offset in 0..params.search_window.min(read.len()) {
            for primer_offset in 0..=primer.len() - params.min_anchor {
                let span = aligned_span(
                    &primer[primer_offset..],
                    &read[read_offset..],
                    params.max_mismatches,
                );
                if span >= params.min_anchor {
                    return read_offset + span;
                }
            }
        }
    }
    0
}

///////////////////////////////
/// Start of the first primer found at or after `left`, or the read length if there is none.
/// Here the alignment must also begin on a matching base
pub fn find_right_boundary<P: AsRef<[u8]>>(
    primers: &[P],
    read: &[u8],
    left: usize,
    params: &AnchorParams,
) -> usize {
    if read.len() < params.min_anchor {
        return read.len();
    }
    let last_offset = read.len() - params.min_anchor;

    for primer in primers {
        let primer = primer.as_ref();
        if primer.len() < params.min_anchor {
            continue;
        }
        for read_offset in left..=last_offset {
            for primer_offset in 0..=primer.len() - params.min_anchor {
                let primer_tail = &primer[primer_offset..];
                let read_tail = &read[read_offset..];
                if !primer_tail[0].eq_ignore_ascii_case(&read_tail[0]) {
                    continue;
                }
                let span = aligned_span(primer_tail, read_tail, params.max_mismatches);
                if span >= params.min_anchor {
                    return read_offset;
                }
            }
        }
    }
    read.len()
}

///////////////////////////////
/// Left/right primer lists plus poly-tail setting; works out what to keep of each read
#[derive(Clone, Debug, Default)]
pub struct AnchorTrimmer {
    pub left_primers: Vec<Vec<u8>>,
    pub right_primers: Vec<Vec<u8>>,
    /// None disables the poly-tail check
    pub poly_min_run: Option<usize>,
    pub params: AnchorParams,
}
impl AnchorTrimmer {
    pub fn region(&self, seq: &[u8]) -> TrimRegion {
        let left = if self.left_primers.is_empty() {
            0
        } else {
            find_left_boundary(&self.left_primers, seq, &self.params)
        };
        let right = if self.right_primers.is_empty() {
            seq.len()
        } else {
            find_right_boundary(&self.right_primers, seq, left, &self.params)
        };
        let poly = match self.poly_min_run {
            Some(min_run) => find_poly_tail(seq, min_run),
            None => seq.len(),
        };
        TrimRegion::new(left, right, poly)
    }
}
