///////////////////////////////
/// The part of a read that is kept: `[start, end)`. An inverted region keeps nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrimRegion {
    pub start: usize,
    pub end: usize,
}
impl TrimRegion {
    pub fn new(left: usize, right: usize, poly: usize) -> Self {
        let end = right.min(poly);
        TrimRegion {
            start: left,
            end: end.max(left),
        }
    }

    /// Keep everything before `offset`
    pub fn cut_at(offset: usize) -> Self {
        TrimRegion { start: 0, end: offset }
    }

    pub fn whole(len: usize) -> Self {
        TrimRegion { start: 0, end: len }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Does this region drop anything from a read of this length?
    pub fn trims(&self, read_len: usize) -> bool {
        self.start > 0 || self.end < read_len
    }

    /// View of the kept bases. Sequence and quality are sliced separately, never altered
    pub fn apply<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        let end = self.end.min(data.len());
        let start = self.start.min(end);
        &data[start..end]
    }
}
