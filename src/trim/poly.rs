/// A trailing run must be longer than this to be trimmed
pub const DEFAULT_MIN_RUN: usize = 5;

////////////////
/// Start of the trailing homopolymer run if it is longer than `min_run`, otherwise the read length
pub fn find_poly_tail(read: &[u8], min_run: usize) -> usize {
    let Some(last) = read.last() else {
        return 0;
    };
    let run = read
        .iter()
        .rev()
        .take_while(|b| b.eq_ignore_ascii_case(last))
        .count();

    if run > min_run {
        read.len() - run
    } else {
        read.len()
    }
}
