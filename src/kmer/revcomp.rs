////////////////
/// Reverse complement of an encoded window. The length is needed since leading A's (00) are
/// indistinguishable from padding; without it they would all become T's
#[inline(always)]
pub fn reverse_complement(encoding: u64, length: usize) -> u64 {
    let mut enc = encoding;
    let mut rc: u64 = 0;
    for _ in 0..length {
        rc <<= 2;
        // A=00 <-> T=11, C=01 <-> G=10
        rc |= (enc & 0b11) ^ 0b11;
        enc >>= 2;
    }
    rc
}
