use log::info;

use crate::pairing::Mate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MateCounts {
    pub seen: u64,
    pub found: u64,
    pub adjusted: u64,
    pub trimmed: u64,
}

///////////////////////////////
/// Tallies kept across the three passes of a paired run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconciliationCounters {
    pub r1: MateCounts,
    pub r2: MateCounts,
    /// Pairs whose offsets already agreed, including pairs with no primer at all
    pub same: u64,
    /// R2 reads with no R1 entry
    pub unpaired: u64,
    /// R1 reads that were not in the table on the final pass
    pub r1_missing: u64,
}
impl ReconciliationCounters {
    pub fn mate_mut(&mut self, mate: Mate) -> &mut MateCounts {
        match mate {
            Mate::R1 => &mut self.r1,
            Mate::R2 => &mut self.r2,
        }
    }

    pub fn log_summary(&self) {
        info!("Total sequences: R1 {} R2 {}", self.r1.seen, self.r2.seen);
        info!("Primer found: R1 {} R2 {}", self.r1.found, self.r2.found);
        info!("Same Offset: {} (includes no adapter)", self.same);
        info!(
            "Adjusted offset: R1 {} R2 {}",
            self.r1.adjusted, self.r2.adjusted
        );
        info!(
            "Sequences trimmed: R1 {} R2 {}",
            self.r1.trimmed, self.r2.trimmed
        );
        if self.unpaired > 0 || self.r1_missing > 0 {
            info!(
                "Unpaired: R2 without R1 {} R1 without entry {}",
                self.unpaired, self.r1_missing
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_mut() {
        let mut counters = ReconciliationCounters::default();
        counters.mate_mut(Mate::R1).adjusted += 1;
        counters.mate_mut(Mate::R2).adjusted += 2;
        assert_eq!(counters.r1.adjusted, 1);
        assert_eq!(counters.r2.adjusted, 2);
        counters.log_summary();
    }
}
