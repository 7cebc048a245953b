pub mod counters;
pub mod pipeline;
pub mod reconcile;
pub mod table;

pub use counters::{MateCounts, ReconciliationCounters};
pub use pipeline::{PairedTrimParams, PairedTrimmer};
pub use reconcile::{format_offset, reconcile, Adjustment, AdjustmentLog, Mate, Resolution};
pub use table::{hash, R1ReadEntry, ReadTable};
