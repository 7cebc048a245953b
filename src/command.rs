// Module declarations (alphabetical)
pub mod basecount;
pub mod find;
pub mod pair;
pub mod trim;
pub mod trim_at_match;

pub use basecount::{BaseCounts, BasecountCMD};
pub use find::{FindCMD, FindPrimers};
pub use pair::PairCMD;
pub use trim::{TrimCMD, TrimReads, TrimStats};
pub use trim_at_match::{TrimAtMatch, TrimAtMatchCMD};
