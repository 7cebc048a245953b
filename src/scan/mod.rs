pub mod report;
pub mod scanner;

pub use report::MatchReport;
pub use scanner::{first_hit, scan, Hit, ScanHits};
