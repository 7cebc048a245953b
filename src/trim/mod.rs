pub mod anchor;
pub mod poly;
pub mod region;

pub use anchor::{find_left_boundary, find_right_boundary, AnchorParams, AnchorTrimmer};
pub use poly::{find_poly_tail, DEFAULT_MIN_RUN};
pub use region::TrimRegion;
