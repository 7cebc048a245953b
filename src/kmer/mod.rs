pub mod codec;
pub mod revcomp;

pub use codec::AmbiguousBaseNotice;
pub use codec::KmerCodec;
pub use codec::MAX_KMER_SIZE;
pub use codec::{decode, encode, rolling_encode};
pub use revcomp::reverse_complement;
