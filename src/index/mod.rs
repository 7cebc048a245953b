pub mod loader;
pub mod primer_index;

pub use loader::{
    encode_primer, load_primer_index, resolve_primer, substitution_index, LoadedPrimers,
    REVERSE_COMPLEMENT_SUFFIX,
};
pub use primer_index::{InsertOutcome, KmerLookup, PrimerIndex, PrimerNode, SinglePrimer};
