pub mod command;
pub mod fileformat;
pub mod index;
pub mod kmer;
pub mod pairing;
pub mod runtime;
pub mod scan;
pub mod trim;
