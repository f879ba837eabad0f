//! Story catalog: a seeded, mutable list of story records.

pub mod catalog;
pub mod seed;

pub use catalog::StoryCatalog;
