//! dsa-util - helpers shared across the workspace.
//!
//! [`fuzzer`] produces reproducible random inputs for the differential
//! tests; [`strings`] holds the character predicates and word normalization
//! used by the frequency table.

pub mod fuzzer;
pub mod strings;

pub use fuzzer::Fuzzer;
pub use strings::{is_letter, is_punctuation, is_whitespace, normalize_word, words};
