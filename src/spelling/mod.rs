//! Dictionary-based fuzzy spelling correction.
//!
//! This module provides the vocabulary store, string similarity metrics, and
//! the candidate generation/scoring engine used by the dictionary pass of the
//! text corrector.

pub mod dictionary;
pub mod similarity;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::*;
pub use similarity::*;
pub use suggest::*;
