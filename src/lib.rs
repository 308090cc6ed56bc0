//! # Quill
//!
//! A text correction library for Rust combining two mechanisms:
//!
//! - Rule-based correction: user-supplied pattern rules (literal or regex)
//!   with an ordered list of candidate corrections, the best one picked by
//!   string similarity.
//! - Dictionary-based correction: a fuzzy spell checker that flags
//!   out-of-vocabulary words and proposes ranked corrections via
//!   edit-distance and substring candidate generation.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Read-only dictionary and rule set, safe to share across threads
//! - Composite candidate scoring (sequence similarity, edit distance,
//!   frequency, length, character overlap)
//! - Whole-text correction with offset bookkeeping and per-rule statistics

pub mod cli;
pub mod corrector;
pub mod error;
pub mod rules;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
