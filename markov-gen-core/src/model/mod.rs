//! Word-level Markov text generation.
//!
//! - Sentinel-aware tokens and fixed-size keys (`Token`, `Key`)
//! - Training parameters (`Config`)
//! - The transition table built from raw text (`Corpus`)
//! - Random walks over that table (`Generator`)

/// Tunable segmentation and generation parameters.
///
/// Loadable from JSON, validated before use.
pub mod config;

/// Word-level transition table.
///
/// Handles sentence segmentation, whitespace tokenization,
/// and sliding-window transition recording.
pub mod corpus;

/// Sentence and multi-sentence generation with character budgets
/// and retry limits.
pub mod generator;

/// Tokens with explicit sentence boundaries, and the fixed-size keys
/// built from them.
pub mod token;
