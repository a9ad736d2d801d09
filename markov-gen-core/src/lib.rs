//! Markov chain text generation library.
//!
//! This crate learns which word follows each sequence of `N` words in a body
//! of text, then walks that table at random to produce new sentences:
//! - Sentence segmentation and sliding-window training (`Corpus`)
//! - Budgeted sentence and paragraph generation (`Generator`)
//! - Validated configuration (`Config`)
//!
//! ```
//! use markov_gen_core::model::config::Config;
//! use markov_gen_core::model::corpus::Corpus;
//! use markov_gen_core::model::generator::Generator;
//!
//! let corpus: Corpus = Corpus::from_text("The cat sat on the mat. The dog sat on the rug.", &Config::default());
//! let sentence = Generator::new(&corpus).yield_sentence(145);
//! assert!(sentence.starts_with("The"));
//! ```

/// Corpus model, generator and their supporting types.
pub mod model;

/// Error type shared by configuration and I/O helpers.
pub mod error;

/// I/O utilities (text and configuration loading).
pub mod io;

pub use error::{MarkovError, Result};
