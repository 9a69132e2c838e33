//! # Scoring Engines
//!
//! The two sentiment scoring engines feeding the Brain classifier.
//!
//! ## Components
//! - `bundle`: The four-value polarity output of the intensity engine
//! - `lexicon`: Lexicon/rule-based intensity engine (positive/negative/neutral proportions + compound)
//! - `pattern`: Pattern-based statistical engine (single polarity value)
//!
//! Both engines sit behind traits so the classifier stays engine-agnostic;
//! callers may inject their own implementations.

pub mod bundle;
pub mod lexicon;
pub mod pattern;

// Re-export main types for convenience
pub use bundle::PolarityBundle;
pub use lexicon::LexiconEngine;
pub use pattern::PatternPolarityEngine;

use thiserror::Error;

/// Errors surfaced by a scoring engine.
///
/// The classifier performs no recovery: any of these propagates unchanged
/// to its caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The engine was built with no usable lexicon entries.
    #[error("engine lexicon is empty")]
    EmptyLexicon,

    /// A lexicon entry or produced score fell outside its valid range.
    #[error("{what} value {value} is out of range")]
    OutOfRange { what: &'static str, value: f32 },
}

/// Capability of Engine A: score a string into a full polarity bundle.
pub trait IntensityEngine {
    /// Score `text`, returning negative/neutral/positive proportions in
    /// `[0, 1]` and a compound value in `[-1, 1]`.
    fn score_text(&self, text: &str) -> Result<PolarityBundle, EngineError>;
}

/// Capability of Engine B: score a string into a single polarity value.
pub trait PolarityEngine {
    /// Score `text`, returning a polarity in `[-1, 1]`.
    fn score_text(&self, text: &str) -> Result<f32, EngineError>;
}

/// Tokenization shared by both engines: words are runs of alphabetic
/// characters, apostrophes kept so contractions survive ("don't", "I'm").
/// This is internal to the engines and independent of how the classifier
/// splits text for keyword extraction.
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| !c.is_alphabetic() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}
