//! Polarity Bundle - the four-value output of the intensity engine.

use serde::{Deserialize, Serialize};

use super::EngineError;

/// Full polarity breakdown for a piece of text.
///
/// `negative`, `neutral` and `positive` are proportions in `[0, 1]`;
/// `compound` is the normalized aggregate polarity in `[-1, 1]`.
/// A bundle is produced fresh per scoring call and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityBundle {
    /// Negative proportion in `[0, 1]`.
    pub negative: f32,
    /// Neutral proportion in `[0, 1]`.
    pub neutral: f32,
    /// Positive proportion in `[0, 1]`.
    pub positive: f32,
    /// Normalized aggregate polarity in `[-1, 1]`.
    pub compound: f32,
}

impl PolarityBundle {
    /// Bundle for text with no detectable sentiment.
    pub fn neutral() -> Self {
        Self {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound: 0.0,
        }
    }

    /// Check all four components against their ranges.
    ///
    /// Engines call this before returning a bundle so a misbehaving
    /// implementation surfaces as an [`EngineError`] instead of leaking
    /// nonsense into the classifier.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (what, value) in [
            ("negative", self.negative),
            ("neutral", self.neutral),
            ("positive", self.positive),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::OutOfRange { what, value });
            }
        }
        if !(-1.0..=1.0).contains(&self.compound) {
            return Err(EngineError::OutOfRange {
                what: "compound",
                value: self.compound,
            });
        }
        Ok(())
    }
}
