//! Sentiment Report - Output structure for Brain analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engines::PolarityBundle;

use super::mood::{Mood, SentimentClass};

/// Complete result of one sentiment analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Original analyzed text
    pub text: String,

    /// Mood label from the decision table
    pub mood: Mood,

    /// Blended score in `[-1, 1]`: mean of the intensity engine's compound
    /// value and the polarity engine's value
    pub score: f32,

    /// Coarse class of the mood
    pub sentiment_class: SentimentClass,

    /// Full polarity bundle from the intensity engine
    pub bundle: PolarityBundle,

    /// Whitespace tokens of the text whose own compound score stands out,
    /// in source order, duplicates kept
    pub keywords: Vec<String>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl SentimentReport {
    /// Score remapped to `[0, 1]` for meter-style display
    pub fn meter(&self) -> f32 {
        (self.score + 1.0) / 2.0
    }

    /// Whether any emotionally loaded words were found
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Mood: {} ({:.3}), Class: {}, Keywords: {}, Pos/Neu/Neg: {:.3}/{:.3}/{:.3}",
            self.mood,
            self.score,
            self.sentiment_class.code(),
            self.keywords.len(),
            self.bundle.positive,
            self.bundle.neutral,
            self.bundle.negative,
        )
    }
}
