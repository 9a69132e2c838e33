//! Mood labels and coarse sentiment classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sentiment class of an analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    /// Returns the class code used in serialized output
    pub fn code(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Negative => "negative",
            SentimentClass::Neutral => "neutral",
        }
    }
}

/// Mood label produced by the classifier decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Both positive and negative proportions run high at once
    MixedEmotions,
    ExtremelyPositive,
    VeryPositive,
    SlightlyPositive,
    SlightlyNegative,
    VeryNegative,
    ExtremelyNegative,
    Neutral,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Mood {
    /// Returns the human-readable mood label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::MixedEmotions => "Mixed Emotions",
            Mood::ExtremelyPositive => "Extremely Positive",
            Mood::VeryPositive => "Very Positive",
            Mood::SlightlyPositive => "Slightly Positive",
            Mood::SlightlyNegative => "Slightly Negative",
            Mood::VeryNegative => "Very Negative",
            Mood::ExtremelyNegative => "Extremely Negative",
            Mood::Neutral => "Neutral",
        }
    }

    /// Returns the emoji shown next to the label in the result card
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::MixedEmotions => "😵",
            Mood::ExtremelyPositive => "🤩",
            Mood::VeryPositive => "😍",
            Mood::SlightlyPositive => "🙂",
            Mood::SlightlyNegative => "😕",
            Mood::VeryNegative => "😡",
            Mood::ExtremelyNegative => "💢",
            Mood::Neutral => "😐",
        }
    }

    /// Returns the coarse class this mood belongs to
    pub fn class(&self) -> SentimentClass {
        match self {
            Mood::ExtremelyPositive | Mood::VeryPositive | Mood::SlightlyPositive => {
                SentimentClass::Positive
            }
            Mood::ExtremelyNegative | Mood::VeryNegative | Mood::SlightlyNegative => {
                SentimentClass::Negative
            }
            Mood::MixedEmotions | Mood::Neutral => SentimentClass::Neutral,
        }
    }
}
