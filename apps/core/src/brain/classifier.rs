//! Mood Classifier - Main orchestrator for the Brain module.
//!
//! Blends the two engine scores into a single value, resolves the mood
//! label through an order-sensitive decision table, and collects the
//! emotionally loaded words of the text.

use chrono::Utc;
use std::sync::OnceLock;
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::{
    EngineError, IntensityEngine, LexiconEngine, PatternPolarityEngine, PolarityBundle,
    PolarityEngine,
};

use super::mood::Mood;
use super::report::SentimentReport;

/// Positive AND negative proportions above this mean mixed emotions
const MIXED_FLOOR: f32 = 0.4;
/// Blended-score magnitude for the "Extremely" tier
const EXTREME_TIER: f32 = 0.6;
/// Blended-score magnitude for the "Very" tier
const STRONG_TIER: f32 = 0.3;
/// Blended-score magnitude for the "Slightly" tier
const MILD_TIER: f32 = 0.1;
/// A token is a keyword when its own compound magnitude strictly exceeds this
const KEYWORD_CUTOFF: f32 = 0.3;

/// Lazy-initialized classifier over the built-in engines.
/// Built on first use, lives for the process.
static DEFAULT_CLASSIFIER: OnceLock<MoodClassifier<LexiconEngine, PatternPolarityEngine>> =
    OnceLock::new();

/// Get or initialize the process-wide classifier over the built-in engines
pub fn default_classifier() -> &'static MoodClassifier<LexiconEngine, PatternPolarityEngine> {
    DEFAULT_CLASSIFIER.get_or_init(|| {
        info!("Initializing built-in sentiment engines...");
        MoodClassifier::new(LexiconEngine::new(), PatternPolarityEngine::new())
    })
}

/// Resolve the mood label. First match wins: the mixed-emotions check must
/// run before the magnitude ladder, since a mixed bundle can also satisfy a
/// magnitude branch.
fn resolve_mood(bundle: &PolarityBundle, score: f32) -> Mood {
    if bundle.positive > MIXED_FLOOR && bundle.negative > MIXED_FLOOR {
        Mood::MixedEmotions
    } else if score >= EXTREME_TIER {
        Mood::ExtremelyPositive
    } else if score >= STRONG_TIER {
        Mood::VeryPositive
    } else if score >= MILD_TIER {
        Mood::SlightlyPositive
    } else if score <= -EXTREME_TIER {
        Mood::ExtremelyNegative
    } else if score <= -STRONG_TIER {
        Mood::VeryNegative
    } else if score <= -MILD_TIER {
        Mood::SlightlyNegative
    } else {
        Mood::Neutral
    }
}

/// Stateless classifier over an injected pair of scoring engines.
///
/// Holds no mutable state: a single instance is safe to share across
/// threads and call repeatedly. Engine failures propagate unchanged.
pub struct MoodClassifier<A, B> {
    intensity: A,
    polarity: B,
}

impl<A: IntensityEngine, B: PolarityEngine> MoodClassifier<A, B> {
    /// Create a classifier over the given engines
    pub fn new(intensity: A, polarity: B) -> Self {
        Self {
            intensity,
            polarity,
        }
    }

    /// Analyze a text and produce a sentiment report.
    ///
    /// Callers are responsible for screening out empty or whitespace-only
    /// text before invoking this; the classifier does not special-case it.
    pub fn analyze(&self, text: &str) -> Result<SentimentReport, EngineError> {
        let start = Instant::now();

        let bundle = self.intensity.score_text(text)?;
        let polarity = self.polarity.score_text(text)?;

        let score = (bundle.compound + polarity) / 2.0;
        let mood = resolve_mood(&bundle, score);
        let keywords = self.emotive_keywords(text)?;

        let report = SentimentReport {
            text: text.to_string(),
            mood,
            score,
            sentiment_class: mood.class(),
            bundle,
            keywords,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };
        debug!("{}", report.summary());

        Ok(report)
    }

    /// Collect whitespace tokens whose own compound score stands out.
    ///
    /// Each token is re-scored through the intensity engine on its own, with
    /// no punctuation stripping or case folding here; source order and
    /// duplicates are preserved.
    fn emotive_keywords(&self, text: &str) -> Result<Vec<String>, EngineError> {
        let mut keywords = Vec::new();
        for token in text.split_whitespace() {
            let compound = self.intensity.score_text(token)?.compound;
            if compound > KEYWORD_CUTOFF || compound < -KEYWORD_CUTOFF {
                keywords.push(token.to_string());
            }
        }
        Ok(keywords)
    }
}
