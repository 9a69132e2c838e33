//! Pattern Polarity Engine (Engine B).
//!
//! Statistical-style scorer: the polarity of a text is the mean polarity of
//! its matched words, adjusted by the directly preceding modifier and by
//! surface emphasis (exclamation runs, all-caps shouting). Produces a single
//! value in `[-1, 1]`.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::{words, EngineError, PolarityEngine};

/// Word polarities in `[-1, 1]`
const POLARITY_WORDS: &[(&str, f32)] = &[
    // Positive
    ("love", 0.6),
    ("loved", 0.6),
    ("like", 0.4),
    ("great", 0.8),
    ("good", 0.7),
    ("best", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.8),
    ("wonderful", 1.0),
    ("excellent", 1.0),
    ("thrilled", 0.8),
    ("happy", 0.8),
    ("nice", 0.6),
    ("okay", 0.3),
    ("fine", 0.4),
    ("perfect", 1.0),
    ("impressive", 0.9),
    ("delightful", 0.9),
    ("exciting", 0.7),
    ("pumped", 0.7),
    // Negative
    ("hate", -0.7),
    ("hated", -0.7),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("bad", -0.7),
    ("poor", -0.6),
    ("sad", -0.5),
    ("angry", -0.6),
    ("disappointing", -0.6),
    ("disappointed", -0.6),
    ("boring", -0.4),
    ("annoying", -0.6),
    ("sucked", -0.6),
    ("broken", -0.4),
    ("dreadful", -1.0),
    ("mediocre", -0.3),
];

/// Multipliers applied to the word right after them
const MODIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("absolutely", 1.3),
    ("extremely", 1.3),
    ("so", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.6),
    ("barely", 0.4),
];

/// Negation markers flipping the word right after them
const NEGATIONS: &[&str] = &[
    "not", "never", "no", "don't", "doesn't", "didn't", "isn't", "wasn't", "won't", "can't",
    "couldn't",
];

/// Sign scalar for a negated word
const NEGATION_SCALAR: f32 = -0.5;
/// Per-exclamation amplification of the mean polarity
const EXCLAMATION_BOOST: f32 = 0.06;
/// Exclamation marks counted beyond this are ignored
const MAX_EXCLAMATIONS: usize = 4;
/// Amplification when the text shouts in all caps
const ALL_CAPS_BOOST: f32 = 1.1;

// Compile emphasis pattern once at startup
static ALL_CAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{3,}\b").expect("Invalid regex: all-caps emphasis pattern")
});

/// What the previous token does to the current one
enum Modifier {
    Negate,
    Scale(f32),
}

/// Pattern-based polarity engine
pub struct PatternPolarityEngine {
    polarities: HashMap<&'static str, f32>,
    modifiers: HashMap<&'static str, f32>,
    negations: HashSet<&'static str>,
}

impl Default for PatternPolarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternPolarityEngine {
    /// Create an engine with the built-in polarity table
    pub fn new() -> Self {
        Self {
            polarities: POLARITY_WORDS.iter().copied().collect(),
            modifiers: MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }
}

impl PolarityEngine for PatternPolarityEngine {
    fn score_text(&self, text: &str) -> Result<f32, EngineError> {
        let mut pending: Option<Modifier> = None;
        let mut sum = 0.0f32;
        let mut matched = 0usize;

        for word in words(text) {
            let lower = word.to_lowercase();

            if self.negations.contains(lower.as_str()) {
                pending = Some(Modifier::Negate);
                continue;
            }
            if let Some(&scale) = self.modifiers.get(lower.as_str()) {
                pending = Some(Modifier::Scale(scale));
                continue;
            }

            if let Some(&polarity) = self.polarities.get(lower.as_str()) {
                let adjusted = match pending.take() {
                    Some(Modifier::Negate) => polarity * NEGATION_SCALAR,
                    Some(Modifier::Scale(scale)) => (polarity * scale).clamp(-1.0, 1.0),
                    None => polarity,
                };
                sum += adjusted;
                matched += 1;
            } else {
                // Modifiers only reach the directly following word
                pending = None;
            }
        }

        if matched == 0 {
            return Ok(0.0);
        }

        let mut polarity = sum / matched as f32;

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f32;
        polarity *= 1.0 + EXCLAMATION_BOOST * exclamations;
        if ALL_CAPS.is_match(text) {
            polarity *= ALL_CAPS_BOOST;
        }

        Ok(polarity.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_and_negative_signs() {
        let engine = PatternPolarityEngine::new();
        assert!(engine.score_text("such a great experience").unwrap() > 0.0);
        assert!(engine.score_text("a truly horrible experience").unwrap() < 0.0);
    }

    #[test]
    fn test_no_match_is_zero() {
        let engine = PatternPolarityEngine::new();
        assert_eq!(engine.score_text("the report contains seven tables").unwrap(), 0.0);
        assert_eq!(engine.score_text("").unwrap(), 0.0);
    }

    #[test]
    fn test_mean_over_matches() {
        let engine = PatternPolarityEngine::new();
        // (0.8 + -1.0) / 2 = -0.1
        let polarity = engine.score_text("great but terrible").unwrap();
        assert!((polarity + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_modifier_scales_next_word() {
        let engine = PatternPolarityEngine::new();
        let plain = engine.score_text("good").unwrap();
        let boosted = engine.score_text("very good").unwrap();
        let damped = engine.score_text("slightly good").unwrap();
        assert!(boosted > plain);
        assert!(damped < plain && damped > 0.0);
    }

    #[test]
    fn test_modifier_does_not_reach_past_a_word() {
        let engine = PatternPolarityEngine::new();
        let plain = engine.score_text("the weather is good").unwrap();
        let gapped = engine.score_text("very nasty weather is good").unwrap();
        assert!((plain - gapped).abs() < 1e-6);
    }

    #[test]
    fn test_negation_flips_next_word() {
        let engine = PatternPolarityEngine::new();
        // 0.7 * -0.5 = -0.35
        let polarity = engine.score_text("not good").unwrap();
        assert!((polarity + 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_exclamation_amplifies() {
        let engine = PatternPolarityEngine::new();
        let calm = engine.score_text("this is good").unwrap();
        let loud = engine.score_text("this is good!!").unwrap();
        assert!(loud > calm);
    }

    #[test]
    fn test_all_caps_amplifies() {
        let engine = PatternPolarityEngine::new();
        let calm = engine.score_text("this is great").unwrap();
        let shouted = engine.score_text("this is GREAT").unwrap();
        assert!(shouted > calm);
    }

    #[test]
    fn test_clamped_to_valid_range() {
        let engine = PatternPolarityEngine::new();
        let polarity = engine.score_text("best awesome perfect!!!!").unwrap();
        assert!(polarity <= 1.0);
        let polarity = engine.score_text("worst awful terrible!!!!").unwrap();
        assert!(polarity >= -1.0);
    }
}
