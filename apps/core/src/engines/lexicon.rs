//! Lexicon Intensity Engine (Engine A).
//!
//! Rule-based scorer over a word-valence lexicon: boosters and dampeners
//! scale the following sentiment word, simple negation flips it, trailing
//! exclamation marks amplify the aggregate. Produces a full
//! [`PolarityBundle`] per call.

use std::collections::{HashMap, HashSet};

use super::{words, EngineError, IntensityEngine, PolarityBundle};

/// Strongly positive words (valence 0.9)
const STRONG_POSITIVE: &[&str] = &[
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "brilliant",
    "outstanding",
    "perfect",
    "exceptional",
    "superb",
    "magnificent",
    "thrilled",
    "awesome",
    "incredible",
    "delighted",
];

/// Moderately positive words (valence 0.6)
const POSITIVE: &[&str] = &[
    "good",
    "great",
    "nice",
    "pleasant",
    "lovely",
    "delightful",
    "happy",
    "glad",
    "pleased",
    "satisfied",
    "exciting",
    "excited",
    "interesting",
    "impressive",
    "valuable",
    "useful",
    "helpful",
    "love",
    "loved",
    "enjoy",
    "enjoyed",
    "best",
    "pumped",
];

/// Mildly positive words (valence 0.3)
const MILD_POSITIVE: &[&str] = &[
    "okay",
    "fine",
    "decent",
    "adequate",
    "acceptable",
    "reasonable",
    "positive",
    "favorable",
    "promising",
    "hopeful",
];

/// Strongly negative words (valence 0.9)
const STRONG_NEGATIVE: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "dreadful",
    "atrocious",
    "abysmal",
    "disastrous",
    "catastrophic",
    "devastating",
    "appalling",
    "worst",
    "hate",
    "hated",
    "disgusting",
];

/// Moderately negative words (valence 0.6)
const NEGATIVE: &[&str] = &[
    "bad",
    "poor",
    "disappointing",
    "disappointed",
    "frustrating",
    "frustrated",
    "annoying",
    "annoyed",
    "unpleasant",
    "upsetting",
    "disturbing",
    "sad",
    "unhappy",
    "angry",
    "sucked",
    "useless",
    "broken",
];

/// Mildly negative words (valence 0.3)
const MILD_NEGATIVE: &[&str] = &[
    "mediocre",
    "subpar",
    "lacking",
    "insufficient",
    "underwhelming",
    "boring",
    "tedious",
    "dull",
    "unremarkable",
    "forgettable",
];

/// Intensity multipliers applied to the next sentiment word
const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", 1.4),
    ("extremely", 1.4),
    ("incredibly", 1.4),
    ("totally", 1.3),
    ("really", 1.2),
    ("very", 1.2),
    ("so", 1.15),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
    ("kinda", 0.7),
];

/// Negation markers flipping the next sentiment word
const NEGATIONS: &[&str] = &[
    "not", "never", "no", "none", "nothing", "neither", "nor", "cannot", "can't", "don't", "doesn't",
    "didn't", "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't", "shouldn't",
    "couldn't", "ain't",
];

/// Sign scalar for a negated sentiment word
const NEGATION_SCALAR: f32 = -0.75;
/// How many intervening words a negation survives
const NEGATION_REACH: u8 = 3;
/// How many intervening words a booster survives
const BOOSTER_REACH: u8 = 2;
/// Per-exclamation amplification of the aggregate valence
const EXCLAMATION_BOOST: f32 = 0.1;
/// Exclamation marks counted beyond this are ignored
const MAX_EXCLAMATIONS: usize = 3;
/// Normalization constant mapping the raw valence sum into (-1, 1)
const COMPOUND_ALPHA: f32 = 1.0;

/// Lexicon/rule-based intensity engine
pub struct LexiconEngine {
    valences: HashMap<String, f32>,
    boosters: HashMap<&'static str, f32>,
    negations: HashSet<&'static str>,
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconEngine {
    /// Create an engine with the built-in word-valence lexicon
    pub fn new() -> Self {
        let mut valences = HashMap::new();
        for (tier, valence) in [
            (STRONG_POSITIVE, 0.9),
            (POSITIVE, 0.6),
            (MILD_POSITIVE, 0.3),
            (STRONG_NEGATIVE, -0.9),
            (NEGATIVE, -0.6),
            (MILD_NEGATIVE, -0.3),
        ] {
            for word in tier {
                valences.insert((*word).to_string(), valence);
            }
        }

        Self {
            valences,
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Create an engine over a caller-supplied lexicon.
    ///
    /// Entries are (word, valence) pairs with valences in `[-1, 1]`.
    /// Booster and negation rules stay the built-in ones.
    #[allow(dead_code)]
    pub fn with_lexicon(entries: &[(&str, f32)]) -> Result<Self, EngineError> {
        if entries.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }

        let mut valences = HashMap::new();
        for (word, valence) in entries {
            if !(-1.0..=1.0).contains(valence) {
                return Err(EngineError::OutOfRange {
                    what: "valence",
                    value: *valence,
                });
            }
            valences.insert(word.to_lowercase(), *valence);
        }

        Ok(Self {
            valences,
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        })
    }

    /// Look up the raw valence of a single word, ignoring context rules
    #[allow(dead_code)]
    pub fn valence(&self, word: &str) -> Option<f32> {
        self.valences.get(&word.to_lowercase()).copied()
    }
}

impl IntensityEngine for LexiconEngine {
    fn score_text(&self, text: &str) -> Result<PolarityBundle, EngineError> {
        let mut raw_sum = 0.0f32;
        let mut positive_sum = 0.0f32;
        let mut negative_sum = 0.0f32;
        let mut matched = 0usize;
        let mut total = 0usize;

        let mut boost = 1.0f32;
        let mut boost_window = 0u8;
        let mut negated = false;
        let mut negation_window = 0u8;

        for word in words(text) {
            total += 1;
            let lower = word.to_lowercase();

            if self.negations.contains(lower.as_str()) {
                negated = true;
                negation_window = NEGATION_REACH;
                continue;
            }
            if let Some(&multiplier) = self.boosters.get(lower.as_str()) {
                boost = multiplier;
                boost_window = BOOSTER_REACH;
                continue;
            }

            if let Some(&valence) = self.valences.get(&lower) {
                matched += 1;
                let mut adjusted = valence * boost;
                if negated {
                    adjusted *= NEGATION_SCALAR;
                }
                let adjusted = adjusted.clamp(-1.0, 1.0);
                if adjusted > 0.0 {
                    positive_sum += adjusted;
                } else {
                    negative_sum += -adjusted;
                }
                raw_sum += adjusted;

                boost = 1.0;
                boost_window = 0;
                negated = false;
                negation_window = 0;
            } else {
                // Context rules fade after a few unrelated words
                if boost_window > 0 {
                    boost_window -= 1;
                    if boost_window == 0 {
                        boost = 1.0;
                    }
                }
                if negation_window > 0 {
                    negation_window -= 1;
                    if negation_window == 0 {
                        negated = false;
                    }
                }
            }
        }

        if total == 0 {
            return Ok(PolarityBundle::neutral());
        }

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f32;
        let amplified = raw_sum * (1.0 + EXCLAMATION_BOOST * exclamations);
        let compound =
            (amplified / (amplified * amplified + COMPOUND_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let (positive, negative) = if matched > 0 {
            (
                (positive_sum / matched as f32).clamp(0.0, 1.0),
                (negative_sum / matched as f32).clamp(0.0, 1.0),
            )
        } else {
            (0.0, 0.0)
        };
        let neutral = (total - matched) as f32 / total as f32;

        let bundle = PolarityBundle {
            negative,
            neutral,
            positive,
            compound,
        };
        bundle.validate()?;
        Ok(bundle)
    }
}
