//! Brain Integration Tests
//!
//! End-to-end classification through the built-in engines. Exact labels
//! depend on engine tuning, so these assert classes and invariants rather
//! than pinning every label.

use crate::brain::{default_classifier, Mood, SentimentClass};
use crate::engines::{IntensityEngine, LexiconEngine, PatternPolarityEngine, PolarityEngine};

#[test]
fn test_thrilled_text_is_positive() {
    let report = default_classifier()
        .analyze("I'm absolutely thrilled with the results!")
        .unwrap();

    assert_eq!(report.sentiment_class, SentimentClass::Positive);
    assert!(report.score > 0.3, "score was {}", report.score);
    assert_eq!(report.keywords, vec!["thrilled"]);
}

#[test]
fn test_worst_experience_is_negative() {
    let report = default_classifier()
        .analyze("This is the worst experience I've ever had.")
        .unwrap();

    assert_eq!(report.sentiment_class, SentimentClass::Negative);
    assert!(report.score < -0.3, "score was {}", report.score);
    assert_eq!(report.keywords, vec!["worst"]);
}

#[test]
fn test_flat_text_is_neutral() {
    let report = default_classifier()
        .analyze("The report contains seven tables.")
        .unwrap();

    assert_eq!(report.mood, Mood::Neutral);
    assert_eq!(report.sentiment_class, SentimentClass::Neutral);
    assert_eq!(report.score, 0.0);
    assert!(report.keywords.is_empty());
}

#[test]
fn test_tug_of_war_is_mixed() {
    let report = default_classifier()
        .analyze("I absolutely love it and absolutely hate it")
        .unwrap();

    assert_eq!(report.mood, Mood::MixedEmotions);
    assert_eq!(report.sentiment_class, SentimentClass::Neutral);
}

#[test]
fn test_keywords_keep_source_order_and_duplicates() {
    let report = default_classifier().analyze("great great terrible").unwrap();
    assert_eq!(report.keywords, vec!["great", "great", "terrible"]);
}

#[test]
fn test_blend_matches_engines() {
    let text = "a great day with one terrible meeting";
    let compound = LexiconEngine::new().score_text(text).unwrap().compound;
    let polarity = PatternPolarityEngine::new().score_text(text).unwrap();

    let report = default_classifier().analyze(text).unwrap();
    assert_eq!(report.score, (compound + polarity) / 2.0);
    assert!((-1.0..=1.0).contains(&report.score));
}

#[test]
fn test_punctuation_glued_tokens_are_kept_verbatim() {
    // Keyword extraction splits on whitespace only; "wonderful," keeps
    // its comma in the output because the token itself scored high.
    let report = default_classifier().analyze("wonderful, just wonderful").unwrap();
    assert_eq!(report.keywords, vec!["wonderful,", "wonderful"]);
}

#[test]
fn test_default_classifier_is_a_singleton() {
    assert!(std::ptr::eq(default_classifier(), default_classifier()));
}

#[test]
fn test_concurrent_analysis_is_safe() {
    let handles: Vec<_> = (0..4)
        .map(|ix| {
            std::thread::spawn(move || {
                let text = if ix % 2 == 0 {
                    "what a wonderful day"
                } else {
                    "what a terrible day"
                };
                default_classifier().analyze(text).unwrap().sentiment_class
            })
        })
        .collect();

    let classes: Vec<SentimentClass> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(classes[0], SentimentClass::Positive);
    assert_eq!(classes[1], SentimentClass::Negative);
    assert_eq!(classes[0], classes[2]);
    assert_eq!(classes[1], classes[3]);
}

#[test]
fn test_repeated_analysis_is_deterministic() {
    let first = default_classifier().analyze("such a lovely surprise!").unwrap();
    let second = default_classifier().analyze("such a lovely surprise!").unwrap();

    assert_eq!(first.score, second.score);
    assert_eq!(first.mood, second.mood);
    assert_eq!(first.keywords, second.keywords);
}
