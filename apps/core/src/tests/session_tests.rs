//! Session Flow Tests
//!
//! Analyze-record-recall flows as the CLI front-end drives them.

use crate::brain::default_classifier;
use crate::config::AppConfig;
use crate::session::{SessionState, EXAMPLE_TEXTS};

#[test]
fn test_analyze_and_recall_last() {
    let mut session = SessionState::new(AppConfig::default().history_limit);

    let first = default_classifier()
        .analyze(SessionState::example(1).unwrap())
        .unwrap();
    session.record(first);

    let second = default_classifier()
        .analyze(SessionState::example(2).unwrap())
        .unwrap();
    session.record(second);

    let last = session.last().unwrap();
    assert_eq!(last.text, EXAMPLE_TEXTS[1]);
    assert_eq!(session.len(), 2);
}

#[test]
fn test_history_respects_configured_limit() {
    let mut session = SessionState::new(3);

    for text in ["one fine day", "one bad day", "one great day", "one dull day"] {
        let report = default_classifier().analyze(text).unwrap();
        session.record(report);
    }

    assert_eq!(session.len(), 3);
    let texts: Vec<&str> = session.history().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["one bad day", "one great day", "one dull day"]);
}

#[test]
fn test_recall_serializes_to_json() {
    let mut session = SessionState::new(5);
    let report = default_classifier().analyze("a lovely afternoon").unwrap();
    session.record(report);

    let json = serde_json::to_string_pretty(session.last().unwrap()).unwrap();
    assert!(json.contains("\"mood\""));
    assert!(json.contains("\"bundle\""));
    assert!(json.contains("a lovely afternoon"));
}
