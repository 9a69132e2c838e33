//! Session State
//!
//! In-memory record of the current interactive session: a bounded ring of
//! recent reports for redisplay, plus the canned example texts offered to
//! the user. Nothing here survives the process.

use std::collections::VecDeque;

use tracing::debug;

use crate::brain::SentimentReport;

/// Example texts offered by the front-end
pub const EXAMPLE_TEXTS: &[&str] = &[
    "I'm absolutely thrilled with the results!",
    "This is the worst experience I've ever had.",
    "The product is okay, nothing special.",
    "I'm slightly disappointed but it's not terrible.",
    "The weather is neither good nor bad today.",
    "It's an average day, nothing exciting.",
];

/// Per-process session state
pub struct SessionState {
    history: VecDeque<SentimentReport>,
    limit: usize,
}

impl SessionState {
    /// Create a session keeping at most `limit` reports
    pub fn new(limit: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(limit.min(64)),
            limit: limit.max(1),
        }
    }

    /// Record an analysis, evicting the oldest once over the limit
    pub fn record(&mut self, report: SentimentReport) {
        debug!("Recording analysis: {}", report.summary());
        self.history.push_back(report);
        while self.history.len() > self.limit {
            self.history.pop_front();
        }
    }

    /// The most recent report, if any
    pub fn last(&self) -> Option<&SentimentReport> {
        self.history.back()
    }

    /// All retained reports, oldest first
    #[allow(dead_code)]
    pub fn history(&self) -> impl Iterator<Item = &SentimentReport> {
        self.history.iter()
    }

    /// Number of retained reports
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been analyzed yet
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Canned example text by 1-based index, as shown to the user
    pub fn example(number: usize) -> Option<&'static str> {
        number
            .checked_sub(1)
            .and_then(|ix| EXAMPLE_TEXTS.get(ix))
            .copied()
    }
}
