//! Test Module
//!
//! Integration test suite for the SentiBuddy backend.
//!
//! ## Test Categories
//! - `brain_tests`: Classifier behavior over the built-in engines
//! - `engine_tests`: Cross-engine agreement and output validity
//! - `session_tests`: Analyze-record-recall flows

pub mod brain_tests;
pub mod session_tests;
