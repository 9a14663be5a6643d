//! End-to-end tests against live services
//!
//! All tests here are `#[ignore]` and need real credentials.

pub mod gemini;
