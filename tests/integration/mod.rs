//! Integration tests for voice-todo-rs
//!
//! These tests drive the public API of the crate across module boundaries.
//! Remote calls go to stub generators or a local mock server.

pub mod api_tests;
pub mod error_handling_tests;
pub mod gateway_tests;
