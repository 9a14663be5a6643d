//! Error handling utilities
//!
//! This module re-exports the service-wide error type and its HTTP mapping.

pub mod error;

pub use error::*;
