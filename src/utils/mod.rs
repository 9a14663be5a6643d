//! Utility modules for the voice to-do service
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **logging**: subscriber initialisation and secret masking

pub mod error; // Error handling
pub mod logging; // Logging & log hygiene

