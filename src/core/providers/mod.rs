//! Remote text-generation backends
//!
//! The refinement gateway only needs "prompt in, text out", so every backend
//! is reduced to the [`TextGenerator`] trait. Gemini is the only backend
//! shipped today.

pub mod error;
pub mod gemini;

use async_trait::async_trait;

pub use error::ProviderError;

/// A backend that turns a prompt into free-form text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Generate a completion for `prompt`.
    ///
    /// Implementations return the raw model text; callers do their own
    /// cleanup and fallback.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
