//! AI refinement gateway
//!
//! Wraps the remote text generator with the dual-window request budget.
//! Admission is decided before any network call is issued. Once admitted,
//! every remote failure (network error, timeout, non-2xx status, malformed
//! or empty payload) degrades to returning the caller's original text; only
//! budget exhaustion is reported as an error.

mod prompt;

pub use prompt::{build_prompt, clean_response};

use crate::core::providers::TextGenerator;
use crate::core::rate_limiter::{DualWindowLimiter, RateLimitExceeded, UsageSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on a single remote call
pub const DEFAULT_REFINE_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a refinement attempt that passed admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    /// Refined text, or the original text after a remote failure
    pub text: String,
    /// Whether `text` came from the model
    pub refined: bool,
}

/// Rate-limited front door to a [`TextGenerator`]
pub struct RefinementGateway {
    limiter: Arc<DualWindowLimiter>,
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl fmt::Debug for RefinementGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefinementGateway")
            .field("limiter", &self.limiter)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RefinementGateway {
    pub fn new(limiter: Arc<DualWindowLimiter>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            limiter,
            generator,
            timeout: DEFAULT_REFINE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Refine `text`, optionally merging in `context`.
    ///
    /// Returns the original text when the remote call fails for any reason
    /// other than the local budget.
    pub async fn refine(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<String, RateLimitExceeded> {
        self.refine_detailed(text, context).await.map(|r| r.text)
    }

    /// Like [`refine`](Self::refine) but reports whether the model output was used
    pub async fn refine_detailed(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<Refinement, RateLimitExceeded> {
        // Counted before the first await so concurrent callers cannot
        // overshoot the budget.
        let counts = self.limiter.try_acquire()?;
        debug!(
            minute = counts.minute,
            day = counts.day,
            "Refinement admitted"
        );

        let prompt = build_prompt(text, context);
        let outcome = tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await;

        let fallback = || Refinement {
            text: text.to_string(),
            refined: false,
        };

        match outcome {
            Ok(Ok(raw)) => {
                let cleaned = clean_response(&raw);
                if cleaned.is_empty() {
                    warn!(
                        "{} returned blank text, keeping the original",
                        self.generator.name()
                    );
                    Ok(fallback())
                } else {
                    debug!("Refined task text: {}", cleaned);
                    Ok(Refinement {
                        text: cleaned,
                        refined: true,
                    })
                }
            }
            Ok(Err(e)) => {
                warn!("Refinement failed, keeping the original text: {}", e);
                Ok(fallback())
            }
            Err(_) => {
                warn!(
                    "{} did not answer within {:?}, keeping the original text",
                    self.generator.name(),
                    self.timeout
                );
                Ok(fallback())
            }
        }
    }

    /// Current budget usage; never rolls a window
    pub fn usage(&self) -> UsageSnapshot {
        self.limiter.usage()
    }

    pub fn limiter(&self) -> &Arc<DualWindowLimiter> {
        &self.limiter
    }
}
