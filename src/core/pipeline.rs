//! Voice-to-task composition
//!
//! Finished transcript text goes through extraction, optional refinement
//! and a second extraction over the refined wording, producing a draft the
//! caller can confirm and store.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::core::rate_limiter::RateLimitExceeded;
use crate::core::refine::RefinementGateway;
use crate::core::tasks::NewTask;
use crate::core::temporal::{self, TemporalMatch};

/// A task ready for confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub text: String,
    pub temporal: TemporalMatch,
    pub due_date: Option<String>,
    /// Whether `text` came back from the model
    pub refined: bool,
}

impl TaskDraft {
    pub fn into_new_task(self, user_id: impl Into<String>) -> NewTask {
        NewTask::new(user_id, self.text, self.due_date)
    }
}

/// Runs extraction and refinement for captured text
#[derive(Debug, Clone)]
pub struct TaskComposer {
    gateway: Arc<RefinementGateway>,
}

impl TaskComposer {
    pub fn new(gateway: Arc<RefinementGateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<RefinementGateway> {
        &self.gateway
    }

    /// Compose a draft relative to the local calendar date
    pub async fn compose(
        &self,
        text: &str,
        context: Option<&str>,
        refine: bool,
    ) -> Result<TaskDraft, RateLimitExceeded> {
        self.compose_on(text, context, refine, Local::now().date_naive())
            .await
    }

    /// Compose a draft relative to `today`.
    ///
    /// Scheduling found in the refined wording wins over the raw transcript,
    /// unless the refined text lost it entirely.
    pub async fn compose_on(
        &self,
        text: &str,
        context: Option<&str>,
        refine: bool,
        today: NaiveDate,
    ) -> Result<TaskDraft, RateLimitExceeded> {
        let text = text.trim();
        let mut temporal = temporal::extract_on(text, today);

        if !refine {
            return Ok(draft(text.to_string(), temporal, false));
        }

        let refinement = self.gateway.refine_detailed(text, context).await?;
        if refinement.refined {
            let reextracted = temporal::extract_on(&refinement.text, today);
            if !reextracted.is_empty() {
                debug!(
                    "Using scheduling from refined text: {:?}",
                    reextracted.found_keywords
                );
                temporal = reextracted;
            }
        }

        Ok(draft(refinement.text, temporal, refinement.refined))
    }
}

fn draft(text: String, temporal: TemporalMatch, refined: bool) -> TaskDraft {
    TaskDraft {
        due_date: temporal.due_date(),
        text,
        temporal,
        refined,
    }
}
