//! Speech transcript assembly
//!
//! A speech recogniser emits a stream of segments. Interim segments are
//! provisional guesses that get replaced; final segments are committed. The
//! assembler turns that stream into the finished text handed to extraction
//! and refinement.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// One recogniser result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Accumulates segments for one capture session
#[derive(Debug, Clone, Default)]
pub struct TranscriptAssembler {
    committed: String,
    interim: String,
}

impl TranscriptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one segment. Final text is committed followed by a space;
    /// interim text replaces whatever interim text was pending.
    pub fn push(&mut self, segment: TranscriptSegment) {
        if segment.is_final {
            self.committed.push_str(&segment.text);
            self.committed.push(' ');
            self.interim.clear();
        } else {
            self.interim = segment.text;
        }
    }

    /// Committed text followed by the pending interim guess, for display
    pub fn live_text(&self) -> String {
        format!("{}{}", self.committed, self.interim)
    }

    pub fn is_empty(&self) -> bool {
        self.committed.trim().is_empty() && self.interim.trim().is_empty()
    }

    /// End the session and return the text to process.
    ///
    /// Prefers committed text and falls back to the interim guess when the
    /// recogniser never finalised anything. The assembler is reset either
    /// way so capture can be restarted.
    pub fn finish(&mut self) -> Option<String> {
        let committed = self.committed.trim();
        let text = if committed.is_empty() {
            self.interim.trim()
        } else {
            committed
        };
        let result = (!text.is_empty()).then(|| text.to_string());
        self.reset();
        result
    }

    pub fn reset(&mut self) {
        self.committed.clear();
        self.interim.clear();
    }

    /// Drain a recogniser channel until the sender hangs up, then finish.
    pub async fn consume(&mut self, rx: &mut mpsc::Receiver<TranscriptSegment>) -> Option<String> {
        while let Some(segment) = rx.recv().await {
            debug!(is_final = segment.is_final, "transcript segment: {}", segment.text);
            self.push(segment);
        }
        self.finish()
    }
}
