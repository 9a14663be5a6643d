//! Core functionality for the voice to-do service
//!
//! Temporal extraction and rate-limited AI refinement form the heart of the
//! crate; tasks, transcripts and the composition pipeline sit around them.

pub mod pipeline;
pub mod providers;
pub mod rate_limiter; // Dual-window AI request budget
pub mod refine;
pub mod tasks;
pub mod temporal;
pub mod transcript;

pub use pipeline::{TaskComposer, TaskDraft};
pub use refine::{Refinement, RefinementGateway};
pub use temporal::{TemporalMatch, extract, extract_on};
pub use transcript::{TranscriptAssembler, TranscriptSegment};
