//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `PresentationState` is what a journal front-end renders from a result.

pub mod handlers;
mod presentation;

pub use handlers::{SubmissionError, SubmissionReceipt, SubmitDreamCommand, SubmitDreamHandler};
pub use presentation::PresentationState;
