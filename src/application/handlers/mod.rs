//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

mod submit_dream;

pub use submit_dream::{SubmissionError, SubmissionReceipt, SubmitDreamCommand, SubmitDreamHandler};
