//! Event adapters.
//!
//! - `InMemoryEventLog` - Validating, append-only CloudEvent log with export

mod in_memory_log;

pub use in_memory_log::InMemoryEventLog;
