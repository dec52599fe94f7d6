//! Aetheria - Dream analysis schemas and journal submission
//!
//! This crate holds the canonical data contracts shared by the dream-analysis
//! pipeline, validates raw JSON against them at every trust boundary, and
//! submits journal entries to the external analysis API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
