//! Tagship Core - Core library for release automation
//!
//! This crate provides the error taxonomy, configuration, shared result types
//! and the small workflow helpers (tag formatting, changelog writing, version
//! stamping) used by the other tagship crates.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use error::{TagshipError, Result};
pub use types::{ReleaseResult, ReleaseStep};
