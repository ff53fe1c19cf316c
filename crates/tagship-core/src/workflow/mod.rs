//! Workflow helpers shared by the release commands

mod changelog;
mod version;

pub use changelog::*;
pub use version::*;
