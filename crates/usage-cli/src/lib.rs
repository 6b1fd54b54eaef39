//! Library surface of the usage translator CLI.
//!
//! Kept separate from `main.rs` so the pipeline and logging setup are
//! reachable from integration tests.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
