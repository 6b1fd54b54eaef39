//! Usage report ingestion.
//!
//! Reads the partner usage CSV into typed [`UsageRecord`](usage_model::UsageRecord)s
//! and loads the part-number typemap from JSON. Everything here is a
//! caller-level concern: a file that cannot be read, an empty report, or a
//! report missing required columns fails the run before any row reaches the
//! validator.

mod report;
mod typemap;

pub use report::{read_usage_records, read_usage_report};
pub use typemap::load_type_map;
