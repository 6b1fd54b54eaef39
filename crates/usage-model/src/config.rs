//! Per-run translator configuration.
//!
//! The skip list and unit-reduction table are process-wide constants in
//! spirit, but they live on the config so tests and callers can override
//! them per run instead of reaching for ambient state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARTNER_SKIP, DEFAULT_UNIT_REDUCTION};

/// Knobs for one translation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Partner ids excluded unconditionally.
    pub partner_skip: BTreeSet<i64>,
    /// Part-number → divisor applied to item counts (floor division).
    pub unit_reduction: BTreeMap<String, i64>,
    /// Rows per INSERT statement; 0 means one unbounded statement.
    pub batch_size: usize,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            partner_skip: DEFAULT_PARTNER_SKIP.iter().copied().collect(),
            unit_reduction: DEFAULT_UNIT_REDUCTION
                .iter()
                .map(|(part, divisor)| ((*part).to_string(), *divisor))
                .collect(),
            batch_size: 0,
        }
    }
}

impl TranslateConfig {
    /// Set the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Replace the partner skip set.
    #[must_use]
    pub fn with_partner_skip(mut self, partners: impl IntoIterator<Item = i64>) -> Self {
        self.partner_skip = partners.into_iter().collect();
        self
    }
}
