//! Usage report records and their normalized, chargeable form.

use std::collections::BTreeMap;

/// Part-number → product-code mapping, loaded once per run.
pub type TypeMap = BTreeMap<String, String>;

/// An integer-ish report cell, classified once at the ingestion boundary.
///
/// The report format carries no type information, so a cell that should hold
/// an integer may instead be empty or hold arbitrary text (including floats
/// such as `3.5`). Validation decides what to do with each case; ingestion
/// only records what was there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCount {
    /// The cell parsed as a whole number.
    Int(i64),
    /// The cell held something other than a whole number.
    Text(String),
    /// The cell was empty.
    Missing,
}

impl RawCount {
    /// Classify a raw report cell.
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return RawCount::Missing;
        }
        match trimmed.parse::<i64>() {
            Ok(value) => RawCount::Int(value),
            Err(_) => RawCount::Text(trimmed.to_string()),
        }
    }

    /// The integer value, if this cell held one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawCount::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// One row of the usage report, untouched apart from cell classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    /// Line of the source file this row came from (data rows start at 2,
    /// after the header line). Used in rejection diagnostics only.
    pub row_number: usize,
    pub partner_id: RawCount,
    /// `None` when the cell was empty.
    pub part_number: Option<String>,
    pub account_guid: String,
    pub plan: String,
    pub domain: String,
    pub item_count: RawCount,
}

/// A usage row that passed validation: translated, cleaned, and reduced.
///
/// `part_number` and `domain` are carried through untranslated because the
/// emitters key their accumulators on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRow {
    pub partner_id: i64,
    /// Original part number, pre-translation.
    pub part_number: String,
    /// Product code the typemap translated the part number to.
    pub product: String,
    /// Cleaned partnerPurchasedPlanID, alphanumeric by construction.
    pub plan_id: String,
    pub plan: String,
    pub domain: String,
    /// Post-reduction usage quantity. May be zero after unit reduction.
    pub quantity: i64,
}
