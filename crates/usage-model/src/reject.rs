//! Row-level rejection taxonomy.
//!
//! Every variant is a recoverable condition: the row is logged and skipped,
//! the run continues. Nothing here is ever surfaced as a run failure.

use thiserror::Error;

/// Why a usage row was excluded from the chargeable output.
///
/// The `Display` texts are the diagnostics written to the log, one warning
/// per skipped row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("PartNumber is missing")]
    PartNumberMissing,
    #[error("ItemCount is not an integer")]
    ItemCountNotInteger,
    #[error("ItemCount is zero or negative")]
    ItemCountNonPositive,
    #[error("PartnerID is not an integer")]
    PartnerIdNotInteger,
    #[error("PartnerID {0} is in the skip list")]
    PartnerSkipped(i64),
    #[error("PartNumber {0} not found in typemap")]
    PartNumberUnmapped(String),
    #[error("Invalid partnerPurchasedPlanID ('{0}')")]
    InvalidPlanId(String),
}
