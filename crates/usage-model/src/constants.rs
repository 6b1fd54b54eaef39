//! Fixed text and table constants shared across the translator.
//!
//! The SQL header and sentinel strings are compatibility-critical: consumers
//! of the generated files match on them byte for byte.

/// Statement header for the chargeable table. Note the trailing space before
/// the newline; it is part of the fixed format.
pub const CHARGEABLE_INSERT_HEADER: &str =
    "INSERT INTO chargeable (partnerID, product, productPurchasedPlanID, plan, usage) VALUES \n";

/// Statement header for the domains table.
pub const DOMAINS_INSERT_HEADER: &str =
    "INSERT INTO domains (domain, partnerPurchasedPlanID) VALUES \n";

/// Emitted instead of a statement when no chargeable rows qualify.
pub const NO_VALID_ROWS_CHARGEABLE_SQL: &str =
    "-- No valid rows to insert into chargeable table";

/// Emitted instead of a statement when the domain map is empty.
pub const NO_VALID_ROWS_DOMAINS_SQL: &str = "-- No valid rows to insert into domains table";

// Column names of the usage report.
pub const PARTNER_ID: &str = "PartnerID";
pub const PART_NUMBER: &str = "PartNumber";
pub const ACCOUNT_GUID: &str = "accountGuid";
pub const PLAN: &str = "plan";
pub const DOMAINS: &str = "domains";
pub const ITEM_COUNT: &str = "itemCount";

/// Columns a report must carry to be processed at all.
pub const REQUIRED_COLUMNS: [&str; 6] =
    [PARTNER_ID, PART_NUMBER, ACCOUNT_GUID, PLAN, DOMAINS, ITEM_COUNT];

/// Partners excluded from billing unless overridden per run.
pub const DEFAULT_PARTNER_SKIP: &[i64] = &[26392];

/// Per-part-number divisors applied to item counts (floor division).
pub const DEFAULT_UNIT_REDUCTION: &[(&str, i64)] = &[
    ("EA000001GB0O", 1000),
    ("PMQ00005GB0R", 5000),
    ("SSX006NR", 1000),
    ("SPQ00001MB0R", 2000),
];

/// Maximum length of a cleaned partnerPurchasedPlanID.
pub const MAX_PLAN_ID_LEN: usize = 32;
