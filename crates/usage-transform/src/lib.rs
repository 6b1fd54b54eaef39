//! Row validation and transformation for the usage translator.
//!
//! Given a raw [`UsageRecord`](usage_model::UsageRecord), this crate decides
//! whether the row is chargeable and, if so, produces its normalized form:
//! part number translated through the typemap, account guid cleaned down to
//! a plan id, item count reduced where the part number calls for it.

mod clean;
mod validate;

pub use clean::{clean_guid, escape_sql_string};
pub use validate::validate_record;
