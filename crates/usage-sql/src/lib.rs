//! SQL generation for the usage translator.
//!
//! Two emitters share one batching primitive:
//!
//! - **Chargeable**: validates each usage record and folds the accepted rows
//!   into batched `INSERT INTO chargeable ...` statements, accumulating
//!   per-part-number totals and the domain → plan-id map along the way.
//! - **Domains**: folds that domain map into batched
//!   `INSERT INTO domains ...` statements.
//!
//! Both write incrementally to any [`std::io::Write`]; nothing buffers the
//! whole document. A run that accepts zero rows emits a fixed sentinel
//! comment instead of a statement.

mod batch;
mod chargeable;
mod domains;

pub use batch::SqlBatchWriter;
pub use chargeable::{ChargeableOutcome, DomainPartnerMap, ProductTotals, write_chargeable_sql};
pub use domains::write_domains_sql;
