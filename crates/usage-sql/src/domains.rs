//! Domains-table SQL generation.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use usage_model::constants::{DOMAINS_INSERT_HEADER, NO_VALID_ROWS_DOMAINS_SQL};
use usage_transform::escape_sql_string;

use crate::batch::SqlBatchWriter;
use crate::chargeable::DomainPartnerMap;

/// Writes the domain → plan-id map as batched `INSERT INTO domains`
/// statements, in the map's insertion order.
///
/// Domain names are free text from the report and get escaped; the plan id
/// is alphanumeric by construction. An empty map produces exactly the
/// "no valid rows" sentinel and no header.
pub fn write_domains_sql<W: Write>(
    domain_plans: &DomainPartnerMap,
    batch_size: usize,
    out: &mut W,
) -> Result<usize> {
    let mut writer = SqlBatchWriter::new(
        out,
        DOMAINS_INSERT_HEADER,
        NO_VALID_ROWS_DOMAINS_SQL,
        batch_size,
    );
    for (domain, plan_id) in domain_plans {
        let tuple = format!("('{}', '{}')", escape_sql_string(domain), plan_id);
        writer.write_row(&tuple).context("write domain row")?;
        debug!(domain = %domain, plan_id = %plan_id, "processed domain");
    }
    let rows_inserted = writer.finish().context("finish domains statement")?;
    if rows_inserted == 0 {
        info!("no valid rows to insert into domains table");
    } else {
        info!(rows = rows_inserted, "generated domain insert statements");
    }
    Ok(rows_inserted)
}
