//! Chargeable-table SQL generation.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use usage_model::constants::{CHARGEABLE_INSERT_HEADER, NO_VALID_ROWS_CHARGEABLE_SQL};
use usage_model::{TranslateConfig, TypeMap, UsageRecord};
use usage_transform::{escape_sql_string, validate_record};

use crate::batch::SqlBatchWriter;

/// Cumulative post-reduction quantities, keyed by *original* part number.
pub type ProductTotals = BTreeMap<String, i64>;

/// Domain → cleaned plan id of the last accepted row that mentioned it.
///
/// Insertion order is observable in the domains SQL output, hence the
/// `IndexMap`. Each unique domain is assumed to map to a single plan id;
/// when the data disagrees, last write wins.
pub type DomainPartnerMap = IndexMap<String, String>;

/// What a chargeable run produced besides the SQL text itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChargeableOutcome {
    pub rows_inserted: usize,
    pub product_totals: ProductTotals,
    pub domain_plans: DomainPartnerMap,
}

/// Validates every record and writes the accepted rows as batched
/// `INSERT INTO chargeable` statements.
///
/// Rejected rows are logged at warn level with their source line and
/// skipped; they never fail the run. With zero accepted rows the output is
/// exactly the "no valid rows" sentinel.
pub fn write_chargeable_sql<W: Write>(
    records: &[UsageRecord],
    type_map: &TypeMap,
    config: &TranslateConfig,
    out: &mut W,
) -> Result<ChargeableOutcome> {
    let mut writer = SqlBatchWriter::new(
        out,
        CHARGEABLE_INSERT_HEADER,
        NO_VALID_ROWS_CHARGEABLE_SQL,
        config.batch_size,
    );
    let mut product_totals = ProductTotals::new();
    let mut domain_plans = DomainPartnerMap::new();

    for record in records {
        let row = match validate_record(record, type_map, config) {
            Ok(row) => row,
            Err(reason) => {
                warn!("{reason}: skipping row {}", record.row_number);
                continue;
            }
        };

        *product_totals.entry(row.part_number.clone()).or_insert(0) += row.quantity;
        domain_plans.insert(row.domain.clone(), row.plan_id.clone());

        let tuple = format!(
            "({}, '{}', '{}', '{}', {})",
            row.partner_id,
            row.product,
            row.plan_id,
            escape_sql_string(&row.plan),
            row.quantity
        );
        writer.write_row(&tuple).context("write chargeable row")?;
        debug!(
            row = record.row_number,
            part_number = %row.part_number,
            partner_id = row.partner_id,
            quantity = row.quantity,
            "processed row"
        );
    }

    let rows_inserted = writer.finish().context("finish chargeable statement")?;
    if rows_inserted == 0 {
        info!("no valid rows to insert into chargeable table");
    } else {
        info!(rows = rows_inserted, "generated chargeable insert statements");
    }

    Ok(ChargeableOutcome {
        rows_inserted,
        product_totals,
        domain_plans,
    })
}
