//! CSV usage report reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use usage_model::constants::{
    ACCOUNT_GUID, DOMAINS, ITEM_COUNT, PART_NUMBER, PARTNER_ID, PLAN, REQUIRED_COLUMNS,
};
use usage_model::{RawCount, UsageRecord};

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Column positions resolved from the header line.
struct ColumnIndex {
    partner_id: usize,
    part_number: usize,
    account_guid: usize,
    plan: usize,
    domains: usize,
    item_count: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|header| normalize_cell(header) == name)
        };
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            bail!(
                "usage report is missing required columns: {}",
                missing.join(", ")
            );
        }
        // Positions exist after the check above.
        let lookup = |name: &str| position(name).unwrap_or_default();
        Ok(Self {
            partner_id: lookup(PARTNER_ID),
            part_number: lookup(PART_NUMBER),
            account_guid: lookup(ACCOUNT_GUID),
            plan: lookup(PLAN),
            domains: lookup(DOMAINS),
            item_count: lookup(ITEM_COUNT),
        })
    }
}

/// Reads a usage report file into typed records.
pub fn read_usage_report(path: &Path) -> Result<Vec<UsageRecord>> {
    let file =
        File::open(path).with_context(|| format!("open usage report: {}", path.display()))?;
    let records = read_usage_records(file)
        .with_context(|| format!("read usage report: {}", path.display()))?;
    debug!(rows = records.len(), path = %path.display(), "loaded usage report");
    Ok(records)
}

/// Reads usage records from any CSV byte stream.
///
/// The header line is required and must carry every documented column;
/// extra columns are ignored. Integer-ish cells are classified here, once,
/// so the validator never has to re-parse text.
pub fn read_usage_records<R: Read>(input: R) -> Result<Vec<UsageRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers().context("read report header")?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read report row {}", index + 2))?;
        let cell = |pos: usize| normalize_cell(record.get(pos).unwrap_or(""));
        let part_number = cell(columns.part_number);
        records.push(UsageRecord {
            // Data rows start on line 2, after the header.
            row_number: index + 2,
            partner_id: RawCount::from_cell(cell(columns.partner_id)),
            part_number: (!part_number.is_empty()).then(|| part_number.to_string()),
            account_guid: cell(columns.account_guid).to_string(),
            plan: cell(columns.plan).to_string(),
            domain: cell(columns.domains).to_string(),
            item_count: RawCount::from_cell(cell(columns.item_count)),
        });
    }
    if records.is_empty() {
        bail!("usage report contains no data rows");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "PartnerID,PartNumber,accountGuid,plan,domains,itemCount";

    fn read(input: &str) -> Result<Vec<UsageRecord>> {
        read_usage_records(input.as_bytes())
    }

    #[test]
    fn reads_typed_records() {
        let records = read(&format!(
            "{HEADER}\n1,ADS000010U0R,abc-123,TestPlan,test.example.com,5\n"
        ))
        .expect("report should parse");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.row_number, 2);
        assert_eq!(record.partner_id, RawCount::Int(1));
        assert_eq!(record.part_number.as_deref(), Some("ADS000010U0R"));
        assert_eq!(record.account_guid, "abc-123");
        assert_eq!(record.plan, "TestPlan");
        assert_eq!(record.domain, "test.example.com");
        assert_eq!(record.item_count, RawCount::Int(5));
    }

    #[test]
    fn classifies_malformed_cells() {
        let records = read(&format!(
            "{HEADER}\nten,,guid,plan,d.com,3.5\n1,PN,guid,plan,d.com,\n"
        ))
        .expect("report should parse");
        assert_eq!(records[0].partner_id, RawCount::Text("ten".to_string()));
        assert_eq!(records[0].part_number, None);
        assert_eq!(records[0].item_count, RawCount::Text("3.5".to_string()));
        assert_eq!(records[1].item_count, RawCount::Missing);
        assert_eq!(records[1].row_number, 3);
    }

    #[test]
    fn rejects_report_with_missing_columns() {
        let error = read("PartnerID,PartNumber,plan\n1,PN,Basic\n")
            .expect_err("missing columns should fail");
        let message = error.to_string();
        assert!(message.contains("missing required columns"), "{message}");
        assert!(message.contains("accountGuid"), "{message}");
        assert!(message.contains("domains"), "{message}");
        assert!(message.contains("itemCount"), "{message}");
    }

    #[test]
    fn rejects_report_with_no_data_rows() {
        let error = read(&format!("{HEADER}\n")).expect_err("empty report should fail");
        assert!(error.to_string().contains("no data rows"));
    }

    #[test]
    fn ignores_extra_columns_and_order() {
        let records = read(
            "extra,itemCount,PartnerID,PartNumber,accountGuid,plan,domains\n\
             x,7,2,PN1,g-1,Basic,a.com\n",
        )
        .expect("report should parse");
        assert_eq!(records[0].item_count, RawCount::Int(7));
        assert_eq!(records[0].partner_id, RawCount::Int(2));
        assert_eq!(records[0].domain, "a.com");
    }
}
