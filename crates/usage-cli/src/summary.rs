//! Run summary printed after a successful translation.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::TranslateResult;

pub fn print_summary(result: &TranslateResult) {
    println!(
        "Chargeable SQL: {} ({} rows)",
        result.chargeable_path.display(),
        result.chargeable_rows
    );
    println!(
        "Domains SQL: {} ({} rows)",
        result.domains_path.display(),
        result.domain_rows
    );
    if result.product_totals.is_empty() {
        return;
    }
    println!("Product totals:");
    println!("{}", totals_table(result));
}

fn totals_table(result: &TranslateResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Part Number", "Total Usage"]);
    for (part_number, total) in &result.product_totals {
        table.add_row(vec![
            Cell::new(part_number),
            Cell::new(total).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use usage_sql::ProductTotals;

    use super::*;

    #[test]
    fn totals_table_lists_each_part_number() {
        let mut product_totals = ProductTotals::new();
        product_totals.insert("ADS000010U0R".to_string(), 15);
        product_totals.insert("SSX006NR".to_string(), 3);
        let result = TranslateResult {
            chargeable_path: PathBuf::from("output/chargeable_insert_rows.sql"),
            domains_path: PathBuf::from("output/domains_insert_rows.sql"),
            chargeable_rows: 2,
            domain_rows: 2,
            product_totals,
        };
        let rendered = totals_table(&result).to_string();
        assert!(rendered.contains("ADS000010U0R"));
        assert!(rendered.contains("15"));
        assert!(rendered.contains("SSX006NR"));
    }
}
