//! Translation pipeline with explicit stages.
//!
//! 1. **Load**: typemap JSON and usage report CSV
//! 2. **Chargeable**: validate rows and write `chargeable_insert_rows.sql`,
//!    accumulating product totals and the domain → plan map
//! 3. **Domains**: write `domains_insert_rows.sql` from the domain map
//!
//! Upstream failures (missing files, malformed JSON, missing columns) abort
//! the run; row-level rejections never do.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use usage_ingest::{load_type_map, read_usage_report};
use usage_model::TranslateConfig;
use usage_sql::{ProductTotals, write_chargeable_sql, write_domains_sql};

use crate::cli::Cli;

/// File the chargeable statements are written to, inside the output dir.
pub const CHARGEABLE_SQL_FILE: &str = "chargeable_insert_rows.sql";
/// File the domain statements are written to, inside the output dir.
pub const DOMAINS_SQL_FILE: &str = "domains_insert_rows.sql";

/// What a completed run produced, for the summary printer.
#[derive(Debug)]
pub struct TranslateResult {
    pub chargeable_path: PathBuf,
    pub domains_path: PathBuf,
    pub chargeable_rows: usize,
    pub domain_rows: usize,
    pub product_totals: ProductTotals,
}

/// Run the full translation described by the CLI arguments.
pub fn run_translate(args: &Cli) -> Result<TranslateResult> {
    let span = info_span!("translate", csv = %args.csv.display());
    let _guard = span.enter();

    let type_map = load_type_map(&args.typemap)?;
    info!(path = %args.typemap.display(), "loaded typemap");
    let records = read_usage_report(&args.csv)?;
    info!(path = %args.csv.display(), rows = records.len(), "loaded usage report");

    let mut config = TranslateConfig::default().with_batch_size(args.batch_insert_size);
    if !args.skip_partner.is_empty() {
        config = config.with_partner_skip(args.skip_partner.iter().copied());
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("create output directory: {}", args.output_dir.display())
    })?;

    let chargeable_path = args.output_dir.join(CHARGEABLE_SQL_FILE);
    let mut chargeable_out = BufWriter::new(
        File::create(&chargeable_path)
            .with_context(|| format!("create {}", chargeable_path.display()))?,
    );
    let outcome = write_chargeable_sql(&records, &type_map, &config, &mut chargeable_out)?;
    chargeable_out
        .flush()
        .with_context(|| format!("flush {}", chargeable_path.display()))?;

    let domains_path = args.output_dir.join(DOMAINS_SQL_FILE);
    let mut domains_out = BufWriter::new(
        File::create(&domains_path)
            .with_context(|| format!("create {}", domains_path.display()))?,
    );
    let domain_rows = write_domains_sql(&outcome.domain_plans, config.batch_size, &mut domains_out)?;
    domains_out
        .flush()
        .with_context(|| format!("flush {}", domains_path.display()))?;

    Ok(TranslateResult {
        chargeable_path,
        domains_path,
        chargeable_rows: outcome.rows_inserted,
        domain_rows,
        product_totals: outcome.product_totals,
    })
}
