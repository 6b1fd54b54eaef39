//! Typemap loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use usage_model::TypeMap;

/// Loads the part-number → product-code map from a JSON object document.
pub fn load_type_map(path: &Path) -> Result<TypeMap> {
    let file = File::open(path).with_context(|| format!("open typemap: {}", path.display()))?;
    let map: TypeMap = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse typemap: {}", path.display()))?;
    if map.is_empty() {
        warn!(path = %path.display(), "typemap is empty; every row will be rejected as unmapped");
    }
    debug!(entries = map.len(), path = %path.display(), "loaded typemap");
    Ok(map)
}
