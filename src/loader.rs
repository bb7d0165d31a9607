//! CSV boundary: load the post table and the label table into typed records.

use crate::error::FeatureError;
use crate::records::{LabelRecord, PostRecord};
use anyhow::{Context, Result};
use std::path::Path;

/// Only `.csv` inputs are accepted; anything else is rejected before the file
/// is opened.
fn require_csv(path: &Path) -> Result<(), FeatureError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "csv" {
        return Err(FeatureError::InvalidInputFormat {
            path: path.display().to_string(),
            extension: ext.to_string(),
        });
    }
    Ok(())
}

pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>> {
    require_csv(path)?;
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        let rec: PostRecord = rec.with_context(|| format!("decode post row in {}", path.display()))?;
        rows.push(rec);
    }
    Ok(rows)
}

pub fn load_labels(path: &Path) -> Result<Vec<LabelRecord>> {
    require_csv(path)?;
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut rows = Vec::new();
    for rec in rdr.deserialize() {
        let rec: LabelRecord = rec.with_context(|| format!("decode label row in {}", path.display()))?;
        rows.push(rec);
    }
    Ok(rows)
}
