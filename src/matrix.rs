//! Final alignment: stack profiles into the label-ordered output triple.

use crate::error::FeatureError;
use crate::profile::AuthorProfile;
use crate::records::LabelRecord;
use crate::sparse::{CsrBuilder, CsrMatrix};
use ahash::AHashMap;
use indicatif::ProgressBar;

/// Aligned outputs of a feature-extraction run. Row i of `matrix`,
/// `author_text[i]`, and `labels[i]` always describe the same author.
#[derive(Clone, Debug)]
pub struct FeatureSet {
    pub matrix: CsrMatrix,
    pub author_text: Vec<String>,
    pub labels: Vec<String>,
}

/// Stack membership rows in label-table order. The label sequence is the
/// single source of truth for row order; rows are never reshuffled. A label
/// author with no profile aborts the whole build.
pub fn assemble(
    labels: &[LabelRecord],
    profiles: &AHashMap<String, AuthorProfile>,
    n_communities: usize,
    pb: Option<&ProgressBar>,
) -> Result<FeatureSet, FeatureError> {
    let mut builder = CsrBuilder::new(n_communities);
    let mut author_text = Vec::with_capacity(labels.len());
    let mut out_labels = Vec::with_capacity(labels.len());

    for record in labels {
        let profile = profiles
            .get(&record.author)
            .ok_or_else(|| FeatureError::AuthorNotFound(record.author.clone()))?;
        builder.push_row(&profile.communities);
        author_text.push(profile.text.clone());
        out_labels.push(record.label.clone());
        if let Some(pb) = pb {
            pb.inc(1);
        }
    }

    Ok(FeatureSet {
        matrix: builder.finish(),
        author_text,
        labels: out_labels,
    })
}
