use crate::config::ExtractOptions;
use crate::index::CommunityIndex;
use crate::loader::{load_labels, load_posts};
use crate::matrix::{assemble, FeatureSet};
use crate::profile::build_profiles;
use crate::progress::make_count_progress;
use crate::records::{LabelRecord, PostRecord};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};

/// Entry point: configure with the builder methods, then call `extract` (CSV
/// inputs) or `extract_from_records` (records the caller loaded itself).
#[derive(Clone)]
pub struct FeatureETL {
    pub(crate) opts: ExtractOptions,
}

impl FeatureETL {
    pub fn new() -> Self {
        Self { opts: ExtractOptions::default() }
    }

    // -------- Builder methods --------
    pub fn data_dir(mut self, dir: impl AsRef<std::path::Path>) -> Self { self.opts = self.opts.with_data_dir(dir); self }
    pub fn posts_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_posts_file(name); self }
    pub fn labels_file(mut self, name: impl Into<String>) -> Self { self.opts = self.opts.with_labels_file(name); self }
    pub fn parallelism(mut self, threads: usize) -> Self { self.opts = self.opts.with_parallelism(threads); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }

    /// Load the configured CSV inputs and run the full extraction.
    pub fn extract(self) -> Result<FeatureSet> {
        init_tracing_once();

        let posts_path = self.opts.data_dir.join(&self.opts.posts_file);
        let labels_path = self.opts.data_dir.join(&self.opts.labels_file);

        let posts = load_posts(&posts_path)
            .with_context(|| format!("loading posts from {}", posts_path.display()))?;
        let labels = load_labels(&labels_path)
            .with_context(|| format!("loading labels from {}", labels_path.display()))?;
        tracing::info!("Loaded {} posts and {} label rows.", posts.len(), labels.len());

        self.extract_from_records(&posts, &labels)
    }

    /// Pure core: index communities, aggregate per-author profiles, then
    /// align everything to label-table order. No I/O. Fail-fast: any stage
    /// error aborts the run with no partial output.
    pub fn extract_from_records(
        self,
        posts: &[PostRecord],
        labels: &[LabelRecord],
    ) -> Result<FeatureSet> {
        init_tracing_once();
        if let Some(n) = self.opts.parallelism {
            if n > 0 {
                rayon::ThreadPoolBuilder::new().num_threads(n).build_global().ok();
            }
        }

        let index = CommunityIndex::build(posts);
        tracing::info!("Indexed {} distinct communities.", index.len());

        let profiles = build_profiles(posts, &index)?;
        tracing::info!("Aggregated {} author profiles.", profiles.len());

        let pb = if self.opts.progress {
            let label = self.opts.progress_label.as_deref().unwrap_or("Stacking feature rows");
            Some(make_count_progress(labels.len() as u64, label))
        } else {
            None
        };

        let features = assemble(labels, &profiles, index.len(), pb.as_ref())?;
        if let Some(pb) = pb {
            pb.finish_with_message("feature rows stacked");
        }

        let (rows, cols) = features.matrix.shape();
        tracing::info!("Feature matrix assembled: {} x {} ({} nonzeros).", rows, cols, features.matrix.nnz());
        Ok(features)
    }
}

impl Default for FeatureETL {
    fn default() -> Self {
        Self::new()
    }
}
