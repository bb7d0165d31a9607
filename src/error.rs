use thiserror::Error;

/// Failure taxonomy for a batch run. All variants are fatal: a run either
/// produces the full aligned output or nothing.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Wrong file extension at load time; rejected before the file is opened.
    #[error("invalid file extension: {extension:?} for {path}. Must be a CSV file")]
    InvalidInputFormat { path: String, extension: String },

    /// A label-table author never appears in the post dataset, so there is no
    /// profile to stack. No fallback row is ever substituted.
    #[error("author {0:?} appears in the label table but has no posts")]
    AuthorNotFound(String),

    /// A community seen during aggregation is missing from the index. Cannot
    /// happen when index and profiles are built from the same dataset.
    #[error("community {0:?} is not present in the community index")]
    IndexInconsistency(String),
}
