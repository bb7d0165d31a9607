mod config;
mod error;
mod records;
mod loader;

mod index;
mod sparse;
mod profile;
mod matrix;

mod pipeline;
mod progress;
mod util;

pub use crate::config::ExtractOptions;
pub use crate::error::FeatureError;
pub use crate::records::{LabelRecord, PostRecord};
pub use crate::pipeline::FeatureETL;

// Expose the stage functions so callers can run partial pipelines.
pub use crate::index::CommunityIndex;
pub use crate::profile::{build_profiles, AuthorProfile, MISSING_BODY};
pub use crate::matrix::{assemble, FeatureSet};

// Expose sparse storage for downstream model code.
pub use crate::sparse::{CsrBuilder, CsrMatrix};

// Expose the CSV boundary for callers that manage their own paths.
pub use crate::loader::{load_labels, load_posts};

// Expose progress and tracing helpers so binaries can label their own stages.
pub use crate::progress::make_count_progress;
pub use crate::util::init_tracing_once;
