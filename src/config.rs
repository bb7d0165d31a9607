use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ExtractOptions {
    pub data_dir: PathBuf,
    pub posts_file: String,           // post table: author, community/subreddit, body
    pub labels_file: String,          // label table: author, label/gender
    pub parallelism: Option<usize>,   // Some(N) to set rayon threads, None to use default
    pub progress: bool,               // show progress bar
    pub progress_label: Option<String>, // optional label for progress bar
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            posts_file: "train_data.csv".to_string(),
            labels_file: "train_target.csv".to_string(),
            parallelism: None,
            progress: true,
            progress_label: None,
        }
    }
}

impl ExtractOptions {
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_posts_file(mut self, name: impl Into<String>) -> Self {
        self.posts_file = name.into();
        self
    }
    pub fn with_labels_file(mut self, name: impl Into<String>) -> Self {
        self.labels_file = name.into();
        self
    }
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
}
