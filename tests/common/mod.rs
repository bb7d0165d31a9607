use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a CSV file with the given header and pre-rendered rows.
pub fn write_csv(path: &Path, header: &str, rows: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    writeln!(&mut f, "{}", header).unwrap();
    for row in rows {
        writeln!(&mut f, "{}", row).unwrap();
    }
}

/// Build a tiny data directory holding the default input files:
/// - `train_data.csv` with posts (a1, sub1, "hi"), (a1, sub2, "there"), (a2, sub1, "yo")
/// - `train_target.csv` with labels (a1, F), (a2, M)
///
/// Column names use the Reddit corpus spellings (`subreddit`, `gender`) to
/// exercise the serde aliases end to end.
pub fn make_corpus_basic() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.into_path();

    write_csv(
        &base.join("train_data.csv"),
        "author,subreddit,body",
        &["a1,sub1,hi", "a1,sub2,there", "a2,sub1,yo"],
    );
    write_csv(
        &base.join("train_target.csv"),
        "author,gender",
        &["a1,F", "a2,M"],
    );

    base
}
