use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Standard data-directory layout
// ---------------------------------------------------------------------------

pub const TRAIN_DIR: &str = "train";
pub const TEST_FILE: &str = "test.csv";
pub const SAMPLE_SUBMISSION_FILE: &str = "sample_submission.csv";
pub const PROCESSED_FILE: &str = "processed_data.csv";
pub const SUBMISSION_FILE: &str = "submission.csv";

/// Keys of a [`PathSet`], in iteration order.
pub const KEYS: [&str; 5] = ["train", "test", "sample_submission", "processed", "submission"];

/// The standard locations inside a competition data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    /// Training data folder.
    pub train: PathBuf,
    /// Test CSV.
    pub test: PathBuf,
    /// Sample submission CSV shipped with the data.
    pub sample_submission: PathBuf,
    /// Processed data CSV (if the pipeline produces one).
    pub processed: PathBuf,
    /// Output submission CSV.
    pub submission: PathBuf,
}

/// Build the [`PathSet`] for `root`.
///
/// Pure path arithmetic: the root is not required to exist and the
/// filesystem is never touched.
pub fn build_paths(root: impl AsRef<Path>) -> PathSet {
    let root = root.as_ref();
    PathSet {
        train: root.join(TRAIN_DIR),
        test: root.join(TEST_FILE),
        sample_submission: root.join(SAMPLE_SUBMISSION_FILE),
        processed: root.join(PROCESSED_FILE),
        submission: root.join(SUBMISSION_FILE),
    }
}

impl PathSet {
    /// Look a path up by its key (`"train"`, `"test"`, ...).
    pub fn get(&self, key: &str) -> Option<&Path> {
        let path = match key {
            "train" => &self.train,
            "test" => &self.test,
            "sample_submission" => &self.sample_submission,
            "processed" => &self.processed,
            "submission" => &self.submission,
            _ => return None,
        };
        Some(path.as_path())
    }

    /// All five `(key, path)` entries in [`KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &Path); 5] {
        [
            (KEYS[0], self.train.as_path()),
            (KEYS[1], self.test.as_path()),
            (KEYS[2], self.sample_submission.as_path()),
            (KEYS[3], self.processed.as_path()),
            (KEYS[4], self.submission.as_path()),
        ]
    }
}
