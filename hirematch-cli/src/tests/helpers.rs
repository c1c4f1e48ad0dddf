//! Fixture files shared by the CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const CANDIDATE_HEADER: &str =
    "Candidate Full Name,Required Skills,CGPA,Experience(In Months)\n";

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory addressed with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write a candidate CSV with the standard header and return its path.
    pub(super) fn candidates(&self, rows: &str) -> Utf8PathBuf {
        let path = self.path("candidates.csv");
        write_utf8(&path, format!("{CANDIDATE_HEADER}{rows}").as_bytes());
        path
    }
}
