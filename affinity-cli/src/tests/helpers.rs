//! Test helpers for writing ratings files into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Ratings for three users where user 3 rates everything alike.
pub(super) const EXAMPLE_RATINGS: &str = "\
1,10,5
1,20,3
1,30,4
2,10,5
2,20,3
2,30,5
2,40,4
3,10,1
3,20,1
3,30,1
3,50,5
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a `ratings.csv` path.
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

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn ratings_path(&self) -> Utf8PathBuf {
        self.root.join("ratings.csv")
    }

    pub(super) fn write_ratings(&self, contents: &str) -> Utf8PathBuf {
        let path = self.ratings_path();
        write_utf8(&path, contents.as_bytes());
        path
    }
}
