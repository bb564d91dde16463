use std::{env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::TempDir;

pub const TEST_DATA_DIR: &str = "tests/test-data";

/// A test-data file, living within its own temporary directory.
/// The directory is removed once the `Fixture` goes out of scope.
pub struct Fixture {
    path    : PathBuf,
    source  : PathBuf,
    tempdir : TempDir,
}

impl Fixture {
    /// Reserve a path named after `fixture_filename`, without creating anything.
    pub fn blank(fixture_filename: &str) -> Self {
        let root_dir = env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source   = Path::new(&root_dir).join(TEST_DATA_DIR).join(fixture_filename);

        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path    = tempdir.path().join(fixture_filename);
        Fixture { path, source, tempdir }
    }

    /// Copy `tests/test-data/{fixture_filename}` into a fresh temporary directory.
    pub fn copy(fixture_filename: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::create_dir_all(fixture.path.parent().expect("No parent directory")).expect("Failed to create directory");
        fs::copy(&fixture.source, &fixture.path)
            .unwrap_or_else(|e| panic!("Failed to copy {}: {e}", fixture.source.display()));
        fixture
    }

    /// Sibling path within the same temporary directory.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.tempdir.path().join(name)
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.to_str().expect("Invalid path (non UTF8 characters ?)"))
    }
}
