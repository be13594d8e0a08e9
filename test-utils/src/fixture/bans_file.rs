use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Ban list file inside a temporary directory.
///
/// The directory and everything in it is removed when the fixture is dropped.
pub struct TempBansFile {
    /// Held so the directory lives as long as the fixture.
    _dir: TempDir,
    path: PathBuf,
}

impl TempBansFile {
    /// Creates a fixture whose ban list file does not exist yet.
    ///
    /// # Panics
    /// - If the temporary directory cannot be created
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir for ban list");
        let path = dir.path().join("globalbans.json");

        Self { _dir: dir, path }
    }

    /// Creates a fixture whose ban list file holds `contents`.
    ///
    /// # Panics
    /// - If the file cannot be written
    pub fn with_contents(contents: impl AsRef<[u8]>) -> Self {
        let fixture = Self::missing();
        std::fs::write(&fixture.path, contents).expect("Failed to seed ban list file");

        fixture
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the current file contents.
    ///
    /// # Panics
    /// - If the file is missing or not valid UTF-8
    pub fn read(&self) -> String {
        std::fs::read_to_string(&self.path).expect("Failed to read ban list file")
    }

    /// Parses the current file contents as JSON.
    ///
    /// # Panics
    /// - If the file is missing or does not hold valid JSON
    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read()).expect("Ban list file is not valid JSON")
    }
}
