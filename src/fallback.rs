use std::path::PathBuf;

use crate::models::Movie;

/// Local persisted copy of the favorites list, read only when the API is
/// unreachable. Saves are best-effort: a failed write must never fail the
/// mutation that triggered it.
pub trait FallbackStore {
    fn load(&self) -> Option<Vec<Movie>>;
    fn save(&self, favorites: &[Movie]);
}

/// JSON file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FallbackStore for JsonFileStore {
    fn load(&self) -> Option<Vec<Movie>> {
        let data = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    fn save(&self, favorites: &[Movie]) {
        match serde_json::to_string(favorites) {
            Ok(json) => {
                if let Err(err) = std::fs::write(&self.path, json) {
                    tracing::warn!(error = %err, path = %self.path.display(), "fallback save failed");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "fallback serialization failed");
            }
        }
    }
}
