use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Chart artifact file name.
pub const CHART_FILE: &str = "pattern.png";
/// Color list artifact file name.
pub const LEGEND_FILE: &str = "color_list.png";
/// Gauge card artifact file name.
pub const GAUGE_FILE: &str = "gauge_calculation.png";

/// Owns the artifact directory the server writes PNGs into.
///
/// Artifacts live under fixed names, so each write replaces the previous
/// file and the web paths stay stable across regenerations.
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Open (and create if needed) the artifact directory.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The artifact directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Remove leftover files from a previous run.
    ///
    /// Failures are logged and skipped; a stale artifact is not worth
    /// refusing to start over.
    pub fn cleanup(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), %e, "Failed to scan output directory");
                return;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() {
                if let Err(e) = fs::remove_file(&path) {
                    tracing::warn!(path = %path.display(), %e, "Failed to remove stale artifact");
                }
            }
        }
    }

    /// Write an artifact and return its web path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> io::Result<String> {
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "Wrote artifact");
        Ok(Self::web_path(name))
    }

    /// The URL path an artifact is served under.
    pub fn web_path(name: &str) -> String {
        format!("/output/{name}")
    }
}
