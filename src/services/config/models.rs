use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Subfolder of the staging directory that collects successfully
/// processed source files.
pub const INSTALLED_DIR_NAME: &str = "installed";
/// Subfolder of the staging directory that collects failed source files
/// and their reason logs.
pub const FAILED_DIR_NAME: &str = "failed";

/// Already-parsed installer settings. Sourcing these from a CLI or a
/// config file is the embedding application's job; everything here is
/// passed in explicitly so the installer can run against throwaway
/// directories in tests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InstallerConfig {
    /// Folder where downloaded mod archives appear.
    pub staging_dir: PathBuf,
    /// The game's Mods folder, target of every install.
    pub mods_dir: PathBuf,
    /// Whether installs may replace files already present in the mods
    /// folder. When false, a name collision fails the install.
    pub overwrite: bool,
    /// How long a candidate's size must stay unchanged before it counts
    /// as fully downloaded.
    pub stable_window_ms: u64,
    /// Upper bound on waiting for a download to settle.
    pub stable_timeout_ms: u64,
}

impl InstallerConfig {
    pub fn new(staging_dir: impl Into<PathBuf>, mods_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: staging_dir.into(),
            mods_dir: mods_dir.into(),
            overwrite: true,
            stable_window_ms: 2_000,
            stable_timeout_ms: 60_000,
        }
    }

    pub fn installed_dir(&self) -> PathBuf {
        self.staging_dir.join(INSTALLED_DIR_NAME)
    }

    pub fn failed_dir(&self) -> PathBuf {
        self.staging_dir.join(FAILED_DIR_NAME)
    }

    pub fn stable_window(&self) -> Duration {
        Duration::from_millis(self.stable_window_ms)
    }

    pub fn stable_timeout(&self) -> Duration {
        Duration::from_millis(self.stable_timeout_ms)
    }

    /// Create the full directory layout: staging, mods, `installed/` and
    /// `failed/`. Idempotent.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.staging_dir)?;
        std::fs::create_dir_all(&self.mods_dir)?;
        std::fs::create_dir_all(self.installed_dir())?;
        std::fs::create_dir_all(self.failed_dir())?;
        Ok(())
    }
}
