use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Name suffixes of downloads still in flight. Browsers rename these to
/// the real name once the download completes.
pub const IGNORE_SUFFIXES: [&str; 3] = [".part", ".tmp", ".crdownload"];

/// How often the stability wait re-reads the candidate's size.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Recognized mod archive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModKind {
    /// Single-file mod, installed as a byte-for-byte copy.
    Jar,
    /// Container archive, installed by extracting its entries.
    Zip,
}

impl ModKind {
    /// Detect the kind from the file extension. `None` means the
    /// extension is unrecognized and the file cannot be installed.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jar" => Some(Self::Jar),
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }
}

/// A candidate file sitting in the staging directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModFile {
    pub path: PathBuf,
    pub name: String,
    /// Lower-cased extension including the dot, empty when there is none.
    /// Kept for error messages about unrecognized files.
    pub extension: String,
    pub kind: Option<ModKind>,
    pub size: u64,
}

impl ModFile {
    /// Stat `path` and build the candidate record.
    pub fn inspect(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            name,
            extension: extension_of(path),
            kind: ModKind::from_path(path),
            size: metadata.len(),
        })
    }
}

/// Lower-cased extension of `path` with a leading dot, or empty.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Whether `path` is a file the installer should pick up: a regular file
/// with a recognized extension that is not an in-flight download.
pub fn is_candidate(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let lower = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };
    if IGNORE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return false;
    }
    ModKind::from_path(path).is_some()
}

/// List candidates already sitting in the staging directory, sorted by
/// file name. Non-recursive: the `installed/` and `failed/` subfolders
/// (and anything else nested) are never picked up again.
pub fn scan_staging(staging_dir: &Path) -> Vec<ModFile> {
    if !staging_dir.is_dir() {
        return Vec::new();
    }

    walkdir::WalkDir::new(staging_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| is_candidate(e.path()))
        .filter_map(|e| ModFile::inspect(e.path()).ok())
        .collect()
}

/// Block until the file's size has stayed unchanged for `stable_for`.
///
/// Returns false if the file disappears or `timeout` elapses first. This
/// is how a freshly detected file is distinguished from one the browser
/// is still writing.
pub fn wait_for_stable_size(path: &Path, stable_for: Duration, timeout: Duration) -> bool {
    let start = Instant::now();
    let mut last_size: Option<u64> = None;
    let mut last_change = Instant::now();

    while start.elapsed() < timeout {
        let size = match fs::metadata(path) {
            Ok(m) => m.len(),
            Err(_) => return false,
        };

        if Some(size) != last_size {
            last_size = Some(size);
            last_change = Instant::now();
        } else if last_change.elapsed() >= stable_for {
            return true;
        }

        std::thread::sleep(POLL_INTERVAL);
    }

    false
}
