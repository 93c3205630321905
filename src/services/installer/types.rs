use serde::{Deserialize, Serialize};

/// Outcome of one install attempt, consumed by the archive-move step to
/// pick between `installed/` and `failed/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallResult {
    pub success: bool,
    /// Short human-readable failure description; `None` on success.
    pub reason: Option<String>,
    /// Files written into the mods directory (1 for a jar copy, the entry
    /// count for an extracted zip).
    pub files_installed: usize,
}

impl InstallResult {
    pub fn installed(files_installed: usize) -> Self {
        Self {
            success: true,
            reason: None,
            files_installed,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
            files_installed: 0,
        }
    }
}
