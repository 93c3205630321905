//! Per-file processing boundary and the staging sweep.
//!
//! Discovery is external (a filesystem watcher, a shell loop, a test):
//! whatever finds a path hands it to [`process_file`], which takes the
//! file through install and bookkeeping to completion. [`process_staging`]
//! does the same for everything already sitting in the staging directory,
//! which also covers downloads that finished while nothing was watching.

use crate::services::config::InstallerConfig;
use crate::services::installer::{install, InstallResult};
use crate::services::staging::archive_move::archive_processed;
use crate::services::staging::candidate::{scan_staging, wait_for_stable_size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What happened to one staged file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReport {
    pub file_name: String,
    pub install: InstallResult,
    /// Where the source ended up (`installed/` or `failed/`), or `None`
    /// when even the bookkeeping move failed and the file stayed in
    /// staging.
    pub archived_to: Option<PathBuf>,
    pub archive_error: Option<String>,
}

/// Process one downloaded file to completion: wait for the download to
/// settle, install it, then archive the source.
///
/// Every failure is local to this file. Install errors become a failed
/// [`InstallResult`] routed to `failed/`; a bookkeeping move error is
/// logged and recorded on the report, with the source left untouched in
/// the staging directory for manual inspection.
pub fn process_file(path: &Path, config: &InstallerConfig) -> ProcessReport {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    log::info!("Detected: {file_name}");

    if let Err(e) = config.ensure_dirs() {
        let reason = format!("failed to create directory layout: {e}");
        log::error!("Failed: {file_name}: {reason}");
        return ProcessReport {
            file_name,
            install: InstallResult::failure(&reason),
            archived_to: None,
            archive_error: Some(reason),
        };
    }

    let result = if wait_for_stable_size(path, config.stable_window(), config.stable_timeout()) {
        install(path, config)
    } else {
        InstallResult::failure("timed out waiting for download to finish")
    };

    match &result.reason {
        None => log::info!("Installed: {file_name}"),
        Some(reason) => log::error!("Failed: {file_name}: {reason}"),
    }

    match archive_processed(path, &result, &config.installed_dir(), &config.failed_dir()) {
        Ok(dest) => ProcessReport {
            file_name,
            install: result,
            archived_to: Some(dest),
            archive_error: None,
        },
        Err(e) => {
            log::error!("Also failed to archive {file_name}: {e}");
            ProcessReport {
                file_name,
                install: result,
                archived_to: None,
                archive_error: Some(e.to_string()),
            }
        }
    }
}

/// Sweep the staging directory and process every candidate already there,
/// one at a time in name order. One bad file never stops the rest.
pub fn process_staging(config: &InstallerConfig) -> Vec<ProcessReport> {
    let candidates = scan_staging(&config.staging_dir);
    if !candidates.is_empty() {
        log::info!(
            "Found {} existing file(s) in {}",
            candidates.len(),
            config.staging_dir.display()
        );
    }

    candidates
        .iter()
        .map(|candidate| process_file(&candidate.path, config))
        .collect()
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod pipeline_tests;
