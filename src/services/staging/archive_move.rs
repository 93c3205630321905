use crate::services::fs_utils::file_utils::rename_with_copy_fallback;
use crate::services::installer::InstallResult;
use crate::types::errors::{InstallError, InstallerResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Move a processed source file out of the staging inbox.
///
/// Success routes to `installed_dir`, failure to `failed_dir` plus a
/// sibling `<archived-name>.log.txt` holding the failure reason as plain
/// text. Name collisions get a ` (N)` counter suffix so retries of the
/// same download never overwrite an earlier archived copy.
///
/// Returns the archived path. A move that fails (permissions, exotic
/// mounts) surfaces as [`InstallError::Move`] and leaves the source where
/// it was for manual inspection.
pub fn archive_processed(
    source: &Path,
    result: &InstallResult,
    installed_dir: &Path,
    failed_dir: &Path,
) -> InstallerResult<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| InstallError::Move(format!("source has no file name: {}", source.display())))?;

    let dest_base = if result.success { installed_dir } else { failed_dir };
    fs::create_dir_all(dest_base).map_err(|e| {
        InstallError::Move(format!("failed to create {}: {e}", dest_base.display()))
    })?;

    let dest = disambiguated_dest(dest_base, Path::new(file_name));
    rename_with_copy_fallback(source, &dest).map_err(|e| {
        InstallError::Move(format!(
            "failed to move '{}' to '{}': {e}",
            source.display(),
            dest.display()
        ))
    })?;

    if let Some(reason) = &result.reason {
        write_reason_log(&dest, reason);
    }

    log::info!("Archived '{}' to {}", file_name.to_string_lossy(), dest.display());
    Ok(dest)
}

/// `dir/name`, or `dir/name (N).ext` with the smallest free counter when
/// the plain name is taken.
fn disambiguated_dest(dir: &Path, name: &Path) -> PathBuf {
    let plain = dir.join(name);
    if !plain.exists() {
        return plain;
    }

    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "archived".to_string());
    let extension = name.extension().map(|e| e.to_string_lossy().to_string());

    let mut counter = 1;
    loop {
        let candidate = match &extension {
            Some(ext) => format!("{stem} ({counter}).{ext}"),
            None => format!("{stem} ({counter})"),
        };
        let candidate_path = dir.join(&candidate);
        if !candidate_path.exists() {
            return candidate_path;
        }
        counter += 1;
    }
}

/// Write `<archived-name>.log.txt` next to an archived failure. The file
/// has already been moved at this point, so a log that cannot be written
/// is only worth a warning.
fn write_reason_log(archived: &Path, reason: &str) {
    let log_name = match archived.file_name() {
        Some(name) => format!("{}.log.txt", name.to_string_lossy()),
        None => return,
    };
    let log_path = archived.with_file_name(log_name);
    if let Err(e) = fs::write(&log_path, format!("{reason}\n")) {
        log::warn!("Failed to write reason log {}: {e}", log_path.display());
    }
}
