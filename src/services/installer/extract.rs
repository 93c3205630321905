use crate::services::fs_utils::path_utils::{is_path_safe, safe_join};
use crate::types::errors::{InstallError, InstallerResult};
use std::fs;
use std::io;
use std::path::Path;

/// Extract a zip archive into the mods directory, refusing any archive
/// that contains a path-traversal entry.
///
/// The whole entry list is validated before the first write: a malicious
/// archive leaves the mods directory completely untouched, and the
/// offending entry name is carried in the error. Extraction is not
/// transactional beyond that: a plain I/O failure midway can leave
/// already-written entries behind, to be overwritten on a later retry.
///
/// Returns the number of files written.
pub fn extract_zip(archive_path: &Path, mods_dir: &Path, overwrite: bool) -> InstallerResult<usize> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let offender = archive
        .file_names()
        .find(|name| !is_path_safe(mods_dir, Path::new(name)))
        .map(|name| name.to_string());
    if let Some(name) = offender {
        return Err(InstallError::ZipSlip(name));
    }

    let mut written: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        let dest = safe_join(mods_dir, &name).ok_or_else(|| InstallError::ZipSlip(name.clone()))?;

        if entry.is_dir() {
            fs::create_dir_all(&dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        if dest.exists() && !overwrite {
            return Err(InstallError::Io(format!(
                "'{name}' already exists in mods directory"
            )));
        }
        let mut outfile = fs::File::create(&dest)?;
        io::copy(&mut entry, &mut outfile)?;
        written += 1;
    }

    Ok(written)
}
