use super::extract::extract_zip;
use super::types::InstallResult;
use crate::services::config::InstallerConfig;
use crate::services::staging::candidate::{extension_of, ModKind};
use crate::types::errors::{InstallError, InstallerResult};
use std::fs;
use std::path::Path;

/// Install one downloaded mod file into the mods directory.
///
/// `.jar` files are copied byte-for-byte under their own name; `.zip`
/// files are extracted entry by entry. Anything else fails as
/// unsupported without touching the filesystem. The source file itself
/// is never modified or removed; that is the archive-move step's job.
pub fn install(source: &Path, config: &InstallerConfig) -> InstallResult {
    match install_inner(source, &config.mods_dir, config.overwrite) {
        Ok(files) => InstallResult::installed(files),
        Err(e) => InstallResult::failure(e.to_string()),
    }
}

fn install_inner(source: &Path, mods_dir: &Path, overwrite: bool) -> InstallerResult<usize> {
    let kind = ModKind::from_path(source)
        .ok_or_else(|| InstallError::UnsupportedType(extension_of(source)))?;

    if !source.is_file() {
        return Err(InstallError::Io(format!(
            "source is not a regular file: {}",
            source.display()
        )));
    }
    fs::create_dir_all(mods_dir)?;

    match kind {
        ModKind::Jar => {
            copy_jar(source, mods_dir, overwrite)?;
            Ok(1)
        }
        ModKind::Zip => extract_zip(source, mods_dir, overwrite),
    }
}

fn copy_jar(source: &Path, mods_dir: &Path, overwrite: bool) -> InstallerResult<()> {
    let name = source.file_name().ok_or_else(|| {
        InstallError::Io(format!("source has no file name: {}", source.display()))
    })?;

    let target = mods_dir.join(name);
    if target.exists() && !overwrite {
        return Err(InstallError::Io(format!(
            "'{}' already exists in mods directory",
            name.to_string_lossy()
        )));
    }

    fs::copy(source, &target)?;
    log::info!(
        "Copied {} to {}",
        name.to_string_lossy(),
        mods_dir.display()
    );
    Ok(())
}
