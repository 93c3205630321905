use std::fs;
use std::path::Path;

/// Move a regular file with `fs::rename`, falling back to copy+remove via
/// `fs_extra` when the rename fails (typically a cross-device link error
/// between the staging and archive locations).
pub fn rename_with_copy_fallback(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("fs::rename failed (cross-device?): {e}. Falling back to copy+remove");

            if !from.is_file() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "source is not a regular file",
                ));
            }

            if to.exists() {
                // Keep the original error (e.g. AlreadyExists) rather than
                // letting the fallback clobber the destination.
                return Err(e);
            }

            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut options = fs_extra::file::CopyOptions::new();
            options.overwrite = false;

            fs_extra::file::move_file(from, to, &options)
                .map(|_| ())
                .map_err(|err| std::io::Error::other(err.to_string()))
        }
    }
}
