//! The archive installer: copies `.jar` mods and safely extracts `.zip`
//! mods into the game's Mods folder.

mod extract;
mod install;
mod types;

pub use extract::extract_zip;
pub use install::install;
pub use types::InstallResult;

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod extract_tests;

#[cfg(test)]
#[path = "tests/install_tests.rs"]
mod install_tests;
