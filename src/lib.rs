//! Staging-folder installer for Hytale mod archives.
//!
//! Downloaded `.jar` / `.zip` files land in a staging directory; this crate
//! installs them into the game's Mods folder (copy for jars, safe extraction
//! for zips) and archives each processed source into `installed/` or
//! `failed/` under the staging directory, with a plain-text reason log next
//! to failed items.
//!
//! Discovery is the caller's job: feed paths one at a time through
//! [`services::pipeline::process_file`], or sweep everything already sitting
//! in the staging directory with [`services::pipeline::process_staging`].

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;
