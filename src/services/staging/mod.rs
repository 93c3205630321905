//! Staging-directory concerns: recognizing candidate mod files as they
//! finish downloading, and moving processed sources into the
//! `installed/` / `failed/` bookkeeping folders.

pub mod archive_move;
pub mod candidate;

pub use archive_move::archive_processed;
pub use candidate::{scan_staging, wait_for_stable_size, ModFile, ModKind};

#[cfg(test)]
#[path = "tests/candidate_tests.rs"]
mod candidate_tests;

#[cfg(test)]
#[path = "tests/archive_move_tests.rs"]
mod archive_move_tests;
