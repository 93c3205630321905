pub mod models;

pub use models::*;

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod models_tests;
