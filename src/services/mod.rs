pub mod config;
pub mod fs_utils;
pub mod installer;
pub mod pipeline;
pub mod staging;
