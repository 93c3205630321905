use crate::services::config::InstallerConfig;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the test logger exactly once across the whole test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Config with short stability windows so tests don't sit in the
/// download-completion poll loop.
pub fn fast_config(staging_dir: &Path, mods_dir: &Path) -> InstallerConfig {
    let mut config = InstallerConfig::new(staging_dir, mods_dir);
    config.stable_window_ms = 50;
    config.stable_timeout_ms = 2_000;
    config
}
