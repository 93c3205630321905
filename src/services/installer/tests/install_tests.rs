use super::install;
use crate::services::config::InstallerConfig;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn test_config(root: &Path, overwrite: bool) -> InstallerConfig {
    let mut config = InstallerConfig::new(root.join("staging"), root.join("mods"));
    config.overwrite = overwrite;
    config
}

#[test]
fn test_jar_is_copied_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);
    fs::create_dir_all(&config.staging_dir).unwrap();

    // Jars are just zip containers; any bytes will do, including non-UTF-8
    let payload: Vec<u8> = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff, 0xfe, 0x42];
    let source = config.staging_dir.join("gravity.jar");
    fs::write(&source, &payload).unwrap();

    let result = install(&source, &config);

    assert!(result.success, "install failed: {:?}", result.reason);
    assert_eq!(result.files_installed, 1);
    assert_eq!(fs::read(config.mods_dir.join("gravity.jar")).unwrap(), payload);
    // Source is left for the archive-move step
    assert!(source.exists());
}

#[test]
fn test_mods_dir_is_created_when_absent() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);
    fs::create_dir_all(&config.staging_dir).unwrap();
    let source = config.staging_dir.join("tiny.jar");
    fs::write(&source, b"x").unwrap();

    assert!(!config.mods_dir.exists());
    let result = install(&source, &config);

    assert!(result.success);
    assert!(config.mods_dir.join("tiny.jar").is_file());
}

#[test]
fn test_jar_collision_without_overwrite_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), false);
    fs::create_dir_all(&config.staging_dir).unwrap();
    fs::create_dir_all(&config.mods_dir).unwrap();
    fs::write(config.mods_dir.join("gravity.jar"), b"old").unwrap();

    let source = config.staging_dir.join("gravity.jar");
    fs::write(&source, b"new").unwrap();

    let result = install(&source, &config);

    assert!(!result.success);
    assert!(result.reason.as_deref().unwrap().contains("already exists"));
    assert_eq!(fs::read(config.mods_dir.join("gravity.jar")).unwrap(), b"old");
}

#[test]
fn test_jar_collision_with_overwrite_replaces() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);
    fs::create_dir_all(&config.staging_dir).unwrap();
    fs::create_dir_all(&config.mods_dir).unwrap();
    fs::write(config.mods_dir.join("gravity.jar"), b"old").unwrap();

    let source = config.staging_dir.join("gravity.jar");
    fs::write(&source, b"new").unwrap();

    let result = install(&source, &config);

    assert!(result.success);
    assert_eq!(fs::read(config.mods_dir.join("gravity.jar")).unwrap(), b"new");
}

#[test]
fn test_zip_goes_through_extraction() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);
    fs::create_dir_all(&config.staging_dir).unwrap();

    let source = config.staging_dir.join("pack.zip");
    let file = fs::File::create(&source).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("mod.json", options).unwrap();
    writer.write_all(b"{}").unwrap();
    writer.start_file("textures/skin.png", options).unwrap();
    writer.write_all(b"png").unwrap();
    writer.finish().unwrap();

    let result = install(&source, &config);

    assert!(result.success, "install failed: {:?}", result.reason);
    assert_eq!(result.files_installed, 2);
    assert!(config.mods_dir.join("textures").join("skin.png").is_file());
}

#[test]
fn test_unsupported_extension_mutates_nothing() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);
    fs::create_dir_all(&config.staging_dir).unwrap();
    let source = config.staging_dir.join("pack.rar");
    fs::write(&source, b"rar bytes").unwrap();

    let result = install(&source, &config);

    assert!(!result.success);
    assert_eq!(
        result.reason.as_deref(),
        Some("unsupported extension '.rar'")
    );
    // Not even the mods directory is created
    assert!(!config.mods_dir.exists());
    assert!(source.exists());
}

#[test]
fn test_missing_source_fails() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), true);

    let result = install(&config.staging_dir.join("ghost.jar"), &config);

    assert!(!result.success);
    assert!(result.reason.is_some());
}
