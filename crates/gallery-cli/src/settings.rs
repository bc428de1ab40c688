//! Resolves the [`GalleryConfig`] from an optional TOML file plus flags.

use std::fs;
use std::path::Path;

use anyhow::Context;
use gallery_core::GalleryConfig;
use tracing::debug;

use crate::cli::Cli;

/// Defaults, overlaid by `--config`, overlaid by `--wrap`.
pub fn load_config(cli: &Cli) -> anyhow::Result<GalleryConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => GalleryConfig::default(),
    };
    if cli.wrap {
        config.wrap_around = true;
    }
    debug!(?config, "resolved gallery config");
    Ok(config)
}

/// Parse a TOML file. Keys left out keep their default values.
pub fn read_config(path: &Path) -> anyhow::Result<GalleryConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), body).unwrap();
        file
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["gallery"]).unwrap();
        assert_eq!(load_config(&cli).unwrap(), GalleryConfig::default());
    }

    #[test]
    fn wrap_flag_enables_wrap_around() {
        let cli = Cli::try_parse_from(["gallery", "--wrap"]).unwrap();
        assert!(load_config(&cli).unwrap().wrap_around);
    }

    #[test]
    fn file_values_are_read() {
        let file = write_config("max_name_chars = 12\nwrap_around = true\n");
        let config = read_config(file.path()).unwrap();
        assert_eq!(config.max_name_chars, 12);
        assert!(config.wrap_around);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("max_name_chars = 20\n");
        let config = read_config(file.path()).unwrap();
        assert_eq!(config.max_name_chars, 20);
        assert!(!config.wrap_around);
    }

    #[test]
    fn flag_overrides_file() {
        let file = write_config("wrap_around = false\n");
        let path = file.path().to_str().unwrap().to_owned();
        let cli = Cli::try_parse_from(["gallery", "--config", &path, "--wrap"]).unwrap();
        assert!(load_config(&cli).unwrap().wrap_around);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("max_name_chars = \"lots\"\n");
        assert!(read_config(file.path()).is_err());
    }
}
