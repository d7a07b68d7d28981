//! CLI configuration.
//!
//! Optional TOML file:
//! - Linux: `~/.config/pointgen/config.toml`
//! - Windows: `%APPDATA%/pointgen/config.toml`
//!
//! A missing file means defaults. The file is never written.

use std::path::{Path, PathBuf};

use pointgen_pointid::Config;

/// Loads the configuration from the platform path, or defaults.
pub fn load() -> anyhow::Result<Config> {
    load_from(&config_path())
}

/// Loads the configuration from `path`, or defaults if it does not exist.
pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Returns the platform-specific configuration file path.
fn config_path() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("pointgen")
            .join("config.toml")
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("pointgen").join("config.toml")
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        PathBuf::from("/tmp/pointgen/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "ip_echo_url = \"http://127.0.0.1:9/\"\nip_timeout_secs = 1\n",
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.ip_echo_url, "http://127.0.0.1:9/");
        assert_eq!(config.ip_timeout_secs, 1);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ip_timeout_secs = \"soon\"").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn path_ends_with_config_toml() {
        assert!(config_path().ends_with("pointgen/config.toml"));
    }
}
