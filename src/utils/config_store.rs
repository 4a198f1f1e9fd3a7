//! ConfigStore - Section Configuration Loading

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::domain::SectionConfig;
use crate::error::{Error, Result};

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

/// Get the application config directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/about-section/` or `$XDG_CONFIG_HOME/about-section/`
/// - **macOS**: `~/Library/Application Support/dev.about-section.about-section/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\about-section\about-section\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("dev", "about-section", "about-section") else {
        return Err(Error::MissingConfigDir);
    };
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Path of the default section config
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(DEFAULT_CONFIG_FILE))
}

/// Parse a section config from a string
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<SectionConfig> {
    let config: SectionConfig = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Load a section config file, format chosen by extension
pub fn load_config(path: &Path) -> Result<SectionConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, format)?;

    tracing::info!(
        path = %path.display(),
        ?format,
        technologies = config.technologies.len(),
        "loaded section config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LayoutVariant;

    const TOML: &str = r##"
name = "Ana Silva"
title = "Engenheira"
description = """
Construo sistemas distribuídos.
"""
email = "ana@example.com"
linkedin = ""
technologies = ["Go", "Rust"]
techDisplayStyle = "inline"
backgroundColor = "#1e293b"
"##;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("about.toml")).expect("toml"),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("dir/About.JSON")).expect("json"),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("about.yaml")),
            Err(Error::UnsupportedFormat { .. })
        ));
        assert!(ConfigFormat::from_path(Path::new("about")).is_err());
    }

    #[test]
    fn parses_toml_config() {
        let config = parse_config(TOML, ConfigFormat::Toml).expect("valid toml");
        assert_eq!(config.identity.name, "Ana Silva");
        assert_eq!(config.identity.email.as_deref(), Some("ana@example.com"));
        assert_eq!(config.identity.linkedin.as_deref(), Some(""));
        assert_eq!(config.identity.github, None);
        assert_eq!(config.technologies, vec!["Go", "Rust"]);
        assert_eq!(config.layout(), LayoutVariant::Inline);
        assert_eq!(config.background(), "#1e293b");
    }

    #[test]
    fn toml_missing_required_field_is_an_error() {
        let err = parse_config("name = \"a\"\ntechnologies = []", ConfigFormat::Toml)
            .expect_err("title is required");
        assert!(matches!(err, Error::TomlDe { .. }));
    }

    #[test]
    fn parses_json_config() {
        let json = r#"{"name":"a","title":"b","description":"c","technologies":[]}"#;
        let config = parse_config(json, ConfigFormat::Json).expect("valid json");
        assert!(config.technologies.is_empty());
        assert_eq!(config.tech_display_style, None);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("about-section-does-not-exist.toml");
        assert!(matches!(load_config(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn loads_config_from_disk() {
        let path = std::env::temp_dir().join(format!("about-section-{}.toml", std::process::id()));
        fs::write(&path, TOML).expect("write temp config");
        let loaded = load_config(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.expect("loads").identity.title, "Engenheira");
    }

    #[test]
    fn default_path_uses_config_file_name() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with(DEFAULT_CONFIG_FILE));
        }
    }
}
