use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
    /// Per-id path overrides: section id -> fixed relative fragment
    pub paths: HashMap<String, String>,
    /// Progress output toggle
    pub logging: bool,
}

/// Input document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Source document path; ignored when `text` is set
    pub file: Option<PathBuf>,
    /// Inline source text, takes precedence over `file`
    pub text: Option<String>,
    /// Text encoding label for `file`
    pub encoding: String,
}

/// Link settings shared by every resolved URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL for section links; a bare hostname gets an http:// prefix
    pub hostname: String,
    /// Destination root, used in both URL paths and output paths
    pub destination: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Base directory section files are written under
    pub base_path: PathBuf,
    /// Directory of per-section ASCII art, if any
    pub art_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            site: SiteConfig::default(),
            output: OutputConfig::default(),
            paths: HashMap::new(),
            logging: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file: None,
            text: None,
            encoding: "utf-8".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hostname: "http://localhost".to_string(),
            destination: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("out"),
            art_path: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    #[allow(clippy::too_many_arguments)]
    pub fn merge_cli(
        &mut self,
        file: Option<PathBuf>,
        hostname: Option<String>,
        destination: Option<String>,
        output: Option<PathBuf>,
        art: Option<PathBuf>,
        encoding: Option<String>,
        quiet: bool,
    ) {
        if let Some(file) = file {
            self.input.file = Some(file);
        }

        if let Some(host) = hostname {
            self.site.hostname = host;
        }

        if let Some(dest) = destination {
            self.site.destination = dest;
        }

        if let Some(out) = output {
            self.output.base_path = out;
        }

        if let Some(art) = art {
            self.output.art_path = Some(art);
        }

        if let Some(enc) = encoding {
            self.input.encoding = enc;
        }

        if quiet {
            self.logging = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.site.hostname.is_empty() {
            return Err(Error::config_validation("hostname must not be empty"));
        }

        if encoding_rs::Encoding::for_label(self.input.encoding.as_bytes()).is_none() {
            return Err(Error::Encoding(self.input.encoding.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.hostname, "http://localhost");
        assert_eq!(config.input.encoding, "utf-8");
        assert_eq!(config.output.base_path, PathBuf::from("out"));
        assert!(config.paths.is_empty());
        assert!(config.logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
logging = true

[input]
file = "demo/script.md"

[site]
hostname = "text.dog"
destination = "txtventure"

[output]
base_path = "demo/out"
art_path = "demo/art"

[paths]
humans-txt = "humans.txt"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.site.hostname, "text.dog");
        assert_eq!(config.site.destination, "txtventure");
        assert_eq!(config.input.file, Some(PathBuf::from("demo/script.md")));
        assert_eq!(config.output.art_path, Some(PathBuf::from("demo/art")));
        assert_eq!(config.paths["humans-txt"], "humans.txt");
        assert!(config.logging);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_hostname() {
        let mut config = Config::default();
        config.site.hostname.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_encoding() {
        let mut config = Config::default();
        config.input.encoding = "utf-9".to_string();
        let result = config.validate();
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_validation_known_encoding_alias() {
        let mut config = Config::default();
        config.input.encoding = "latin1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_cli_file() {
        let mut config = Config::default();
        config.merge_cli(
            Some(PathBuf::from("story.md")),
            None,
            None,
            None,
            None,
            None,
            false,
        );
        assert_eq!(config.input.file, Some(PathBuf::from("story.md")));
    }

    #[test]
    fn test_merge_cli_site() {
        let mut config = Config::default();
        config.merge_cli(
            None,
            Some("http://text.dog".to_string()),
            Some("txtventure".to_string()),
            None,
            None,
            None,
            false,
        );
        assert_eq!(config.site.hostname, "http://text.dog");
        assert_eq!(config.site.destination, "txtventure");
    }

    #[test]
    fn test_merge_cli_output() {
        let mut config = Config::default();
        config.merge_cli(
            None,
            None,
            None,
            Some(PathBuf::from("/custom/out")),
            Some(PathBuf::from("art")),
            None,
            false,
        );
        assert_eq!(config.output.base_path, PathBuf::from("/custom/out"));
        assert_eq!(config.output.art_path, Some(PathBuf::from("art")));
    }

    #[test]
    fn test_merge_cli_quiet() {
        let mut config = Config {
            logging: true,
            ..Config::default()
        };
        config.merge_cli(None, None, None, None, None, None, true);
        assert!(!config.logging);
    }

    #[test]
    fn test_merge_cli_keeps_config_when_unset() {
        let mut config = Config::default();
        config.site.hostname = "http://example.com".to_string();
        config.merge_cli(None, None, None, None, None, None, false);
        assert_eq!(config.site.hostname, "http://example.com");
    }
}
