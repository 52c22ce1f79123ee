use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "PALETTE_CONVERTER_CONFIG";

/// Output path used when neither the CLI nor the config names one
pub const DEFAULT_OUTPUT: &str = "converted.bmp";

/// Optional defaults loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette file to use when `--palette` is not given
    #[serde(default)]
    pub palette: Option<PathBuf>,

    /// Output path to use when `--output` is not given
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl AppConfig {
    /// Load configuration from `path`, or use defaults when there is none.
    ///
    /// A config file that cannot be read or parsed is not fatal: the problem
    /// is logged and the defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        palette = ?config.palette,
                        output = %config.output.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: None,
            output: default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.palette, None);
        assert_eq!(config.output, PathBuf::from("converted.bmp"));
    }

    #[test]
    fn test_from_yaml_full() {
        let config = AppConfig::from_yaml("palette: gameboy.txt\noutput: out/result.bmp\n").unwrap();
        assert_eq!(config.palette, Some(PathBuf::from("gameboy.txt")));
        assert_eq!(config.output, PathBuf::from("out/result.bmp"));
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = AppConfig::from_yaml("palette: colors.txt\n").unwrap();
        assert_eq!(config.palette, Some(PathBuf::from("colors.txt")));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(AppConfig::from_yaml("palette: [unclosed").is_err());
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output: remapped.bmp").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.output, PathBuf::from("remapped.bmp"));
        assert_eq!(config.palette, None);
    }

    #[test]
    fn test_load_unparsable_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output: [1, 2").unwrap();

        assert_eq!(AppConfig::load(Some(file.path())), AppConfig::default());
    }
}
