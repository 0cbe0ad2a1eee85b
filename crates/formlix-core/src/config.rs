//! Configuration settings
//!
//! Loaded from `formlix.toml`. Every table and field is optional; missing
//! values take the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "formlix.toml";

/// Environment variable consulted when `backend.api_key` is not set
pub const API_KEY_ENV: &str = "FORMLIX_API_KEY";

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for [`Settings`]
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Content backend settings
    pub backend: BackendSettings,
    /// Artifact output settings
    pub output: OutputSettings,
    /// PDF renderer settings
    pub pdf: PdfSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load settings from `path`
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file anywhere else is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e)
                if e.kind() == std::io::ErrorKind::NotFound
                    && path == Path::new(CONFIG_FILE_NAME) =>
            {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Text-generation backend configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendSettings {
    /// OpenAI-compatible chat completions URL
    pub endpoint: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Bearer token; falls back to `$FORMLIX_API_KEY`
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub connect_timeout_secs: u64,
    /// Overall request timeout, including reading the reply
    pub request_timeout_secs: u64,
}

impl BackendSettings {
    /// API key from the settings or the environment, ignoring blank values
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(present))
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://router.huggingface.co/v1/chat/completions".to_string(),
            model: "meta-llama/Llama-3.2-3B-Instruct".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 4000,
            connect_timeout_secs: 60,
            request_timeout_secs: 120,
        }
    }
}

// Hand-written so the key never reaches logs
impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Where artifacts are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub reports_dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("reports"),
        }
    }
}

/// PDF renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PdfSettings {
    /// Extra font files loaded ahead of the bundled Typst fonts
    pub font_paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.model, "meta-llama/Llama-3.2-3B-Instruct");
        assert_eq!(settings.backend.max_tokens, 4000);
        assert_eq!(settings.backend.connect_timeout_secs, 60);
        assert_eq!(settings.backend.request_timeout_secs, 120);
        assert_eq!(settings.output.reports_dir, PathBuf::from("reports"));
        assert!(settings.pdf.font_paths.is_empty());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml_str(
            r#"
[backend]
model = "Qwen/Qwen2.5-7B-Instruct"

[output]
reports_dir = "out"
"#,
        )
        .unwrap();
        assert_eq!(settings.backend.model, "Qwen/Qwen2.5-7B-Instruct");
        assert_eq!(settings.backend.temperature, 0.7);
        assert_eq!(settings.output.reports_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = Settings::from_toml_str("[backend]\nmax_tokens = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let backend = BackendSettings {
            api_key: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", backend);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_configured_key_wins() {
        let backend = BackendSettings {
            api_key: Some("hf_configured".to_string()),
            ..Default::default()
        };
        assert_eq!(backend.resolve_api_key().as_deref(), Some("hf_configured"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[pdf]\nfont_paths = [\"fonts/Tinos-Regular.ttf\"]\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(
            settings.pdf.font_paths,
            vec![PathBuf::from("fonts/Tinos-Regular.ttf")]
        );
    }
}
