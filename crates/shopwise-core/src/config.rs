use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

/// Default model priority order: the newest flash preview first, then the
/// older experimental flash as the cheaper fallback when quota runs out.
pub const DEFAULT_MODELS: &[&str] = &["gemini-3-flash-preview", "gemini-2.0-flash-exp"];

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    /// Ordered model candidates, tried first to last.
    #[serde(default)]
    pub models: Vec<String>,
}

fn parse_model_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration: defaults, then `config.toml` if present, then
    /// environment variable overrides.
    pub fn new() -> Self {
        let mut config = Config {
            api_key: None,
            api_base: None,
            models: Vec::new(),
        };

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = Some(api_key);
        } else if let Ok(api_key) = std::env::var("API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_base) = std::env::var("API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(models) = std::env::var("MODELS") {
            let parsed = parse_model_list(&models);
            if !parsed.is_empty() {
                config.models = parsed;
            }
        }

        if config.models.is_empty() {
            config.models = DEFAULT_MODELS.iter().map(|m| m.to_string()).collect();
        }
        config
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}
