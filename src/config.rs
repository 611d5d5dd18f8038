use serde::{Deserialize, Serialize};

use std::{env, fmt, fs, path::Path, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    pub gemini: GeminiConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

// Keeps the API key out of logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Deserialize)]
struct EnvServer {
    #[serde(default = "default_port")]
    port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

pub fn parse_config(contents: &str) -> Result<Config, Box<dyn std::error::Error>> {
    serde_yaml::from_str(contents).map_err(Into::into)
}

pub fn read_config_file(path: impl AsRef<Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let server: EnvServer =
        envy::from_env().map_err(|e| format!("Failed to parse PORT: {e}"))?;

    let gemini: GeminiConfig = envy::prefixed("GEMINI_").from_env().map_err(|e| {
        format!("GEMINI_API_URL and GEMINI_API_KEY environment variables are required: {e}")
    })?;

    Ok(Config {
        port: server.port,
        gemini,
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("EMAIL_WRITER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return read_config_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return read_config_file("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return read_config_file("config.example.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Successfully loaded configuration from environment variables");
            Ok(config)
        }
        Err(e) => Err(format!(
            "Config file not found and environment variables are incomplete. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {e}"
        )
        .into()),
    }
}
