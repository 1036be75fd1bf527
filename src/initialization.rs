use std::{env, fs};
use std::time::Duration;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

pub const TOKEN_ENV: &str = "WEATHER_PROXY_TOKEN";
pub const API_KEY_ENV: &str = "WEATHER_PROVIDER_API_KEY";

const DEFAULT_BASE_URL: &str = "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

#[derive(Deserialize, Debug)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Auth {
    pub token: String,
}

#[derive(Deserialize, Debug)]
pub struct Provider {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Provider {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug)]
pub struct General {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_to_stdout")]
    pub log_to_stdout: bool,
    pub log_path: Option<String>,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: default_log_level(),
            log_to_stdout: default_log_to_stdout(),
            log_path: None,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub web_server: WebServer,
    pub auth: Auth,
    pub provider: Provider,
    #[serde(default)]
    pub general: General,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_to_stdout() -> bool { true }

/// Loads configuration and sets up logging
///
/// The config file is given as `--config=<path>` on the command line. The client token and
/// the provider API key may be overridden through the environment.
pub fn config() -> Result<Config, ConfigError> {
    let args: Vec<String> = env::args().collect();
    let config_path = config_path(&args)?;

    let mut config = load_config(config_path)?;
    apply_env_overrides(&mut config, env::var(TOKEN_ENV).ok(), env::var(API_KEY_ENV).ok());

    setup_logger(&config.general)?;

    Ok(config)
}

/// Returns the value of the `--config=<path>` argument
///
/// # Arguments
///
/// * 'args' - command line arguments
fn config_path(args: &[String]) -> Result<&str, ConfigError> {
    args.iter()
        .find_map(|a| a.strip_prefix("--config="))
        .filter(|p| !p.is_empty())
        .ok_or(ConfigError::from("missing --config=<path> argument"))
}

/// Reads and parses the toml config file
///
/// # Arguments
///
/// * 'path' - path to the config file
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(path)?;
    parse_config(&toml)
}

fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.auth.token.is_empty() {
        return Err(ConfigError::from("auth.token must not be empty"));
    }

    Ok(config)
}

fn apply_env_overrides(config: &mut Config, token: Option<String>, api_key: Option<String>) {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        config.auth.token = token;
    }
    if let Some(api_key) = api_key.filter(|k| !k.is_empty()) {
        config.provider.api_key = api_key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [web_server]
        bind_address = "127.0.0.1"
        bind_port = 8000

        [auth]
        token = "client-secret"

        [provider]
        base_url = "http://localhost:9000/timeline"
        api_key = "provider-key"
        timeout_secs = 5

        [general]
        log_level = "debug"
        log_to_stdout = false
        log_path = "/var/log/weatherproxy.log"
    "#;

    const MINIMAL: &str = r#"
        [web_server]
        bind_address = "0.0.0.0"
        bind_port = 8080

        [auth]
        token = "client-secret"

        [provider]
        api_key = "provider-key"
    "#;

    #[test]
    fn parses_full_config() {
        let config = parse_config(FULL).unwrap();

        assert_eq!(config.web_server.bind_address, "127.0.0.1");
        assert_eq!(config.web_server.bind_port, 8000);
        assert_eq!(config.auth.token, "client-secret");
        assert_eq!(config.provider.base_url, "http://localhost:9000/timeline");
        assert_eq!(config.provider.api_key, "provider-key");
        assert_eq!(config.provider.timeout(), Duration::from_secs(5));
        assert_eq!(config.general.log_level, "debug");
        assert!(!config.general.log_to_stdout);
        assert_eq!(config.general.log_path.as_deref(), Some("/var/log/weatherproxy.log"));
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.timeout(), Duration::from_secs(30));
        assert_eq!(config.general.log_level, "info");
        assert!(config.general.log_to_stdout);
        assert!(config.general.log_path.is_none());
    }

    #[test]
    fn missing_section_is_an_error() {
        let toml = r#"
            [web_server]
            bind_address = "0.0.0.0"
            bind_port = 8080
        "#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn empty_token_is_rejected() {
        let toml = MINIMAL.replace("\"client-secret\"", "\"\"");
        let err = parse_config(&toml).unwrap_err();
        assert!(err.to_string().contains("auth.token"));
    }

    #[test]
    fn environment_overrides_secrets() {
        let mut config = parse_config(MINIMAL).unwrap();

        apply_env_overrides(&mut config, Some("env-token".into()), None);
        assert_eq!(config.auth.token, "env-token");
        assert_eq!(config.provider.api_key, "provider-key");

        apply_env_overrides(&mut config, Some(String::new()), Some("env-key".into()));
        assert_eq!(config.auth.token, "env-token");
        assert_eq!(config.provider.api_key, "env-key");
    }

    #[test]
    fn config_path_comes_from_argument() {
        let args = vec!["weatherproxy".to_string(), "--config=/etc/weatherproxy.toml".to_string()];
        assert_eq!(config_path(&args).unwrap(), "/etc/weatherproxy.toml");

        let args = vec!["weatherproxy".to_string()];
        assert!(config_path(&args).is_err());

        let args = vec!["weatherproxy".to_string(), "--config=".to_string()];
        assert!(config_path(&args).is_err());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(load_config("/nonexistent/weatherproxy.toml").is_err());
    }
}
