//! Application configuration loaded from a YAML file.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A missing or invalid file aborts startup.
//!
//! ## Example
//!
//! ```yaml
//! storage_path: "./storage/storage.db"
//! alias_length: 6
//! log_level: "debug"     # debug | warn | error | anything else → info
//! log_format: "json"     # json | anything else → text
//! http_server:
//!   address: "localhost:8082"
//!   user: "myuser"
//!   password: "mypass"
//! ```
//!
//! ## Environment Variables
//!
//! - `CONFIG_PATH` - Config file location (default: `./configs/local.yaml`)
//! - `HTTP_SERVER_PASSWORD` - Overrides `http_server.password`
//! - `RUST_LOG` - Overrides `log_level` with a full filter directive

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::Path;

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "./configs/local.yaml";

/// Environment variable overriding the basic-auth password.
pub const PASSWORD_ENV: &str = "HTTP_SERVER_PASSWORD";

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SQLite database file; created if missing.
    pub storage_path: String,
    /// Length of generated aliases.
    pub alias_length: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    pub http_server: HttpServerConfig,
}

/// HTTP listener and basic-auth settings.
#[derive(Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Bind address in `host:port` form.
    pub address: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for HttpServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpServerConfig")
            .field("address", &self.address)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Reads the YAML file at `path` and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config: Config = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Yaml)
                    .required(true),
            )
            .build()
            .with_context(|| format!("Couldn't load config at path {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Couldn't unmarshal config at path {}", path.display()))?;

        if let Ok(password) = env::var(PASSWORD_ENV) {
            config.http_server.password = password;
        }

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `alias_length` is zero
    /// - `http_server.address` is not in `host:port` form
    /// - `http_server.user` is empty
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("storage_path must not be empty");
        }

        if self.alias_length == 0 {
            anyhow::bail!("alias_length must be at least 1");
        }

        if !self.http_server.address.contains(':') {
            anyhow::bail!(
                "http_server.address must be in format 'host:port', got '{}'",
                self.http_server.address
            );
        }

        if self.http_server.user.is_empty() {
            anyhow::bail!("http_server.user must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.http_server.address);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Basic auth user: {}", self.http_server.user);
    }
}

/// Loads and validates configuration from the file at `path`.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed, or validation fails.
///
/// # Note
///
/// Environment overrides are read from the process environment, so a `.env`
/// file must already be loaded (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let config = Config::from_file(path)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
storage_path: "./storage/storage.db"
alias_length: 6
log_level: "debug"
log_format: "json"
http_server:
  address: "localhost:8082"
  user: "myuser"
  password: "mypass"
"#;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn sample_config() -> Config {
        Config {
            storage_path: "./storage.db".to_string(),
            alias_length: 6,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            http_server: HttpServerConfig {
                address: "0.0.0.0:8082".to_string(),
                user: "myuser".to_string(),
                password: "mypass".to_string(),
            },
        }
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let file = write_config(SAMPLE);

        let config = load(file.path()).unwrap();

        assert_eq!(config.storage_path, "./storage/storage.db");
        assert_eq!(config.alias_length, 6);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.http_server.address, "localhost:8082");
        assert_eq!(config.http_server.user, "myuser");
        assert_eq!(config.http_server.password, "mypass");
    }

    #[test]
    #[serial]
    fn test_log_settings_default() {
        let file = write_config(
            r#"
storage_path: "./storage.db"
alias_length: 10
http_server:
  address: "localhost:8082"
  user: "myuser"
  password: "mypass"
"#,
        );

        let config = load(file.path()).unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_password_env_override() {
        let file = write_config(SAMPLE);

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var(PASSWORD_ENV, "from-env");
        }

        let config = load(file.path());

        unsafe {
            env::remove_var(PASSWORD_ENV);
        }

        assert_eq!(config.unwrap().http_server.password, "from-env");
    }

    #[test]
    fn test_missing_file() {
        let result = load("/nonexistent/configs/local.yaml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Couldn't load config"));
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_config("storage_path: [unterminated");
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_missing_required_field() {
        let file = write_config("storage_path: \"./storage.db\"\n");
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = sample_config();
        assert!(config.validate().is_ok());

        config.alias_length = 0;
        assert!(config.validate().is_err());
        config.alias_length = 6;

        config.storage_path = "  ".to_string();
        assert!(config.validate().is_err());
        config.storage_path = "./storage.db".to_string();

        config.http_server.address = "8082".to_string();
        assert!(config.validate().is_err());
        config.http_server.address = "0.0.0.0:8082".to_string();

        config.http_server.user = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_masks_password() {
        let output = format!("{:?}", sample_config());
        assert!(!output.contains("mypass"));
        assert!(output.contains("myuser"));
    }
}
