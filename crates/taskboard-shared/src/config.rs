//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_MIN_PASSWORD_LENGTH};

pub const DEV_JWT_SECRET: &str = "change-me-in-production";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub auth: AuthSettings,
    pub log: LogSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: DatabaseBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Accounts registered with one of these emails are created as admins.
    #[serde(default)]
    pub admin_emails: Vec<String>,
    pub min_password_length: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    #[serde(default)]
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.admin_emails")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override("app.env", env)?
            .build()?;
        config.try_deserialize()
    }

    /// Builder seeded with every default, before any file or environment source.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "taskboard-server")?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", "postgres://localhost/taskboard")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.secret", DEV_JWT_SECRET)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("auth.admin_emails", Vec::<String>::new())?
            .set_default("auth.min_password_length", DEFAULT_MIN_PASSWORD_LENGTH as i64)?
            .set_default("log.level", "info")?
            .set_default("log.json", true)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.backend, DatabaseBackend::Postgres);
        assert_eq!(config.jwt.access_token_expiry, 86_400);
        assert_eq!(config.auth.min_password_length, 6);
        assert!(config.auth.admin_emails.is_empty());
        assert!(config.log.directory.is_none());
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("auth.admin_emails", vec!["Boss@Example.com"])
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, DatabaseBackend::Memory);
        assert_eq!(config.auth.admin_emails, vec!["Boss@Example.com".to_string()]);
    }
}
