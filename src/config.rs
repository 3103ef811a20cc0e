use std::env;
use std::fmt;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

/// The single admin identity. The plain password only lives here until it is hashed at startup.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    /// Reads `.env.{RUST_ENV}` (falling back to `.env`) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = load_env_files();

        let database = DatabaseConfig {
            url: required("DATABASE_URL")?,
            max_connections: parsed_or("DB_MAX_CONNECTIONS", 10)?,
            min_connections: parsed_or("DB_MIN_CONNECTIONS", 1)?,
            run_migrations: parsed_or("RUN_MIGRATIONS", true)?,
        };

        let admin = AdminConfig {
            username: string_or("ADMIN_USERNAME", "admin"),
            password: string_or("ADMIN_PASSWORD", "admin123"),
        };

        Ok(Self {
            environment,
            host: string_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 8000)?,
            database,
            jwt: JwtConfig::from_env()?,
            admin,
            cors_origins: parse_cors_origins(&string_or("CORS_ORIGINS", "*")),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Returns the active environment name.
pub fn load_env_files() -> String {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    environment
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn string_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parsed_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// `*` means any origin and is represented as an empty list.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = crate::shared::domain::split_csv(raw);
    if origins.iter().any(|o| o == "*") {
        return Vec::new();
    }
    origins
}
