//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::*;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub auth: AuthSettings,
    /// Applications provisioned at startup (in-memory registry only)
    #[serde(default)]
    pub apps: Vec<AppSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub kind: StorageKind,
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub token_ttl_secs: i64,
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSeed {
    pub id: i32,
    pub name: String,
    pub secret: String,
    pub token_ttl_secs: Option<i64>,
}

impl AppSeed {
    /// TTL for this app, falling back to the global default.
    pub fn ttl_secs(&self, auth: &AuthSettings) -> i64 {
        self.token_ttl_secs.unwrap_or(auth.token_ttl_secs)
    }
}

impl AppConfig {
    /// Load `config/default`, `config/{APP_ENV}`, then `SSO_*` environment overrides.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        Self::load_env(&env)
    }

    /// `app.env` always names the overlay that was layered in.
    fn load_env(env: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("SSO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("app.env", env)?
            .build()?;
        Self::finish(config)
    }

    /// Load from an inline TOML document layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "sso-server")?
            .set_default("app.log_format", "json")?
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("storage.kind", "memory")?
            .set_default("storage.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("auth.token_ttl_secs", DEFAULT_TOKEN_TTL_SECS)?
            .set_default("auth.hash_memory_kib", i64::from(DEFAULT_HASH_MEMORY_KIB))?
            .set_default("auth.hash_iterations", i64::from(DEFAULT_HASH_ITERATIONS))?
            .set_default("auth.hash_parallelism", i64::from(DEFAULT_HASH_PARALLELISM))?)
    }

    fn finish(config: Config) -> Result<Self, AppError> {
        let parsed: Self = config.try_deserialize()?;
        parsed.check()?;
        Ok(parsed)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.storage.kind == StorageKind::Postgres && self.storage.url.is_none() {
            return Err(AppError::InvalidConfig(
                "storage.url is required when storage.kind = \"postgres\"".into(),
            ));
        }
        if self.auth.token_ttl_secs <= 0 {
            return Err(AppError::InvalidConfig("auth.token_ttl_secs must be positive".into()));
        }
        Ok(())
    }
}
