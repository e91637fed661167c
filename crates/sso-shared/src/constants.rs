//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Token lifetime applied to applications that do not declare their own.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

// Argon2id cost (OWASP baseline: 19 MiB, 2 passes, 1 lane)
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
