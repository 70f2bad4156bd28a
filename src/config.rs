use rocket::figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
    pub acquire_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub address: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

/// Key material and token lifetimes for the access/refresh token pair.
///
/// Keys are PEM-encoded RSA (private key signs, public key verifies), so a
/// process that only verifies never needs the private half. All ages are in
/// seconds.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    pub private_key: String,
    pub public_key: String,
    pub access_token_age: u64,
    pub refresh_token_age: u64,
    /// Lifetime of an access token minted by silent refresh. The original
    /// service reused the refresh-token age here, so a refreshed access token
    /// outlives a freshly issued one; that behavior is kept as the default
    /// but is an explicit knob rather than an accident.
    pub reissued_token_age: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/deen_db".to_string(),
            max_connections: 16,
            min_connections: 4,
            connection_timeout: 5,
            acquire_timeout: 5,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            address: "127.0.0.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            private_key: String::new(),
            public_key: String::new(),
            access_token_age: 15 * 60,
            refresh_token_age: 365 * 24 * 60 * 60,
            reissued_token_age: 365 * 24 * 60 * 60,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            auth: AuthConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Deen.toml (base configuration file)
    /// 2. Environment variables (prefixed with DEEN_)
    /// 3. DATABASE_URL environment variable (for backwards compatibility)
    pub fn load() -> Result<Self, figment::Error> {
        let figment = Figment::new()
            // Start with defaults
            .merge(Toml::string(&toml::to_string(&Config::default()).unwrap()).nested())
            // Layer on Deen.toml if it exists
            .merge(Toml::file("Deen.toml").nested())
            // Layer on environment variables (e.g., DEEN_DATABASE_URL)
            .merge(Env::prefixed("DEEN_").split("_"))
            // Special case: DATABASE_URL for backwards compatibility
            .merge(Env::raw().only(&["DATABASE_URL"]).map(|_| "database.url".into()));

        figment.extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_preserve_original_ttl_policy() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_age, 900);
        // A silently refreshed access token inherits the refresh-token age.
        assert_eq!(config.reissued_token_age, config.refresh_token_age);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = toml::to_string(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.port, 8000);
        assert_eq!(parsed.logging.level, "info");
    }
}
