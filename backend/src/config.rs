//! Configuration management for CragCast
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CRAGCAST_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream weather provider configuration
    pub weather: WeatherConfig,

    /// Forecast cache configuration
    pub cache: CacheConfig,

    /// Rank endpoint fetch policy
    pub rank: RankConfig,

    /// Cache warmer configuration
    pub warm: WarmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo forecast endpoint
    pub api_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Disable to always fetch upstream (degraded mode)
    pub enabled: bool,

    /// Entries younger than this are served as-is
    pub fresh_hours: u64,

    /// Entries up to this age are served stale while a background
    /// refresh runs; older entries force a synchronous fetch
    pub stale_max_hours: u64,

    /// Backstop store TTL, independent of the freshness tiers
    pub ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RankConfig {
    /// Maximum concurrent upstream fetches per rank request
    pub concurrency: usize,

    /// Attempts per region before it is dropped from the results
    pub attempts: u32,

    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,

    /// Exponential backoff base in milliseconds
    pub backoff_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarmConfig {
    /// Shared secret required in the x-warm-secret header; unset means
    /// the warm endpoint is open
    pub secret: Option<String>,

    /// Concurrency for the priming pass
    pub concurrency: usize,

    /// Attempts per region while priming
    pub attempts: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CRAGCAST_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.open-meteo.com/v1/forecast")?
            .set_default("cache.enabled", true)?
            .set_default("cache.fresh_hours", 2)?
            .set_default("cache.stale_max_hours", 12)?
            .set_default("cache.ttl_secs", 86_400)?
            .set_default("rank.concurrency", 6)?
            .set_default("rank.attempts", 3)?
            .set_default("rank.timeout_ms", 3_500)?
            .set_default("rank.backoff_ms", 300)?
            .set_default("warm.concurrency", 10)?
            .set_default("warm.attempts", 2)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CRAGCAST_ prefix)
            .add_source(
                Environment::with_prefix("CRAGCAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
            },
            weather: WeatherConfig {
                api_endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            },
            cache: CacheConfig::default(),
            rank: RankConfig::default(),
            warm: WarmConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fresh_hours: 2,
            stale_max_hours: 12,
            ttl_secs: 86_400,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            concurrency: 6,
            attempts: 3,
            timeout_ms: 3_500,
            backoff_ms: 300,
        }
    }
}

impl Default for WarmConfig {
    fn default() -> Self {
        Self {
            secret: None,
            concurrency: 10,
            attempts: 2,
        }
    }
}
