use std::env;
use std::str::FromStr;

/// Which moderation routes this process serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    /// Listing and decision routes in one process
    All,
    /// `GET /admin` only
    Listing,
    /// `GET /moderate` only
    Decision,
}

impl ServiceRole {
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceRole::All => 8080,
            ServiceRole::Listing => 4040,
            ServiceRole::Decision => 5000,
        }
    }

    pub fn serves_listing(&self) -> bool {
        matches!(self, ServiceRole::All | ServiceRole::Listing)
    }

    pub fn serves_decision(&self) -> bool {
        matches!(self, ServiceRole::All | ServiceRole::Decision)
    }
}

impl FromStr for ServiceRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ServiceRole::All),
            "listing" | "admin" => Ok(ServiceRole::Listing),
            "decision" | "moderate" => Ok(ServiceRole::Decision),
            _ => Err(format!("Unknown service role: {}", s)),
        }
    }
}

impl std::fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceRole::All => write!(f, "all"),
            ServiceRole::Listing => write!(f, "listing"),
            ServiceRole::Decision => write!(f, "decision"),
        }
    }
}

/// Telemetry credentials. Built once at startup and handed to `main`;
/// the moderation core never reads them.
#[derive(Clone, Debug, Default)]
pub struct TelemetryConfig {
    pub app_name: Option<String>,
    pub license_key: Option<String>,
}

impl TelemetryConfig {
    pub fn is_configured(&self) -> bool {
        self.license_key.is_some()
    }
}

/// Per-IP rate limit on the decision route
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Seconds to replenish one request in the bucket
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_second: 2,
            burst_size: 5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL. When unset the in-memory store is used.
    pub database_url: Option<String>,
    pub role: ServiceRole,
    pub port: u16,
    /// Shared bearer token guarding the moderation routes
    pub admin_token: Option<String>,
    pub telemetry: TelemetryConfig,
    pub rate_limit: RateLimitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            role: ServiceRole::All,
            port: ServiceRole::All.default_port(),
            admin_token: None,
            telemetry: TelemetryConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Invalid values fall back
    /// to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = RateLimitConfig::default();

        let role = parse_or(&non_empty, "SERVICE_ROLE", ServiceRole::All);

        Self {
            database_url: non_empty("DATABASE_URL"),
            role,
            port: parse_or(&non_empty, "PORT", role.default_port()),
            admin_token: non_empty("ADMIN_TOKEN"),
            telemetry: TelemetryConfig {
                app_name: non_empty("NEW_RELIC_APP_NAME"),
                license_key: non_empty("NEW_RELIC_LICENSE_KEY"),
            },
            rate_limit: RateLimitConfig {
                enabled: parse_or(&non_empty, "RATE_LIMIT_ENABLED", defaults.enabled),
                per_second: parse_or(&non_empty, "RATE_LIMIT_PER_SECOND", defaults.per_second),
                burst_size: parse_or(&non_empty, "RATE_LIMIT_BURST", defaults.burst_size),
            },
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}
