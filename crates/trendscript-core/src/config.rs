use crate::aggregate::DEFAULT_CANDIDATE_CAP;
use crate::app_config::{AppConfig, Environment};
use crate::trends::DEFAULT_VALUE_SUFFIX_PATTERN;
use crate::{ConfigError, DEFAULT_CATEGORY_ID};

const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let serpapi_api_key = require("SERPAPI_API_KEY")?;
    let gemini_api_key = require("GEMINI_API_KEY")?;

    let env = parse_environment(&or_default("TRENDSCRIPT_ENV", "development"))?;

    let bind_addr = or_default("TRENDSCRIPT_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("TRENDSCRIPT_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("TRENDSCRIPT_LOG_LEVEL", "info");

    let serpapi_base_url = or_default("TRENDSCRIPT_SERPAPI_BASE_URL", "https://serpapi.com/");
    let gemini_base_url = or_default(
        "TRENDSCRIPT_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com/",
    );
    let utility_model = or_default("TRENDSCRIPT_UTILITY_MODEL", DEFAULT_MODEL);
    let creative_model = or_default("TRENDSCRIPT_CREATIVE_MODEL", DEFAULT_MODEL);
    let default_category_id = or_default("TRENDSCRIPT_DEFAULT_CATEGORY", DEFAULT_CATEGORY_ID);

    let candidate_cap = or_default(
        "TRENDSCRIPT_CANDIDATE_CAP",
        &DEFAULT_CANDIDATE_CAP.to_string(),
    )
    .parse::<usize>()
    .map_err(|e| invalid("TRENDSCRIPT_CANDIDATE_CAP", e.to_string()))?;
    if candidate_cap == 0 {
        return Err(invalid(
            "TRENDSCRIPT_CANDIDATE_CAP",
            "must be at least 1".to_string(),
        ));
    }

    let trend_suffix_pattern = or_default(
        "TRENDSCRIPT_TREND_SUFFIX_PATTERN",
        DEFAULT_VALUE_SUFFIX_PATTERN,
    );
    regex::Regex::new(&trend_suffix_pattern)
        .map_err(|e| invalid("TRENDSCRIPT_TREND_SUFFIX_PATTERN", e.to_string()))?;

    let request_timeout_secs = parse_u64("TRENDSCRIPT_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        serpapi_api_key,
        gemini_api_key,
        serpapi_base_url,
        gemini_base_url,
        utility_model,
        creative_model,
        default_category_id,
        candidate_cap,
        trend_suffix_pattern,
        request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCRIPT_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
