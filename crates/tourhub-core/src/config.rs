use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let tourapi_client_key = require("TOURHUB_TOURAPI_CLIENT_KEY")?;
    let tourapi_server_key = require("TOURHUB_TOURAPI_SERVER_KEY")?;

    let env = parse_environment(&or_default("TOURHUB_ENV", "development"));
    let log_level = or_default("TOURHUB_LOG_LEVEL", "info");

    let tourapi_base_url = or_default(
        "TOURHUB_TOURAPI_BASE_URL",
        "https://apis.data.go.kr/B551011/KorService2",
    );
    let tourapi_app_name = or_default("TOURHUB_TOURAPI_APP_NAME", "tourhub");

    let request_timeout_secs = parse_u64("TOURHUB_REQUEST_TIMEOUT_SECS", "30")?;
    let max_retries = parse_u32("TOURHUB_MAX_RETRIES", "3")?;
    let retry_base_delay_ms = parse_u64("TOURHUB_RETRY_BASE_DELAY_MS", "1000")?;
    let retry_max_delay_ms = parse_u64("TOURHUB_RETRY_MAX_DELAY_MS", "10000")?;

    Ok(AppConfig {
        env,
        log_level,
        tourapi_base_url,
        tourapi_client_key,
        tourapi_server_key,
        tourapi_app_name,
        request_timeout_secs,
        max_retries,
        retry_base_delay_ms,
        retry_max_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
