use anyhow::{Context, Result, anyhow};
use chrono::Local;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::model::payroll::Period;

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub server_addr: String,
    pub access_token_ttl: usize,

    pub admin_username: String,
    pub admin_password: String,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,
    pub log_dir: String,

    /// Reference period the dashboard opens on
    pub initial_period: Period,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{key} must be set"));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let today = Local::now().date_naive();
        let default_period = Period::containing(today);
        let month = parse_or(&lookup, "PAYROLL_MONTH", default_period.month)?;
        let year = parse_or(&lookup, "PAYROLL_YEAR", default_period.year)?;
        let initial_period =
            Period::new(month, year).map_err(|e| anyhow!("invalid PAYROLL_MONTH: {e}"))?;

        Ok(Self {
            server_addr: or_default("SERVER_ADDR", "127.0.0.1:8080"),
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl: parse_or(&lookup, "ACCESS_TOKEN_TTL", 900)?, // default 15 min

            admin_username: or_default("ADMIN_USERNAME", "admin"),
            admin_password: required("ADMIN_PASSWORD")?,

            rate_login_per_min: parse_or(&lookup, "RATE_LOGIN_PER_MIN", 60)?,
            rate_protected_per_min: parse_or(&lookup, "RATE_PROTECTED_PER_MIN", 1000)?,

            api_prefix: or_default("API_PREFIX", "/api"),
            log_dir: or_default("LOG_DIR", "logs"),

            initial_period,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
