use anyhow::Result;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_TIMEOUT_SECONDS: u64 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub server_address: String,
    pub database_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = parse_setting("PORT", env::var("PORT").ok(), DEFAULT_PORT)?;
        let database_timeout_seconds = parse_setting(
            "DATABASE_TIMEOUT_SECONDS",
            env::var("DATABASE_TIMEOUT_SECONDS").ok(),
            DEFAULT_DATABASE_TIMEOUT_SECONDS,
        )?;

        Ok(Config {
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| format!("0.0.0.0:{}", port)),
            database_timeout_seconds,
        })
    }

    pub fn database_url_is_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_is_set(&self) -> bool {
        self.database_name.is_some()
    }
}

/// Parses a numeric setting; unset falls back to `default`, garbage is an error.
fn parse_setting<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", key, value, e)),
        None => Ok(default),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(url: Option<&str>, name: Option<&str>) -> Config {
        Config {
            database_url: url.map(str::to_string),
            database_name: name.map(str::to_string),
            server_address: "127.0.0.1:0".to_string(),
            database_timeout_seconds: DEFAULT_DATABASE_TIMEOUT_SECONDS,
        }
    }

    #[test]
    fn test_set_flags_follow_optional_values() {
        let config = config_with(Some("mongodb://localhost:27017"), None);
        assert!(config.database_url_is_set());
        assert!(!config.database_name_is_set());

        let config = config_with(None, Some("vanbladel"));
        assert!(!config.database_url_is_set());
        assert!(config.database_name_is_set());
    }

    #[test]
    fn test_unset_setting_uses_default() {
        assert_eq!(parse_setting("PORT", None, DEFAULT_PORT).unwrap(), 8000);
        assert_eq!(
            parse_setting("DATABASE_TIMEOUT_SECONDS", None, DEFAULT_DATABASE_TIMEOUT_SECONDS)
                .unwrap(),
            5
        );
    }

    #[test]
    fn test_setting_is_trimmed_and_parsed() {
        let timeout: u64 =
            parse_setting("DATABASE_TIMEOUT_SECONDS", Some(" 12 ".to_string()), 5).unwrap();
        assert_eq!(timeout, 12);
    }

    #[test]
    fn test_unparsable_settings_are_errors() {
        let err = parse_setting("PORT", Some("eighty".to_string()), DEFAULT_PORT).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT 'eighty'"));

        let err = parse_setting(
            "DATABASE_TIMEOUT_SECONDS",
            Some("soon".to_string()),
            DEFAULT_DATABASE_TIMEOUT_SECONDS,
        )
        .unwrap_err();
        assert!(err
            .to_string()
            .contains("Invalid DATABASE_TIMEOUT_SECONDS 'soon'"));
    }
}
