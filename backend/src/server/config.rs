//! Server settings loaded via OrthoConfig.
//!
//! Values come from `FLASHCARDS_*` environment variables (or the matching
//! CLI flags and config file keys). Every field is optional; accessors apply
//! the defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use flashcards::outbound::persistence::PoolConfig;
use flashcards::outbound::security::DEFAULT_TOKEN_TTL;
use flashcards::outbound::translation::{
    DEFAULT_TRANSLATION_ENDPOINT, DEFAULT_TRANSLATION_TIMEOUT,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Origins of the local React frontend.
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Errors raised while interpreting loaded settings.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid bind address {value}: {source}")]
    BindAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid translation endpoint {value}: {source}")]
    TranslationEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid CORS origin {value}: expected an http(s) origin")]
    CorsOrigin { value: String },
}

/// Configuration values for the HTTP server and its adapters.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FLASHCARDS")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without it the server keeps data in memory.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Remote translation provider endpoint.
    pub translation_endpoint: Option<String>,
    /// Remote translation timeout in seconds.
    pub translation_timeout_secs: Option<u64>,
    /// Access token lifetime in seconds.
    pub token_ttl_secs: Option<u64>,
    /// Comma-separated browser origins allowed to call the API.
    pub cors_origins: Option<String>,
}

impl AppSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let port = self.port.unwrap_or(DEFAULT_PORT);
        let value = format!("{host}:{port}");
        value
            .parse()
            .map_err(|source| SettingsError::BindAddress { value, source })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
    }

    pub fn translation_endpoint(&self) -> Result<Url, SettingsError> {
        let value = self
            .translation_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_TRANSLATION_ENDPOINT);
        Url::parse(value).map_err(|source| SettingsError::TranslationEndpoint {
            value: value.to_owned(),
            source,
        })
    }

    pub fn translation_timeout(&self) -> Duration {
        self.translation_timeout_secs
            .map_or(DEFAULT_TRANSLATION_TIMEOUT, Duration::from_secs)
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl_secs
            .map_or(DEFAULT_TOKEN_TTL, Duration::from_secs)
    }

    /// Allowed CORS origins in their serialised `scheme://host[:port]` form.
    ///
    /// An empty value disables cross-origin access.
    pub fn cors_origins(&self) -> Result<Vec<String>, SettingsError> {
        self.cors_origins
            .as_deref()
            .unwrap_or(DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(parse_origin)
            .collect()
    }
}

fn parse_origin(value: &str) -> Result<String, SettingsError> {
    let invalid = || SettingsError::CorsOrigin {
        value: value.to_owned(),
    };
    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
        return Err(invalid());
    }
    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "FLASHCARDS_HOST",
        "FLASHCARDS_PORT",
        "FLASHCARDS_DATABASE_URL",
        "FLASHCARDS_POOL_MAX_SIZE",
        "FLASHCARDS_TRANSLATION_ENDPOINT",
        "FLASHCARDS_TRANSLATION_TIMEOUT_SECS",
        "FLASHCARDS_TOKEN_TTL_SECS",
        "FLASHCARDS_CORS_ORIGINS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("flashcards")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.translation_endpoint().expect("endpoint").as_str(),
            DEFAULT_TRANSLATION_ENDPOINT
        );
        assert_eq!(settings.translation_timeout(), Duration::from_secs(5));
        assert_eq!(settings.token_ttl(), Duration::from_secs(1800));
        assert_eq!(
            settings.cors_origins().expect("origins"),
            ["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("FLASHCARDS_HOST", Some("127.0.0.1".to_owned())),
            ("FLASHCARDS_PORT", Some("9000".to_owned())),
            (
                "FLASHCARDS_DATABASE_URL",
                Some("postgres://localhost/flashcards".to_owned()),
            ),
            ("FLASHCARDS_POOL_MAX_SIZE", Some("4".to_owned())),
            (
                "FLASHCARDS_TRANSLATION_ENDPOINT",
                Some("http://127.0.0.1:9999/get".to_owned()),
            ),
            ("FLASHCARDS_TRANSLATION_TIMEOUT_SECS", Some("2".to_owned())),
            ("FLASHCARDS_TOKEN_TTL_SECS", Some("60".to_owned())),
            (
                "FLASHCARDS_CORS_ORIGINS",
                Some("https://cards.example.com/, http://localhost:5173".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/flashcards")
        );
        assert_eq!(settings.pool_max_size, Some(4));
        assert_eq!(
            settings.translation_endpoint().expect("endpoint").as_str(),
            "http://127.0.0.1:9999/get"
        );
        assert_eq!(settings.translation_timeout(), Duration::from_secs(2));
        assert_eq!(settings.token_ttl(), Duration::from_secs(60));
        assert_eq!(
            settings.cors_origins().expect("origins"),
            ["https://cards.example.com", "http://localhost:5173"]
        );
    }

    #[rstest]
    #[case("*")]
    #[case("localhost:3000")]
    #[case("ftp://files.example.com")]
    #[case("http://ok.example.com,not an origin")]
    fn invalid_cors_origins_are_reported(#[case] raw: &str) {
        let settings = AppSettings {
            cors_origins: Some(raw.to_owned()),
            ..AppSettings::default()
        };
        assert!(matches!(
            settings.cors_origins(),
            Err(SettingsError::CorsOrigin { .. })
        ));
    }

    #[rstest]
    fn blank_cors_setting_allows_no_origins() {
        let settings = AppSettings {
            cors_origins: Some(" ".to_owned()),
            ..AppSettings::default()
        };
        assert_eq!(settings.cors_origins().expect("origins"), Vec::<String>::new());
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some(" postgres://db/x "), Some("postgres://db/x"))]
    #[case(None, None)]
    fn blank_database_urls_are_ignored(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        let settings = AppSettings {
            database_url: raw.map(str::to_owned),
            ..AppSettings::default()
        };
        assert_eq!(settings.database_url(), expected);
    }

    #[rstest]
    fn invalid_values_are_reported() {
        let settings = AppSettings {
            host: Some("not a host".to_owned()),
            translation_endpoint: Some("::nope".to_owned()),
            ..AppSettings::default()
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddress { .. })
        ));
        assert!(matches!(
            settings.translation_endpoint(),
            Err(SettingsError::TranslationEndpoint { .. })
        ));
    }
}
