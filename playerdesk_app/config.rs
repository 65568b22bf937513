use dotenvy::dotenv;
use std::env;

use playerdesk_types::errors::{AppError, ApplicationError};

const DEFAULT_API_BASE_URL: &str = "https://hadrien.billard.kernl.fr";
const MIN_COOKIE_SECRET_LEN: usize = 64;
const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub port: u16,
    pub cookie_secret: String,
    pub locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenv().ok();

        let api_base_url = match env::var("PLAYERDESK_API_BASE_URL") {
            Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        let port = match env::var("PLAYERDESK_PORT") {
            Ok(val) => val.parse::<u16>().map_err(|_| {
                AppError::InvalidConfig(format!("PLAYERDESK_PORT `{val}` is not a valid port"))
            })?,
            Err(_) => 8080,
        };

        let cookie_secret = match env::var("PLAYERDESK_COOKIE_SECRET") {
            Ok(val) => val,
            Err(_) => {
                return Err(AppError::InvalidConfig(
                    "you need to set env PLAYERDESK_COOKIE_SECRET".to_string(),
                )
                .into());
            }
        };

        let locale = match env::var("PLAYERDESK_LOCALE") {
            Ok(val) => val.to_lowercase(),
            Err(_) => "en".to_string(),
        };

        let config = Self {
            api_base_url,
            port,
            cookie_secret,
            locale,
        };
        config.validate()?;

        Ok(config)
    }

    /// Checks the invariants `from_env` relies on, also used by configs built by hand.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(AppError::InvalidConfig(format!(
                "PLAYERDESK_COOKIE_SECRET must be at least {MIN_COOKIE_SECRET_LEN} bytes long"
            ))
            .into());
        }

        if !SUPPORTED_LOCALES.contains(&self.locale.as_str()) {
            return Err(AppError::InvalidConfig(format!(
                "unsupported locale `{}`, expected one of {:?}",
                self.locale, SUPPORTED_LOCALES
            ))
            .into());
        }

        Ok(())
    }
}
