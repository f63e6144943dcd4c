//! Credentials and recipient from the environment

use thiserror::Error;

pub const NAVER_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub const NAVER_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";
pub const GMAIL_USER: &str = "GMAIL_USER";
pub const GMAIL_APP_PASSWORD: &str = "GMAIL_APP_PASSWORD";
pub const TO_EMAIL: &str = "TO_EMAIL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
}

/// Everything a run needs from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub gmail_user: String,
    pub gmail_app_password: String,
    /// Defaults to the sending account
    pub to_email: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`
    ///
    /// Empty values count as missing. Every missing required variable is
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |key: &str| {
            let value = read(key);
            if value.is_none() {
                missing.push(key.to_string());
            }
            value.unwrap_or_default()
        };

        let naver_client_id = require(NAVER_CLIENT_ID);
        let naver_client_secret = require(NAVER_CLIENT_SECRET);
        let gmail_user = require(GMAIL_USER);
        let gmail_app_password = require(GMAIL_APP_PASSWORD);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let to_email = read(TO_EMAIL).unwrap_or_else(|| gmail_user.clone());

        Ok(Self {
            naver_client_id,
            naver_client_secret,
            gmail_user,
            gmail_app_password,
            to_email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (NAVER_CLIENT_ID, "id"),
            (NAVER_CLIENT_SECRET, "secret"),
            (GMAIL_USER, "bot@example.com"),
            (GMAIL_APP_PASSWORD, "app-password"),
        ]
    }

    #[test]
    fn test_complete_environment() {
        let mut pairs = complete();
        pairs.push((TO_EMAIL, "reader@example.com"));

        let config = BotConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.naver_client_id, "id");
        assert_eq!(config.gmail_app_password, "app-password");
        assert_eq!(config.to_email, "reader@example.com");
    }

    #[test]
    fn test_recipient_defaults_to_sender() {
        let config = BotConfig::from_lookup(lookup(&complete())).unwrap();
        assert_eq!(config.to_email, "bot@example.com");

        let mut pairs = complete();
        pairs.push((TO_EMAIL, ""));
        let config = BotConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.to_email, "bot@example.com");
    }

    #[test]
    fn test_all_missing_variables_are_named() {
        let err = BotConfig::from_lookup(lookup(&[
            (NAVER_CLIENT_ID, "id"),
            (GMAIL_USER, "bot@example.com"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingVariables(vec![
                NAVER_CLIENT_SECRET.to_string(),
                GMAIL_APP_PASSWORD.to_string(),
            ])
        );
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: NAVER_CLIENT_SECRET, GMAIL_APP_PASSWORD"
        );
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let mut pairs = complete();
        pairs[0] = (NAVER_CLIENT_ID, "");
        pairs[3] = (GMAIL_APP_PASSWORD, "   ");

        let err = BotConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVariables(vec![
                NAVER_CLIENT_ID.to_string(),
                GMAIL_APP_PASSWORD.to_string(),
            ])
        );
    }
}
