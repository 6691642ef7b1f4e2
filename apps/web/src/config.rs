use std::fmt;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use lettre::Address;

/// Looks up one configuration variable; blank values count as unset.
type Vars<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Directory served under `/static`.
    pub static_dir: String,
}

/// Everything the mail bridge needs. Only loaded by `serve`.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// The site operator's address, used as both From and To of contact
    /// messages. Checked to be a valid address at startup.
    pub sender: String,
    pub fail_silently: bool,
    pub backend: MailBackend,
}

/// Selected with `MAIL_TRANSPORT` (`smtp`, the default, or `log`).
#[derive(Debug, Clone)]
pub enum MailBackend {
    Smtp(SmtpConfig),
    /// Development only: messages are written to the log, never delivered.
    Log,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<SmtpCredentials>,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(&optional_env)
    }

    fn from_vars(var: Vars<'_>) -> Result<Self> {
        Ok(Config {
            database_url: require(var, "DATABASE_URL")?,
            database_max_connections: parse_or(var, "DATABASE_MAX_CONNECTIONS", 10)?,
            port: parse_or(var, "PORT", 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            static_dir: var("STATIC_DIR")
                .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string()),
        })
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(&optional_env)
    }

    fn from_vars(var: Vars<'_>) -> Result<Self> {
        let raw_sender = require(var, "MAIL_SENDER")?;
        let sender = raw_sender
            .parse::<Address>()
            .with_context(|| format!("MAIL_SENDER is not a valid email address: {raw_sender}"))?;

        let backend = match var("MAIL_TRANSPORT").as_deref().unwrap_or("smtp") {
            "smtp" => MailBackend::Smtp(SmtpConfig::from_vars(var)?),
            "log" => MailBackend::Log,
            other => bail!("MAIL_TRANSPORT must be 'smtp' or 'log', got '{other}'"),
        };

        Ok(MailConfig {
            sender: sender.to_string(),
            fail_silently: parse_or(var, "MAIL_FAIL_SILENTLY", false)?,
            backend,
        })
    }
}

impl SmtpConfig {
    fn from_vars(var: Vars<'_>) -> Result<Self> {
        let host = var("SMTP_HOST").context(
            "SMTP_HOST is not set; configure a relay or set MAIL_TRANSPORT=log for local development",
        )?;
        let credentials = match (var("SMTP_USERNAME"), var("SMTP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpCredentials { username, password }),
            (None, None) => None,
            _ => bail!("SMTP_USERNAME and SMTP_PASSWORD must be set together"),
        };

        Ok(SmtpConfig {
            host,
            port: parse_or(var, "SMTP_PORT", 587)?,
            credentials,
            timeout: Duration::from_secs(parse_or(var, "SMTP_TIMEOUT_SECS", 10)?),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn require(var: Vars<'_>, key: &str) -> Result<String> {
    var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<T>(var: Vars<'_>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn mail_config(pairs: &[(&str, &str)]) -> Result<MailConfig> {
        MailConfig::from_vars(&vars(pairs))
    }

    #[test]
    fn test_app_config_defaults() {
        let config = Config::from_vars(&vars(&[("DATABASE_URL", "postgres://localhost/resume")]))
            .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.rust_log, "info");
        assert!(config.static_dir.ends_with("/static"));
    }

    #[test]
    fn test_app_config_needs_no_mail_settings() {
        // `migrate` only loads `Config`.
        assert!(Config::from_vars(&vars(&[("DATABASE_URL", "postgres://localhost/resume")])).is_ok());
    }

    #[test]
    fn test_missing_required_var_names_it() {
        let err = Config::from_vars(&vars(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = Config::from_vars(&vars(&[
            ("DATABASE_URL", "postgres://localhost/resume"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_smtp_without_host_fails_at_startup() {
        let err = mail_config(&[("MAIL_SENDER", "owner@example.com")]).unwrap_err();
        assert!(err.to_string().contains("SMTP_HOST"));
    }

    #[test]
    fn test_log_transport_is_opt_in() {
        let config = mail_config(&[
            ("MAIL_SENDER", "owner@example.com"),
            ("MAIL_TRANSPORT", "log"),
        ])
        .unwrap();
        assert!(matches!(config.backend, MailBackend::Log));
        assert!(!config.fail_silently);
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let err = mail_config(&[
            ("MAIL_SENDER", "owner@example.com"),
            ("MAIL_TRANSPORT", "carrier-pigeon"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("MAIL_TRANSPORT"));
    }

    #[test]
    fn test_malformed_sender_rejected() {
        let err = mail_config(&[("MAIL_SENDER", "not-an-address"), ("MAIL_TRANSPORT", "log")])
            .unwrap_err();
        assert!(err.to_string().contains("MAIL_SENDER"));
    }

    #[test]
    fn test_smtp_config_parsed() {
        let config = mail_config(&[
            ("MAIL_SENDER", "owner@example.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "owner"),
            ("SMTP_PASSWORD", "hunter2"),
            ("SMTP_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.sender, "owner@example.com");
        let MailBackend::Smtp(smtp) = config.backend else {
            panic!("expected SMTP backend");
        };
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.port, 587);
        assert_eq!(smtp.timeout, Duration::from_secs(3));
        let credentials = smtp.credentials.unwrap();
        assert_eq!(credentials.username, "owner");
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }

    #[test]
    fn test_half_set_credentials_rejected() {
        for (key, value) in [("SMTP_USERNAME", "owner"), ("SMTP_PASSWORD", "hunter2")] {
            let err = mail_config(&[
                ("MAIL_SENDER", "owner@example.com"),
                ("SMTP_HOST", "smtp.example.com"),
                (key, value),
            ])
            .unwrap_err();
            assert!(err.to_string().contains("must be set together"));
        }
    }

    #[test]
    fn test_blank_env_value_is_unset() {
        std::env::set_var("RESUME_SITE_TEST_BLANK", "  ");
        assert_eq!(optional_env("RESUME_SITE_TEST_BLANK"), None);
    }
}
