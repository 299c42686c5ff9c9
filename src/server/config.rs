use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Default public holiday feed, England & Wales division is imported from it.
pub const DEFAULT_HOLIDAY_FEED_URL: &str = "https://www.gov.uk/bank-holidays.json";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_LDAP_USER_ATTRIBUTE: &str = "uid";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub allowed_tokens: Vec<String>,
    pub allowed_origins: Vec<String>,
    pub ldap: LdapConfig,
    pub holiday_feed_url: String,
    pub bind_address: SocketAddr,
}

/// Directory connection settings, including the read-only service account used to look
/// up user entries before binding as them.
#[derive(Clone)]
pub struct LdapConfig {
    pub url: String,
    pub base_dn: String,
    pub bind_dn: String,
    pub bind_password: String,
    pub user_attribute: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: optional("JWT_AUTH_SECRET_KEY").unwrap_or_default(),
            allowed_tokens: split_list(&optional("ALLOWED_TOKENS").unwrap_or_default()),
            allowed_origins: split_list(&optional("ALLOWED_ORIGINS").unwrap_or_default()),
            ldap: LdapConfig {
                url: required("LDAP_URL")?,
                base_dn: required("LDAP_BASE_DN")?,
                bind_dn: required("LDAP_BIND_DN")?,
                bind_password: required("LDAP_BIND_PASSWORD")?,
                user_attribute: optional("LDAP_USER_ATTRIBUTE")
                    .unwrap_or_else(|| DEFAULT_LDAP_USER_ATTRIBUTE.to_string()),
            },
            holiday_feed_url: optional("HOLIDAY_FEED_URL")
                .unwrap_or_else(|| DEFAULT_HOLIDAY_FEED_URL.to_string()),
            bind_address,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

/// Splits a comma-separated list, dropping empty entries.
///
/// Empty entries are dropped so that an unset allow-list can never match an empty bearer
/// token.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
