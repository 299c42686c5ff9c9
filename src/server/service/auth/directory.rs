use std::time::Duration;

use async_trait::async_trait;
use ldap3::{ldap_escape, LdapConnAsync, LdapConnSettings, Scope, SearchEntry};

use crate::server::{config::LdapConfig, error::auth::AuthError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Verifies username and password pairs against a user directory.
#[async_trait]
pub trait Directory: Send + Sync {
    /// # Returns
    /// - `Ok(())` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// - `Err(AuthError::DirectoryUnavailable)` - Directory could not be reached or the
    ///   service account bind failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// LDAP backed [`Directory`]
///
/// Binds as the read-only service account to find the user's entry, then binds as that
/// entry with the submitted password.
pub struct LdapDirectory {
    config: LdapConfig,
}

impl LdapDirectory {
    /// Creates a new instance of [`LdapDirectory`]
    pub fn new(config: LdapConfig) -> Self {
        Self { config }
    }

    fn user_filter(&self, username: &str) -> String {
        format!("({}={})", self.config.user_attribute, ldap_escape(username))
    }
}

#[async_trait]
impl Directory for LdapDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        // An empty password is an unauthenticated bind which most servers accept
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials(username.to_string()));
        }

        let settings = LdapConnSettings::new().set_conn_timeout(CONNECT_TIMEOUT);
        let (conn, mut ldap) = LdapConnAsync::with_settings(settings, &self.config.url)
            .await
            .map_err(|e| AuthError::DirectoryUnavailable(e.to_string()))?;
        ldap3::drive!(conn);

        ldap.simple_bind(&self.config.bind_dn, &self.config.bind_password)
            .await
            .and_then(|result| result.success())
            .map_err(|e| AuthError::DirectoryUnavailable(e.to_string()))?;

        let (entries, _) = ldap
            .search(
                &self.config.base_dn,
                Scope::Subtree,
                &self.user_filter(username),
                vec!["dn"],
            )
            .await
            .and_then(|result| result.success())
            .map_err(|e| AuthError::DirectoryUnavailable(e.to_string()))?;

        let Some(entry) = entries.into_iter().next() else {
            let _ = ldap.unbind().await;

            return Err(AuthError::InvalidCredentials(username.to_string()));
        };
        let user_dn = SearchEntry::construct(entry).dn;

        let user_bind = ldap
            .simple_bind(&user_dn, password)
            .await
            .and_then(|result| result.success());

        let _ = ldap.unbind().await;

        match user_bind {
            Ok(_) => {
                tracing::debug!(username = %username, dn = %user_dn, "Directory bind succeeded");

                Ok(())
            }
            Err(_) => Err(AuthError::InvalidCredentials(username.to_string())),
        }
    }
}
