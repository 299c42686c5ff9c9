use std::{sync::Arc, time::Duration};

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    scheduler::{JobContext, Scheduler},
    service::auth::directory::{Directory, LdapDirectory},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the LDAP directory used to verify login credentials
pub fn build_directory(config: &Config) -> Arc<dyn Directory> {
    Arc::new(LdapDirectory::new(config.ldap.clone()))
}

/// Build the HTTP client used to fetch the holiday feed
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(http_client)
}

/// Build the CORS layer from the configured origin allow-list
///
/// Credentials are allowed so browsers send the session cookie. An empty allow-list mirrors
/// the request origin.
pub fn build_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, Error> {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                    var: "ALLOWED_ORIGINS".to_string(),
                    reason: format!("{:?}: {}", origin, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]))
}

/// Register background jobs and start the scheduler
pub async fn start_scheduler(
    config: &Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(), Error> {
    let scheduler = Scheduler::new(JobContext {
        db,
        http_client,
        holiday_feed_url: config.holiday_feed_url.clone(),
    })
    .await?;

    scheduler.start().await
}
