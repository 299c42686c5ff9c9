use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{model::auth::AuthSettings, service::auth::directory::Directory};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub directory: Arc<dyn Directory>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        directory: Arc<dyn Directory>,
        auth: AuthSettings,
    ) -> Self {
        Self {
            db,
            directory,
            auth: Arc::new(auth),
        }
    }
}
