use roster::server::{
    config::Config,
    error::Error,
    model::{app::AppState, auth::AuthSettings},
    router, startup,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    if config.jwt_secret.is_empty() {
        tracing::warn!("JWT_AUTH_SECRET_KEY is not set, logins will fail until it is configured");
    }

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::build_http_client()?;
    let cors = startup::build_cors_layer(&config.allowed_origins)?;

    startup::start_scheduler(&config, db.clone(), http_client).await?;

    let state = AppState::new(
        db,
        startup::build_directory(&config),
        AuthSettings {
            jwt_secret: config.jwt_secret.clone(),
            allowed_tokens: config.allowed_tokens.clone(),
        },
    );

    let app = router::routes()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
