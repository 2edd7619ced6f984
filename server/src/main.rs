mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let config = config::ServerConfig::from_env().expect("failed to load configuration");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");
    let state = state::AppState::new(pool);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
