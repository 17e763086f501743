mod app;
mod appointments;
mod auth;
mod config;
mod consultations;
mod doctors;
mod error;
mod notifications;
mod pagination;
mod patients;
mod state;
mod symptoms;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "curelytix=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Fails here if SECRET_KEY or DATABASE_URL is missing; the process must
    // not serve traffic without signing material.
    let app_state = state::AppState::init().await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&app_state.db).await {
        tracing::warn!(error = %e, "migration failed; continuing with existing schema");
    }

    let app = app::build_app(app_state);
    app::serve(app).await
}
