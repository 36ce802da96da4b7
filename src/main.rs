mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::notify::SimulatedNotifier;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = config::env_parse("PORT", 3000);
    let app_config = config::AppConfig::from_env();

    // Alert delivery is simulated end to end; the notifier seam exists so a
    // real dispatcher can be dropped in without touching the timer.
    let notifier = Arc::new(SimulatedNotifier);
    tracing::info!("alert dispatch is simulated; no real delivery is attempted");

    let state = state::AppState::new(notifier, app_config);

    // Spawn background session reaper.
    let _reaper = services::session::spawn_session_reaper(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "nightwalk listening");
    axum::serve(listener, app).await.expect("server failed");
}
