use mushaf_web::{dataset_path, routes, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let path = dataset_path();
    let state = Arc::new(AppState::new(&path)?);
    tracing::info!(
        "Serving {} surahs from {}",
        state.surah_count(),
        path.display()
    );

    let app = routes::router(state);

    let addr = std::env::var("MUSHAF_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
