//! Standalone mock of the storefront admin API
//!
//! ```bash
//! MOCK_PORT=5000 cargo run -p admin-mock
//! ```
//! Seeded logins: `admin@shop.test` / `admin123` (admin) and
//! `staff@shop.test` / `staff123` (non-admin).

use admin_mock::{API_PREFIX, MockConfig, MockState, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("admin_mock=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    let config = MockConfig::from_env();
    let state = MockState::seeded_with_secret(&config.jwt_secret);
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Mock admin API listening on http://{}{}", addr, API_PREFIX);

    axum::serve(listener, app).await?;
    Ok(())
}
