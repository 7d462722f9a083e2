use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::info;
use yoga::config::AppConfig;
use yoga::router::init_router;
use yoga::state::init_app_state;
use yoga_observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();

    let metrics_handle = if config.metrics_enabled {
        init_metrics()
    } else {
        None
    };

    let state = init_app_state(&config).await?.with_metrics(metrics_handle);
    let app = init_router(state);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
