use clap::Parser;
use viz_service::{build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "viz-service", about = "Serves SVG mosaics of demo and posted values")]
struct Args {
    /// Address to listen on, e.g. `127.0.0.1:9000`. Overrides the configured host and port.
    #[arg(long, env = "VIZ_SERVICE_HTTP")]
    http: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    tracing::info!("Starting viz service...");

    let config = Config::load()?;
    tracing::info!("Configuration loaded");

    let addr = args
        .http
        .unwrap_or_else(|| format!("{}:{}", config.server.host, config.server.port));

    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Viz service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /viz?type=int|float|bool|byte|string&v=...");
    tracing::info!("  - GET  /struct");
    tracing::info!("  - GET  /slice");
    tracing::info!("  - POST /api/v1/marshal");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,viz_service=debug,mosaic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
