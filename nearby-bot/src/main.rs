use nearby_bot::config::Config;
use nearby_bot::dataset::{DatasetClient, DatasetClientConfig, StationSource};
use nearby_bot::line::{LineClient, LineConfig};
use nearby_bot::ranker::RankConfig;
use nearby_bot::reply::ReplyConfig;
use nearby_bot::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "nearby_bot=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Create LINE client
    let mut line_config = LineConfig::new(&config.channel_access_token);
    if let Some(base) = &config.line_api_base {
        line_config = line_config.with_api_base(base);
    }
    let line = LineClient::new(line_config).expect("Failed to create LINE client");

    // Station data: a local snapshot if configured, otherwise the live feed
    let stations = match &config.dataset_file {
        Some(path) => {
            info!(path = %path.display(), "serving stations from file");
            StationSource::from_file(path).expect("Failed to load station snapshot")
        }
        None => {
            let mut dataset_config = DatasetClientConfig::new();
            if let Some(url) = &config.dataset_url {
                dataset_config = dataset_config.with_url(url);
            }
            let client = DatasetClient::new(dataset_config).expect("Failed to create dataset client");
            info!(url = client.url(), "fetching stations from live feed");
            StationSource::Live(client)
        }
    };

    let state = AppState::new(
        config.channel_secret.clone(),
        line,
        stations,
        RankConfig::default(),
        ReplyConfig::default(),
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.listen, "listening");
    info!("  POST /webhook  - LINE webhook");
    info!("  GET  /health   - Health check");

    axum::serve(listener, app).await.expect("Server error");
}
