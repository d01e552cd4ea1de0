use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use salalah::application::ports::Extractor;
use salalah::application::services::{DocumentStore, UploadService};
use salalah::infrastructure::extraction::{MockExtractor, RemoteExtractor};
use salalah::infrastructure::observability::{init_tracing, TracingConfig};
use salalah::presentation::{create_router, AppState, ScaffoldConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let settings = Settings::from_env();
    let scaffold = ScaffoldConfig::default();
    tracing::info!(environment = %settings.environment, "Configuration loaded");

    let extractor: Arc<dyn Extractor> = if scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: uploads are answered with a canned record");
        Arc::new(MockExtractor::new(Duration::from_millis(
            scaffold.mock_response_delay_ms,
        )))
    } else {
        Arc::new(RemoteExtractor::new(
            &settings.extraction.endpoint,
            Duration::from_secs(settings.extraction.timeout_secs),
        ))
    };

    let store = Arc::new(DocumentStore::new());
    let upload_service = UploadService::new(extractor, Arc::clone(&store));
    let state = AppState::new(upload_service, store);

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
