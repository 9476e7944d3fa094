use tokio::net::TcpListener;

use wiki_tables::config::Settings;
use wiki_tables::observability::{init_tracing, TracingConfig};
use wiki_tables::server::{create_router, AppState};
use wiki_tables::{Pipeline, Templates};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&TracingConfig::default());

    let settings = Settings::from_env();
    let pipeline = Pipeline::new(&settings.fetch)?;
    let templates = Templates::new()?;
    let router = create_router(AppState::new(pipeline, templates));

    let addr = settings.server.socket_addr()?;
    tracing::info!(
        %addr,
        fetch_timeout_secs = settings.fetch.timeout.as_secs(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
