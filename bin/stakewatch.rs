use std::sync::Arc;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use stakewatch::{
    router, AppState, ChainReader, PostgresClient, Refresher, Settings, SnapshotStore,
    StakingSource,
};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    // Load configuration
    let settings = Settings::new()
        .context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    // Database first so the schema exists before anything reads or writes
    let postgres = PostgresClient::new(&settings.postgres)
        .await
        .context("Failed to initialize database connection")?;
    postgres
        .migrate()
        .await
        .context("Failed to run database migrations")?;
    postgres.health_check().await?;

    let store: Arc<dyn SnapshotStore> = Arc::new(postgres);
    let source: Arc<dyn StakingSource> =
        Arc::new(ChainReader::new(&settings.rpc.url).context("Failed to create RPC reader")?);

    info!(
        "Tracking {} staking contracts on {}",
        settings.tokens.len(),
        settings.rpc.chain
    );

    let refresher = Arc::new(Refresher::new(
        source,
        store.clone(),
        settings.tokens.clone(),
        settings.rpc.chain.clone(),
    ));

    let app = router(AppState {
        store,
        refresher,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on {}", addr);

    #[cfg(unix)]
    let mut sigterm_stream = {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?
    };

    let shutdown = async move {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
                },
                _ = sigterm_stream.recv() => {
                    info!("Received SIGTERM, exiting gracefully...");
                },
            };
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
