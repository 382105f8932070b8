use anyhow::Result;
use mednutro_landing::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mednutro_landing=info".parse()?),
        )
        .init();

    info!("Starting MedNutro landing service");

    let config = Config::from_env()?;
    server::run(config).await
}
