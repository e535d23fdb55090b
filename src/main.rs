use userdb::{config::DatabaseConfig, db, error::Result};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = DatabaseConfig::from_env()?;

    // Database connection and schema bootstrap; the handle stays open for
    // whatever runs next in this process and drops with it.
    let _conn = db::bootstrap(&config).await?;

    Ok(())
}
