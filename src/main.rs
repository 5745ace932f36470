use anyhow::Result;
use resume_builder::{start_web_server, EnvironmentConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_builder=info,rocket::server=off")),
        )
        .init();

    let mut env = EnvironmentConfig::load()?;
    env.ensure_directories().await?;

    // ROCKET_PORT wins over config.yaml when set.
    if let Ok(port) = std::env::var("ROCKET_PORT") {
        env.port = port
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
    }

    info!("Environment: {}", EnvironmentConfig::environment_name());
    info!("Database: {}", env.database_path.display());
    info!("Server: http://0.0.0.0:{}", env.port);

    start_web_server(env).await
}
