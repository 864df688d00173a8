use ridecompare::config::Config;
use ridecompare::engine::Engine;
use ridecompare::error::Error;
use ridecompare::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let engine = Engine::new(&config)?;

    serve(engine, config.addr).await
}
