mod config;
mod error;
mod greeting;
mod registration;

use crate::config::Config;
use lambda_http::{run, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    let app = registration::router(&config)?;

    run(app).await
}
