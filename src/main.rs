mod config;
mod error;
mod upload;
mod upload_request;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Args, UploadConfig};

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    upload::upload(&UploadConfig::from(args)).await?;

    Ok(())
}
