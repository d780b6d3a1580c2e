use std::io::Write;

use anyhow::Result;
use clap::Parser;
use stock::QuoteClient;
use stockbot::{config::Config, respond};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;

use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_env()?;
    let client = QuoteClient::new(config.base_api, config.api_key)?;
    info!(base_api = %client.base_api(), "quote client ready");

    if let Some(command) = args.command {
        println!("{}", respond(&client, &command).await);
        return Ok(());
    }

    let mut lines = BufReader::new(stdin()).lines();

    if args.interactive {
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            println!("{}", respond(&client, &line).await);
        }
        info!("stdin closed");
        return Ok(());
    }

    print!("Enter your command: ");
    std::io::stdout().flush()?;

    let line = lines.next_line().await?.unwrap_or_default();
    println!("{}", respond(&client, &line).await);

    Ok(())
}
