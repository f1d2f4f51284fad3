mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dogceo_api::Client;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "dogceo")]
#[command(about = "Look up dog sub-breeds from the dog.ceo API")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sub-breeds of one or more breeds
    SubBreeds(commands::sub_breeds::SubBreedsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dogceo=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::SubBreeds(args) => {
            let config = Config::from_env().with_overrides(args.base_url.as_deref(), args.timeout);
            tracing::debug!("Using {} with {}s timeout", config.base_url, config.timeout.as_secs());
            let client = Client::builder()
                .base_url(&config.base_url)
                .timeout(config.timeout)
                .build()?;
            commands::sub_breeds::run(args, &client, &format).await?
        }
    }

    Ok(())
}
