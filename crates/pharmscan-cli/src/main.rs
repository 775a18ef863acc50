use clap::{Parser, Subcommand};
use pharmscan_scraper::Aggregator;

#[derive(Debug, Parser)]
#[command(name = "pharmscan")]
#[command(about = "Pharmacy price search from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search all three pharmacy sources and print the grouped results.
    Search {
        /// Medicine name to search for.
        query: String,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query, pretty } => {
            let config = pharmscan_core::load_app_config_from_env()?;
            let aggregator = Aggregator::from_config(&config);
            let response = aggregator.aggregate(&query).await;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
