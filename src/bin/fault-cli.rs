use clap::{Parser, Subcommand};
use serde_json::Value;

use fault_lab::config::RequesterConfig;
use fault_lab::failure::FailureMode;
use fault_lab::requester::Requester;

#[derive(Parser)]
#[command(name = "fault-cli")]
#[command(about = "Client CLI for the fault-lab demo server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Client-side time budget in milliseconds
    #[arg(short, long, default_value_t = 3000)]
    budget_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the product listing, optionally requesting a failure mode
    Fetch {
        /// Failure mode to inject: none, timeout or 503
        #[arg(short, long, default_value = "none")]
        failure: String,
    },
    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { failure } => {
            let mode = FailureMode::from_param(Some(&failure));
            let requester = Requester::from_config(&RequesterConfig {
                budget_ms: cli.budget_ms,
                base_url: cli.url.clone(),
            })?;

            match requester.fetch_with_budget(mode).await {
                Ok(success) => {
                    println!("SUCCESS LOG:");
                    println!("{}", serde_json::to_string_pretty(&success.entry)?);
                    println!();
                    for product in &success.products {
                        println!(
                            "  #{:<3} {:<22} {:<12} ${:>7.2}  stock {}",
                            product.id, product.name, product.category, product.price,
                            product.stock
                        );
                    }
                }
                Err(error) => {
                    eprintln!("ERROR LOG:");
                    eprintln!("{}", serde_json::to_string_pretty(&error.into_entry())?);
                    std::process::exit(1);
                }
            }
        }
        Commands::Health => {
            let client = reqwest::Client::new();
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: health endpoint returned status {}", status);
                std::process::exit(1);
            }
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
