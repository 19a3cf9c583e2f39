use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::catalog::Catalog;
use crate::config::{Command, Config};
use crate::controller::AppState;

pub mod agent;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod extractor;
pub mod helpers;
pub mod models;
pub mod presentation;
pub mod prompt;
pub mod search;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting restaurant finder in {} mode", config.environment);

    let catalog = Catalog::load(&config.catalog_path)
        .await
        .context("Failed to load the restaurant catalog")?;

    match config.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => controller::serve(AppState::new(catalog), &config).await,
        Command::Prompt => {
            tokio::task::spawn_blocking(move || {
                prompt::run(&catalog, std::io::stdin().lock(), std::io::stdout().lock())
            })
            .await
            .context("Interactive prompt stopped unexpectedly")?
        }
        Command::Chat { message } => {
            let response = agent::RestaurantAgent::new(catalog)
                .handle_message(&message)
                .context("Failed to answer message")?;
            println!("{}", presentation::summarize(&response.candidates));
            Ok(())
        }
    }
}
