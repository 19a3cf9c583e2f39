use std::net::IpAddr;
use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Clone, Debug)]
#[clap(name = "restaurant-finder", about = "Restaurant search over a static catalog")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// CSV file the catalog is loaded from at startup
    #[clap(env, long, default_value = "restaurants.csv")]
    pub catalog_path: PathBuf,

    #[clap(env = "BIND_HOST", long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Ask for search criteria on the terminal
    Prompt,
    /// Answer a single free-form message and exit
    Chat {
        message: String,
    },
}
