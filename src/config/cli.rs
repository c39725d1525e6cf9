use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "car-lookup")]
#[command(about = "Look up vehicle years, makes, models and trims from the CarQuery API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every model year the upstream service covers
    Years,
    /// List makes for a model year
    Makes {
        #[arg(long)]
        year: i32,
    },
    /// List models for a year and make
    Models {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        make: String,
    },
    /// List trims for a year, make and model
    Trims {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
    },
    /// Assemble a vehicle from a trim's model id and announce it
    Vehicle {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        model_id: i64,
    },
}

impl CliConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
