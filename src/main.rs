use car_lookup::config::cli::Command;
use car_lookup::utils::{logger, validation::Validate};
use car_lookup::{CarQueryClient, CliConfig, ConsolePublisher, VehicleService};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting car-lookup CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.client_config();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = VehicleService::new(CarQueryClient::new(config), ConsolePublisher);

    match &cli.command {
        Command::Years => {
            let years = service.get_years().await?;
            println!("{}", serde_json::to_string(&years)?);
        }
        Command::Makes { year } => {
            let makes = service.get_makes(*year).await?;
            println!("{}", serde_json::to_string_pretty(&makes)?);
        }
        Command::Models { year, make } => {
            let models = service.get_models(*year, make).await?;
            println!("{}", serde_json::to_string_pretty(&models)?);
        }
        Command::Trims { year, make, model } => {
            let trims = service.get_trims(*year, make, model).await?;
            println!("{}", serde_json::to_string_pretty(&trims)?);
        }
        Command::Vehicle {
            year,
            make,
            model,
            model_id,
        } => {
            let vehicle = service.get_vehicle(*year, make, model, *model_id).await?;
            match vehicle.size() {
                Some(size) => println!("✅ Added {} [{}]", vehicle, size),
                None => println!("✅ Added {}", vehicle),
            }
        }
    }

    Ok(())
}
