use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

use mdm_unassign::error::RunError;
use mdm_unassign::{Outcome, config, load_config, run};

/// Remove the primary-user association from a managed device.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Name of the managed device to clear
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    device_name: String,

    /// Path to the config file (default: ~/.config/mdm-unassign/config.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::default_path);
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level()),
    )
    .init();

    match run(&config, &args.device_name).await {
        Ok(Outcome::Removed { device, user }) => {
            println!("Done: '{user}' is no longer the primary user of '{device}'.");
        }
        Ok(Outcome::NoAssociation { .. }) => {
            println!("Done: nothing to change.");
        }
        Err(e) => fail(e),
    }
}

fn fail(error: RunError) -> ! {
    eprintln!("Error: {:#}", anyhow::Error::new(error));
    process::exit(1);
}
