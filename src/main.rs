//! Vortex command line entry point.
//!
//! Loads contract artifacts from a directory, runs the facade, loads the blockchain
//! connection and the requested contracts, then prints the resulting store state.
//!
//! # Flow
//! 1. Loads `.env` and sets up logging
//! 2. Builds a connection loader for the configured JSON-RPC endpoint
//! 3. Initializes the facade from the artifacts directory
//! 4. Waits for the connection, loads contracts and prints the state as JSON

use std::{path::PathBuf, process::ExitCode, sync::Arc, time::Duration};

use anyhow::{anyhow, Context};
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use vortex::{
	bootstrap::{initialize_vortex, load_connection, load_deployed_contracts, BootstrapConfig},
	models::{ConnectionStatus, NetworkId},
	services::{connection::HttpConnectionLoader, facade::VortexContext},
	utils::logging::setup_logging,
};

#[derive(Debug, Parser)]
#[command(
	name = "vortex",
	version,
	about = "Load contract artifacts and a blockchain connection into a Vortex store"
)]
struct Cli {
	/// Directory holding the contract artifacts
	#[arg(long, env = "VORTEX_ARTIFACTS", default_value = "build/contracts")]
	artifacts: PathBuf,

	/// JSON-RPC endpoint of the node
	#[arg(long, env = "VORTEX_RPC_URL", default_value = "http://localhost:8545")]
	rpc_url: String,

	/// Additional network id to whitelist (repeatable)
	#[arg(long = "network", value_name = "ID")]
	networks: Vec<NetworkId>,

	/// Contract to load at its address on the connected network (repeatable)
	#[arg(long = "load", value_name = "CONTRACT")]
	contracts: Vec<String>,

	/// Seconds to wait for the connection to load
	#[arg(long, default_value_t = 30)]
	timeout_secs: u64,

	/// Log at debug level unless RUST_LOG is set
	#[arg(short, long)]
	verbose: bool,
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
	let loader = HttpConnectionLoader::new(&cli.rpc_url)?;
	let config = BootstrapConfig {
		artifacts_dir: cli.artifacts,
		networks: cli.networks,
		timeout: Duration::from_secs(cli.timeout_secs),
	};

	let shared = initialize_vortex(VortexContext::global(), &config, Arc::new(loader))
		.map_err(|e| anyhow!(e))
		.context("Failed to initialize Vortex")?;

	let connection = load_connection(&shared, config.timeout)
		.await
		.map_err(|e| anyhow!(e))
		.context("Failed to load connection")?;

	if connection.status != ConnectionStatus::Loaded {
		return Err(anyhow!(
			"connection {:?}: {}",
			connection.status,
			connection.error.unwrap_or_default()
		));
	}
	info!(network_id = ?connection.network_id, "Connected");

	let store = {
		let vortex = shared.lock();
		let loaded = load_deployed_contracts(&vortex, &cli.contracts)
			.map_err(|e| anyhow!(e))
			.context("Failed to load contracts")?;
		for instance in &loaded {
			info!(contract = %instance.name, address = %instance.address, "Contract loaded");
		}
		vortex.store()?
	};

	println!("{}", serde_json::to_string_pretty(&store.state())?);
	Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
	// Missing .env is fine
	let _ = dotenv();
	let cli = Cli::parse();

	if let Err(e) = setup_logging(cli.verbose) {
		eprintln!("Failed to setup logging: {}", e);
		return ExitCode::FAILURE;
	}

	match execute(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{:#}", e);
			ExitCode::FAILURE
		}
	}
}
