use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use maritime_cli::commands::conditions::{handle_conditions, ConditionsArgs};
use maritime_cli::commands::plan::{handle_plan, PlanArgs};
use maritime_cli::commands::ports::{handle_list_ports, PortsArgs};
use maritime_cli::commands::ships::handle_list_ships;
use maritime_cli::commands::simulate::{handle_simulate, SimulateArgs};
use maritime_cli::output::OutputFormat;
use maritime_cli::reference_data::{load_catalog, ReferenceDataPaths};

#[derive(Parser, Debug)]
#[command(author, version, about = "Maritime route planning and voyage simulation")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Port CSV replacing the built-in ports (env: MARITIME_PORT_DATA).
    #[arg(long, global = true)]
    ports: Option<PathBuf>,

    /// Ship CSV replacing the built-in ship types (env: MARITIME_SHIP_DATA).
    #[arg(long, global = true)]
    ships: Option<PathBuf>,

    /// Bunkering hub CSV replacing the built-in hubs (env: MARITIME_HUB_DATA).
    #[arg(long, global = true)]
    hubs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate cost, risk and compliance for a voyage between two ports.
    Plan(PlanArgs),
    /// Simulate a voyage leg by leg along waypoints.
    Simulate(SimulateArgs),
    /// List catalog ports, optionally filtered by name.
    Ports(PortsArgs),
    /// List available ship types.
    Ships,
    /// Derive sea state and navigation alerts from a weather observation.
    Conditions(ConditionsArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ReferenceDataPaths::resolve(cli.ports, cli.ships, cli.hubs);
    let catalog = load_catalog(&paths)?;
    let format = cli.format;

    match &cli.command {
        Command::Plan(args) => handle_plan(&catalog, args, format),
        Command::Simulate(args) => handle_simulate(&catalog, args, format),
        Command::Ports(args) => handle_list_ports(&catalog, args, format),
        Command::Ships => handle_list_ships(&catalog, format),
        Command::Conditions(args) => handle_conditions(&catalog, args, format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
