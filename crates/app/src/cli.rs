use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use engine::{FuelType, Money, Responsible, Selection, VehicleStatus, Volume, YearMonth};

#[derive(Parser, Debug)]
#[command(name = "abastecimento")]
#[command(about = "Track vehicle refueling expenses")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the SQLite database path.
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Override the log level (e.g. `debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register and list vehicles.
    Vehicle(Vehicle),
    /// Record and list refuelings.
    Fuel(Fuel),
    /// Show spend metrics, by month, fuel type and vehicle.
    Dashboard(DashboardArgs),
    /// Write the refuelings of a date range to a CSV file.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct Vehicle {
    #[command(subcommand)]
    pub command: VehicleCommand,
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommand {
    Add(VehicleAddArgs),
    List(VehicleListArgs),
}

#[derive(Args, Debug)]
pub struct VehicleAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub plate: String,
    /// store, workshop, test-drive, test-ride or other.
    #[arg(long)]
    pub responsible: Responsible,
}

#[derive(Args, Debug)]
pub struct VehicleListArgs {
    /// active, inactive or all.
    #[arg(long, default_value = "active")]
    pub status: Selection<VehicleStatus>,
}

#[derive(Args, Debug)]
pub struct Fuel {
    #[command(subcommand)]
    pub command: FuelCommand,
}

#[derive(Subcommand, Debug)]
pub enum FuelCommand {
    Add(FuelAddArgs),
    List(FuelListArgs),
}

#[derive(Args, Debug)]
pub struct FuelAddArgs {
    /// Name of an active vehicle.
    #[arg(long)]
    pub vehicle: String,
    /// Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Amount paid, in R$.
    #[arg(long)]
    pub amount: Money,
    /// Liters.
    #[arg(long)]
    pub volume: Volume,
    /// gasoline, ethanol, diesel or diesel-s10.
    #[arg(long)]
    pub fuel_type: FuelType,
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args, Debug)]
pub struct FuelListArgs {
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// `YYYY-MM` or `All`.
    #[arg(long, default_value = "All")]
    pub month: Selection<YearMonth>,
    /// Responsible tag or `All`.
    #[arg(long, default_value = "All")]
    pub responsible: Selection<Responsible>,
    /// Vehicle name or `All`.
    #[arg(long, default_value = "All")]
    pub vehicle: Selection<String>,
    /// Print the dashboard as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long)]
    pub from: NaiveDate,
    #[arg(long)]
    pub to: NaiveDate,
    /// Directory to write into, instead of the configured one.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
