//! Fuel expense tracking engine.
//!
//! - record store access for vehicles and fuel events ([`Engine`])
//! - pure filters over loaded events ([`query`])
//! - dashboard aggregations ([`report`])
//! - CSV export ([`export`])

pub use commands::{NewFuelEventCmd, NewVehicleCmd};
pub use error::EngineError;
pub use export::{ExportArtifact, export_file_name, read_csv, write_csv};
pub use fuel_events::{FuelEvent, FuelType};
pub use money::{CURRENCY_SYMBOL, Money};
pub use month::YearMonth;
pub use ops::{Engine, EngineBuilder};
pub use query::{
    DashboardFilter, FilterOptions, Selection, filter_by_date_range, filter_by_month,
    filter_by_responsible, filter_by_vehicle,
};
pub use report::{
    Dashboard, FuelShare, Summary, VehicleTotals, average_price_per_volume, count,
    fuel_type_shares, group_by_fuel_type, group_by_month, group_by_vehicle, round_for_display,
    total_amount, total_volume,
};
pub use vehicles::{Responsible, Vehicle, VehicleSnapshot, VehicleStatus};
pub use volume::Volume;

mod commands;
mod error;
pub mod export;
mod fuel_events;
mod money;
mod month;
mod ops;
pub mod query;
pub mod report;
#[cfg(test)]
mod testing;
mod util;
mod vehicles;
mod volume;

type ResultEngine<T> = Result<T, EngineError>;
