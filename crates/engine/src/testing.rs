//! Fixtures shared by unit tests.

use chrono::NaiveDate;

use crate::{FuelEvent, FuelType, Money, Responsible, VehicleSnapshot, Volume};

pub(crate) fn event(
    id: i32,
    date: &str,
    vehicle: &str,
    responsible: Responsible,
    fuel_type: FuelType,
    amount_cents: i64,
    volume_ml: i64,
) -> FuelEvent {
    FuelEvent {
        id,
        date: date.parse::<NaiveDate>().unwrap(),
        vehicle: VehicleSnapshot {
            name: vehicle.to_string(),
            plate: format!("{}-{id}", vehicle.to_ascii_uppercase()),
            responsible,
        },
        amount: Money::new(amount_cents),
        volume: Volume::new(volume_ml),
        fuel_type,
        note: None,
    }
}
