//! Command structs for engine write operations.
//!
//! These types group the fields of a registration form, keeping call sites
//! readable and avoiding long argument lists.

use chrono::NaiveDate;

use crate::{FuelType, Money, Responsible, Volume};

/// Register a new vehicle. The vehicle starts `Active`.
#[derive(Clone, Debug)]
pub struct NewVehicleCmd {
    pub name: String,
    pub plate: String,
    pub responsible: Responsible,
}

impl NewVehicleCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, responsible: Responsible) -> Self {
        Self {
            name: name.into(),
            plate: String::new(),
            responsible,
        }
    }

    #[must_use]
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }
}

/// Record a refueling of an active vehicle.
#[derive(Clone, Debug)]
pub struct NewFuelEventCmd {
    pub vehicle_id: i32,
    pub date: NaiveDate,
    pub amount: Money,
    pub volume: Volume,
    pub fuel_type: FuelType,
    pub note: Option<String>,
}

impl NewFuelEventCmd {
    #[must_use]
    pub fn new(
        vehicle_id: i32,
        date: NaiveDate,
        amount: Money,
        volume: Volume,
        fuel_type: FuelType,
    ) -> Self {
        Self {
            vehicle_id,
            date,
            amount,
            volume,
            fuel_type,
            note: None,
        }
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
