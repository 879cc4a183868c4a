//! Fuel event primitives.
//!
//! A `FuelEvent` is one refueling of one vehicle on one day. Events are
//! immutable once stored.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, Money, Responsible, VehicleSnapshot, Volume, YearMonth, util::enum_key,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Ethanol,
    Diesel,
    DieselS10,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [Self::Gasoline, Self::Ethanol, Self::Diesel, Self::DieselS10];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Ethanol => "ethanol",
            Self::Diesel => "diesel",
            Self::DieselS10 => "diesel_s10",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Ethanol => "Ethanol",
            Self::Diesel => "Diesel",
            Self::DieselS10 => "Diesel S10",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl TryFrom<&str> for FuelType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match enum_key(value).as_str() {
            "gasoline" => Ok(Self::Gasoline),
            "ethanol" => Ok(Self::Ethanol),
            "diesel" => Ok(Self::Diesel),
            "diesel_s10" => Ok(Self::DieselS10),
            _ => Err(EngineError::InvalidValue(format!(
                "invalid fuel type: {value}"
            ))),
        }
    }
}

impl FromStr for FuelType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelEvent {
    pub id: i32,
    pub date: NaiveDate,
    pub vehicle: VehicleSnapshot,
    pub amount: Money,
    pub volume: Volume,
    pub fuel_type: FuelType,
    pub note: Option<String>,
}

impl FuelEvent {
    /// Month bucket the event belongs to.
    #[must_use]
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// `amount` is stored in centavos, `volume` in milliliters.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fuel_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub vehicle_name: String,
    pub plate: String,
    pub responsible: String,
    pub amount: i64,
    pub volume: i64,
    pub fuel_type: String,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for FuelEvent {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            date: model.date,
            vehicle: VehicleSnapshot {
                responsible: Responsible::try_from(model.responsible.as_str())?,
                name: model.vehicle_name,
                plate: model.plate,
            },
            amount: Money::new(model.amount),
            volume: Volume::new(model.volume),
            fuel_type: FuelType::try_from(model.fuel_type.as_str())?,
            note: model.note,
        })
    }
}
