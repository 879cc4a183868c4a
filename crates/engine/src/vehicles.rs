//! The module contains `Vehicle` struct, its closed tags and the storage
//! entity.

use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{EngineError, util::enum_key};

/// Who a vehicle is assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Responsible {
    Store,
    Workshop,
    TestDrive,
    TestRide,
    Other,
}

impl Responsible {
    pub const ALL: [Responsible; 5] = [
        Self::Store,
        Self::Workshop,
        Self::TestDrive,
        Self::TestRide,
        Self::Other,
    ];

    /// Storage code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Store => "store",
            Self::Workshop => "workshop",
            Self::TestDrive => "test_drive",
            Self::TestRide => "test_ride",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Store => "Store",
            Self::Workshop => "Workshop",
            Self::TestDrive => "Test Drive",
            Self::TestRide => "Test Ride",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Responsible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl TryFrom<&str> for Responsible {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match enum_key(value).as_str() {
            "store" => Ok(Self::Store),
            "workshop" => Ok(Self::Workshop),
            "test_drive" => Ok(Self::TestDrive),
            "test_ride" => Ok(Self::TestRide),
            "other" => Ok(Self::Other),
            _ => Err(EngineError::InvalidValue(format!(
                "invalid responsible: {value}"
            ))),
        }
    }
}

impl FromStr for Responsible {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Only active vehicles can receive new fuel events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Active,
    Inactive,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.pad("Active"),
            Self::Inactive => f.pad("Inactive"),
        }
    }
}

impl TryFrom<&str> for VehicleStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match enum_key(value).as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(EngineError::InvalidValue(format!(
                "invalid vehicle status: {value}"
            ))),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// A registered vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Assigned by the store on registration, never reused.
    pub id: i32,
    pub name: String,
    /// May be empty.
    pub plate: String,
    pub responsible: Responsible,
    pub status: VehicleStatus,
}

impl Vehicle {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == VehicleStatus::Active
    }

    /// Copy of the fields a fuel event keeps about its vehicle.
    #[must_use]
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            name: self.name.clone(),
            plate: self.plate.clone(),
            responsible: self.responsible,
        }
    }
}

/// Vehicle fields captured when a fuel event is recorded.
///
/// This is a value copy, not a reference: changing the vehicle later does not
/// alter events already stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub name: String,
    pub plate: String,
    pub responsible: Responsible,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub plate: String,
    pub responsible: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Vehicle {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            responsible: Responsible::try_from(model.responsible.as_str())?,
            status: VehicleStatus::try_from(model.status.as_str())?,
            name: model.name,
            plate: model.plate,
        })
    }
}
