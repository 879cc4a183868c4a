use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, NewVehicleCmd, ResultEngine, Vehicle, VehicleStatus,
    util::normalize_required_name, vehicles,
};

use super::{Engine, with_tx};

impl Engine {
    /// Register a vehicle. New vehicles are always `Active`.
    pub async fn new_vehicle(&self, cmd: NewVehicleCmd) -> ResultEngine<Vehicle> {
        let name = normalize_required_name(&cmd.name, "vehicle")?;
        let plate = cmd.plate.trim().to_string();
        with_tx!(self, |db_tx| {
            let model = vehicles::ActiveModel {
                id: ActiveValue::NotSet,
                name: ActiveValue::Set(name),
                plate: ActiveValue::Set(plate),
                responsible: ActiveValue::Set(cmd.responsible.as_str().to_string()),
                status: ActiveValue::Set(VehicleStatus::Active.as_str().to_string()),
            }
            .insert(&db_tx)
            .await?;

            let vehicle = Vehicle::try_from(model)?;
            tracing::info!(id = vehicle.id, name = %vehicle.name, "registered vehicle");
            Ok(vehicle)
        })
    }

    /// List vehicles in registration order.
    ///
    /// `status` narrows the list; `None` returns every vehicle.
    pub async fn vehicles(&self, status: Option<VehicleStatus>) -> ResultEngine<Vec<Vehicle>> {
        let mut query = vehicles::Entity::find().order_by_asc(vehicles::Column::Id);
        if let Some(status) = status {
            query = query.filter(vehicles::Column::Status.eq(status.as_str()));
        }

        query
            .all(&self.database)
            .await?
            .into_iter()
            .map(Vehicle::try_from)
            .collect()
    }

    pub async fn vehicle(&self, id: i32) -> ResultEngine<Vehicle> {
        let model = vehicles::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("vehicle {id}")))?;
        Vehicle::try_from(model)
    }

    /// First active vehicle registered under `name`.
    pub async fn active_vehicle_by_name(&self, name: &str) -> ResultEngine<Vehicle> {
        let name = name.trim();
        let model = vehicles::Entity::find()
            .filter(vehicles::Column::Name.eq(name))
            .filter(vehicles::Column::Status.eq(VehicleStatus::Active.as_str()))
            .order_by_asc(vehicles::Column::Id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("active vehicle {name}")))?;
        Vehicle::try_from(model)
    }
}
