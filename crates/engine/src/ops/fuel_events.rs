use sea_orm::{ActiveValue, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, FuelEvent, Money, NewFuelEventCmd, ResultEngine, Vehicle, Volume, fuel_events,
    util::normalize_optional_text, vehicles,
};

use super::{Engine, with_tx};

impl Engine {
    /// Record a refueling.
    ///
    /// The amount and volume must be positive and within
    /// [`Money::MAX_ENTRY`] and [`Volume::MAX_ENTRY`]; the vehicle must be
    /// active.
    /// The vehicle's name, plate and responsible are copied into the event.
    /// A rejected entry writes nothing.
    pub async fn record_fuel_event(&self, cmd: NewFuelEventCmd) -> ResultEngine<FuelEvent> {
        if !cmd.amount.is_positive() {
            return Err(EngineError::Validation("amount must be > 0".to_string()));
        }
        if cmd.amount > Money::MAX_ENTRY {
            return Err(EngineError::Validation(format!(
                "amount must be <= {}",
                Money::MAX_ENTRY
            )));
        }
        if !cmd.volume.is_positive() {
            return Err(EngineError::Validation("volume must be > 0".to_string()));
        }
        if cmd.volume > Volume::MAX_ENTRY {
            return Err(EngineError::Validation(format!(
                "volume must be <= {}",
                Volume::MAX_ENTRY
            )));
        }
        let note = normalize_optional_text(cmd.note.as_deref());

        with_tx!(self, |db_tx| {
            let vehicle_model = vehicles::Entity::find_by_id(cmd.vehicle_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("vehicle {}", cmd.vehicle_id)))?;
            let vehicle = Vehicle::try_from(vehicle_model)?;
            if !vehicle.is_active() {
                return Err(EngineError::InactiveVehicle(vehicle.name));
            }
            let snapshot = vehicle.snapshot();

            let model = fuel_events::ActiveModel {
                id: ActiveValue::NotSet,
                date: ActiveValue::Set(cmd.date),
                vehicle_name: ActiveValue::Set(snapshot.name),
                plate: ActiveValue::Set(snapshot.plate),
                responsible: ActiveValue::Set(snapshot.responsible.as_str().to_string()),
                amount: ActiveValue::Set(cmd.amount.cents()),
                volume: ActiveValue::Set(cmd.volume.milliliters()),
                fuel_type: ActiveValue::Set(cmd.fuel_type.as_str().to_string()),
                note: ActiveValue::Set(note),
            }
            .insert(&db_tx)
            .await?;

            let event = FuelEvent::try_from(model)?;
            tracing::info!(
                id = event.id,
                vehicle = %event.vehicle.name,
                amount = %event.amount,
                "recorded fuel event"
            );
            Ok(event)
        })
    }

    /// All fuel events in the order they were recorded.
    pub async fn fuel_events(&self) -> ResultEngine<Vec<FuelEvent>> {
        let models = fuel_events::Entity::find()
            .order_by_asc(fuel_events::Column::Id)
            .all(&self.database)
            .await?;
        tracing::debug!(count = models.len(), "loaded fuel events");
        models.into_iter().map(FuelEvent::try_from).collect()
    }
}
