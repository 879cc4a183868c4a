//! Initial schema migration.
//!
//! - `vehicles`: registered vehicles and who they are assigned to
//! - `fuel_events`: refueling events, with the vehicle fields copied at entry
//!
//! `fuel_events` carries no foreign key to `vehicles`: the
//! vehicle columns are a snapshot taken when the event is recorded.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Vehicles {
    Table,
    Id,
    Name,
    Plate,
    Responsible,
    Status,
}

#[derive(Iden)]
enum FuelEvents {
    Table,
    Id,
    Date,
    VehicleName,
    Plate,
    Responsible,
    Amount,
    Volume,
    FuelType,
    Note,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Vehicles
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Name).string().not_null())
                    .col(
                        ColumnDef::new(Vehicles::Plate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Vehicles::Responsible).string().not_null())
                    .col(
                        ColumnDef::new(Vehicles::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-vehicles-status")
                    .table(Vehicles::Table)
                    .col(Vehicles::Status)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Fuel events
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(FuelEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FuelEvents::Date).date().not_null())
                    .col(ColumnDef::new(FuelEvents::VehicleName).string().not_null())
                    .col(
                        ColumnDef::new(FuelEvents::Plate)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(FuelEvents::Responsible).string().not_null())
                    // centavos
                    .col(ColumnDef::new(FuelEvents::Amount).big_integer().not_null())
                    // milliliters
                    .col(ColumnDef::new(FuelEvents::Volume).big_integer().not_null())
                    .col(ColumnDef::new(FuelEvents::FuelType).string().not_null())
                    .col(ColumnDef::new(FuelEvents::Note).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-fuel_events-date")
                    .table(FuelEvents::Table)
                    .col(FuelEvents::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FuelEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        Ok(())
    }
}
