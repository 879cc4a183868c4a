use std::path::Path;

use engine::{
    DashboardFilter, Engine, EngineError, NewFuelEventCmd, NewVehicleCmd, VehicleStatus,
};

use crate::{
    cli::{
        Command, DashboardArgs, ExportArgs, Fuel, FuelAddArgs, FuelCommand, FuelListArgs,
        Vehicle, VehicleCommand,
    },
    error::{AppError, Result},
    render,
    settings::Settings,
};

/// Execute one command against `engine`, returning what should go to stdout.
pub async fn run(engine: &Engine, command: Command, settings: &Settings) -> Result<String> {
    match command {
        Command::Vehicle(Vehicle {
            command: VehicleCommand::Add(args),
        }) => {
            let cmd = NewVehicleCmd::new(&args.name, args.responsible).plate(&args.plate);
            let vehicle = engine.new_vehicle(cmd).await?;
            Ok(format!("registered vehicle: {} ({})\n", vehicle.name, vehicle.id))
        }
        Command::Vehicle(Vehicle {
            command: VehicleCommand::List(args),
        }) => {
            let vehicles = engine.vehicles(args.status.into_option()).await?;
            Ok(render::vehicles(&vehicles))
        }
        Command::Fuel(Fuel {
            command: FuelCommand::Add(args),
        }) => add_fuel(engine, args).await,
        Command::Fuel(Fuel {
            command: FuelCommand::List(args),
        }) => list_fuel(engine, args).await,
        Command::Dashboard(args) => dashboard(engine, args).await,
        Command::Export(args) => {
            let dir = args.out.clone().unwrap_or_else(|| settings.export.dir.clone());
            export(engine, args, &dir).await
        }
    }
}

async fn add_fuel(engine: &Engine, args: FuelAddArgs) -> Result<String> {
    let vehicle = match engine.active_vehicle_by_name(&args.vehicle).await {
        Ok(vehicle) => vehicle,
        Err(EngineError::KeyNotFound(msg)) => {
            if engine.vehicles(Some(VehicleStatus::Active)).await?.is_empty() {
                return Err(AppError::NoActiveVehicles);
            }
            return Err(EngineError::KeyNotFound(msg).into());
        }
        Err(err) => return Err(err.into()),
    };
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut cmd = NewFuelEventCmd::new(vehicle.id, date, args.amount, args.volume, args.fuel_type);
    if let Some(note) = args.note {
        cmd = cmd.note(note);
    }
    let event = engine.record_fuel_event(cmd).await?;
    Ok(format!(
        "recorded fuel event {}: {} {} on {}\n",
        event.id, event.vehicle.name, event.amount, event.date
    ))
}

async fn list_fuel(engine: &Engine, args: FuelListArgs) -> Result<String> {
    let events = engine.fuel_events().await?;
    let events = match (args.from, args.to) {
        (Some(from), Some(to)) => engine::filter_by_date_range(&events, from, to),
        _ => events,
    };
    Ok(render::fuel_events(&events))
}

async fn dashboard(engine: &Engine, args: DashboardArgs) -> Result<String> {
    let filter = DashboardFilter {
        month: args.month,
        responsible: args.responsible,
        vehicle: args.vehicle,
    };
    let dashboard = engine.dashboard(&filter).await?;
    if args.json {
        let mut out = serde_json::to_string_pretty(&dashboard)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render::dashboard(&dashboard))
}

async fn export(engine: &Engine, args: ExportArgs, dir: &Path) -> Result<String> {
    let artifact = engine.export(args.from, args.to).await?;
    if artifact.is_empty() {
        tracing::info!(from = %args.from, to = %args.to, "nothing to export");
        return Ok(format!(
            "no fuel events between {} and {}, nothing exported\n",
            args.from, args.to
        ));
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.data)?;
    tracing::info!(path = %path.display(), rows = artifact.rows, "wrote export");
    Ok(format!(
        "exported {} fuel events to {}\n",
        artifact.rows,
        path.display()
    ))
}
