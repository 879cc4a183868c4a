use clap::Parser;
use migration::{Migrator, MigratorTrait};

use crate::{
    cli::Cli,
    error::Result,
    settings::{Database, Settings},
};

mod cli;
mod commands;
mod error;
mod render;
mod settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::new(cli.config.as_deref())?;
    if let Some(path) = cli.database.clone() {
        settings.database = Database::Sqlite(path);
    }
    if let Some(level) = cli.log_level.clone() {
        settings.app.level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "abastecimento={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let db = connect_db(&settings.database).await?;
    let engine = engine::Engine::builder().database(db).build().await?;

    let outcome = commands::run(&engine, cli.command, &settings).await;
    engine.close().await?;

    match outcome {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(err) if err.is_rejection() => {
            tracing::warn!("rejected: {err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        Err(err) => Err(err),
    }
}

async fn connect_db(config: &Database) -> Result<sea_orm::DatabaseConnection> {
    let url = config.url();
    tracing::debug!(%url, "opening database");
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
