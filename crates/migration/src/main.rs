//! Standalone schema tool.
//!
//! `migration [up|down|fresh|status] [DATABASE_URL]`. The URL falls back to
//! the `DATABASE_URL` variable and then to `./abastecimento.db`.

use std::str::FromStr;

use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_URL: &str = "sqlite:./abastecimento.db?mode=rwc";

enum Action {
    Up,
    Down,
    Fresh,
    Status,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "fresh" => Ok(Self::Fresh),
            "status" => Ok(Self::Status),
            other => Err(format!("unknown action: {other}")),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = std::env::args().skip(1);
    let action = match args.next().as_deref().unwrap_or("up").parse::<Action>() {
        Ok(action) => action,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: migration [up|down|fresh|status] [DATABASE_URL]");
            std::process::exit(2);
        }
    };
    let url = args
        .next()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    let db = Database::connect(&url).await?;
    let outcome = match action {
        Action::Up => migration::Migrator::up(&db, None).await,
        Action::Down => migration::Migrator::down(&db, None).await,
        Action::Fresh => migration::Migrator::fresh(&db).await,
        Action::Status => migration::Migrator::status(&db).await,
    };
    db.close().await?;
    outcome?;
    Ok(())
}
