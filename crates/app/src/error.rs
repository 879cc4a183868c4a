use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Engine(#[from] engine::EngineError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no active vehicles registered, register one with `vehicle add` first")]
    NoActiveVehicles,
}

impl AppError {
    /// Errors the operator can fix by changing their input. The command is
    /// rejected and the store is left as it was.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Engine(err) => err.is_rejection(),
            Self::NoActiveVehicles => true,
            _ => false,
        }
    }
}
