use chrono::NaiveDate;

use crate::{Dashboard, DashboardFilter, ExportArtifact, ResultEngine};

use super::Engine;

impl Engine {
    /// Load every fuel event and aggregate the ones matching `filter`.
    pub async fn dashboard(&self, filter: &DashboardFilter) -> ResultEngine<Dashboard> {
        let events = self.fuel_events().await?;
        Ok(Dashboard::build(&events, filter))
    }

    /// CSV of the fuel events dated within `[start, end]`.
    pub async fn export(&self, start: NaiveDate, end: NaiveDate) -> ResultEngine<ExportArtifact> {
        let events = self.fuel_events().await?;
        let artifact = ExportArtifact::build(&events, start, end)?;
        tracing::info!(file = %artifact.file_name, rows = artifact.rows, "built export");
        Ok(artifact)
    }
}
