//! Archival run model -> entity mapper

use hourboard_core::{ArchivalRun, DomainError, SchoolYear};

use super::from_db_count;
use crate::models::ArchivalRunModel;

impl TryFrom<ArchivalRunModel> for ArchivalRun {
    type Error = DomainError;

    fn try_from(model: ArchivalRunModel) -> Result<Self, Self::Error> {
        Ok(ArchivalRun {
            school_year: SchoolYear::parse(&model.school_year)
                .map_err(|e| DomainError::StoreError(e.to_string()))?,
            started_at: model.started_at,
            events_archived: from_db_count(model.events_archived)?,
            events_archived_at: model.events_archived_at,
            hours_reset_at: model.hours_reset_at,
            completed_at: model.completed_at,
        })
    }
}
