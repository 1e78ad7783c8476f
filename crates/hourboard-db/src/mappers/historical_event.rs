//! Historical event model -> entity mapper

use hourboard_core::{DocumentId, DomainError, HistoricalEvent, SchoolYear};

use super::from_db_count;
use crate::models::HistoricalEventModel;

impl TryFrom<HistoricalEventModel> for HistoricalEvent {
    type Error = DomainError;

    fn try_from(model: HistoricalEventModel) -> Result<Self, Self::Error> {
        Ok(HistoricalEvent {
            id: DocumentId::from(model.id),
            user_id: DocumentId::from(model.user_id),
            name: model.name,
            hours: model.hours.map(from_db_count).transpose()?,
            tag: model.tag,
            date: model.date,
            school_year: SchoolYear::parse(&model.school_year)
                .map_err(|e| DomainError::StoreError(e.to_string()))?,
        })
    }
}
