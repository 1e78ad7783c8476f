//! Event model -> entity mapper

use hourboard_core::{DocumentId, DomainError, Event};

use super::from_db_count;
use crate::models::EventModel;

impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        Ok(Event {
            id: DocumentId::from(model.id),
            user_id: DocumentId::from(model.user_id),
            name: model.name,
            hours: model.hours.map(from_db_count).transpose()?,
            tag: model.tag,
            date: model.date,
        })
    }
}
