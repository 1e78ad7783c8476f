//! Advisor request model -> entity mapper

use hourboard_core::{AdvisorRequest, DocumentId, RequestStatus};

use crate::models::AdvisorRequestModel;

impl From<AdvisorRequestModel> for AdvisorRequest {
    fn from(model: AdvisorRequestModel) -> Self {
        AdvisorRequest {
            id: DocumentId::from(model.id),
            user_id: DocumentId::from(model.user_id),
            user_name: model.user_name,
            status: RequestStatus::from_stored(&model.status),
            timestamp: model.requested_at,
        }
    }
}
