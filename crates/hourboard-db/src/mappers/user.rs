//! User model -> entity mapper

use hourboard_core::{DocumentId, DomainError, Role, User};

use super::from_db_count;
use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = Role::parse(&model.role).map_err(|e| DomainError::StoreError(e.to_string()))?;
        Ok(User {
            id: DocumentId::from(model.id),
            name: model.name,
            email: model.email,
            role,
            hours: from_db_count(model.hours)?,
            temporary_advisor: model.temporary_advisor,
        })
    }
}
