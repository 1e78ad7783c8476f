//! User database model

use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub hours: i32,
    pub temporary_advisor: bool,
}
