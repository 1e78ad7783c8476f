//! Service layer error types

use hourboard_common::{domain_status_code, AppError};
use hourboard_core::DomainError;
use std::fmt;

/// Error returned by every workflow
#[derive(Debug)]
pub enum ServiceError {
    /// Rule violation, denial, missing record, or store failure
    Domain(DomainError),

    /// Auth or configuration failure surfaced through a workflow
    App(AppError),

    /// A `ServiceContext` was built without one of its collaborators
    MissingDependency(&'static str),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => e.fmt(f),
            Self::App(e) => e.fmt(f),
            Self::MissingDependency(name) => write!(f, "Missing dependency: {name}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::MissingDependency(_) => None,
        }
    }
}

impl ServiceError {
    /// The wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::App(e) => e.status_code(),
            Self::MissingDependency(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::MissingDependency(_) => "CONFIG_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::MissingDependency(name) => {
                AppError::Config(format!("missing dependency: {name}"))
            }
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
