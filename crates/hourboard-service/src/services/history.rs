//! History service
//!
//! Reads and deletes archived events.

use chrono::Utc;
use futures::future::join_all;
use hourboard_core::{available_school_years, Capabilities, DomainError, SchoolYear, Session};
use tracing::{error, info, instrument, warn};

use crate::dto::{AvailableYearsResponse, DeleteHistoryResponse, HistoricalEventResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// History service
pub struct HistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HistoryService<'a> {
    /// Create a new HistoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Historical events, optionally narrowed to one school year
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list(
        &self,
        session: &Session,
        year: Option<&str>,
    ) -> ServiceResult<Vec<HistoricalEventResponse>> {
        session.require(Capabilities::VIEW_HISTORY)?;
        let events = match year {
            Some(label) => {
                let year = SchoolYear::parse(label)?;
                self.ctx.historical_repo().find_by_school_year(&year).await?
            }
            None => self.ctx.historical_repo().find_all().await?,
        };
        Ok(events.iter().map(HistoricalEventResponse::from).collect())
    }

    /// Labels for the year selector, always including the current year
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn available_years(&self, session: &Session) -> ServiceResult<AvailableYearsResponse> {
        session.require(Capabilities::VIEW_HISTORY)?;
        let current = SchoolYear::current(Utc::now().date_naive());
        let historical = self.ctx.historical_repo().find_all().await?;
        Ok(AvailableYearsResponse {
            years: available_school_years(&historical, &current),
            current: current.to_string(),
        })
    }

    /// Delete every historical event of `year`, or of all years
    ///
    /// Deletes run concurrently; any single failure fails the call with the
    /// count, and the deletes that succeeded stay applied.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn delete(
        &self,
        session: &Session,
        year: Option<&str>,
    ) -> ServiceResult<DeleteHistoryResponse> {
        session.require(Capabilities::MANAGE_HISTORY)?;
        let targets = match year {
            Some(label) => {
                let year = SchoolYear::parse(label)?;
                self.ctx.historical_repo().find_by_school_year(&year).await?
            }
            None => self.ctx.historical_repo().find_all().await?,
        };
        let total = targets.len();

        let results = join_all(
            targets
                .iter()
                .map(|event| self.ctx.historical_repo().delete(&event.id)),
        )
        .await;

        let mut failed = 0;
        for (event, result) in targets.iter().zip(results) {
            if let Err(e) = result {
                warn!(event_id = %event.id, error = %e, "Historical delete failed");
                failed += 1;
            }
        }
        if failed > 0 {
            error!(failed, total, "Historical delete incomplete");
            return Err(DomainError::PartialFailure {
                operation: "historical delete",
                failed,
                total,
            }
            .into());
        }

        info!(year = year.unwrap_or("all"), deleted = total, "Historical events deleted");
        Ok(DeleteHistoryResponse { deleted: total })
    }
}
