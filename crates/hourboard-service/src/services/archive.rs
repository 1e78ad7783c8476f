//! Archival service
//!
//! The school-year rollover: copy every live event into the historical
//! collection under a school-year label, delete the live event once its copy
//! is stored, then zero every user's hours.
//!
//! Progress is kept in an `ArchivalRun` marker keyed by the label. A failed
//! run can be repeated with the same label: copies are keyed by event id so
//! re-copying overwrites, and a reset that already finished is skipped. A
//! completed label is rejected.

use hourboard_core::{
    ArchivalRun, ArchivalStatus, Capabilities, DomainError, HistoricalEvent, SchoolYear, Session,
};
use tracing::{error, info, instrument, warn};

use crate::dto::ArchivalResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::hours::HoursService;

/// Archival service
pub struct ArchivalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ArchivalService<'a> {
    /// Create a new ArchivalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Archive all live events under `label` and reset hours
    ///
    /// # Errors
    /// - `MissingSchoolYear` for a blank label, before any write
    /// - `ArchiveAlreadyCompleted` when the label was fully archived before
    /// - `PartialFailure` when some events could not be moved (the hour
    ///   reset is then skipped) or some users could not be reset
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn archive_school_year(
        &self,
        session: &Session,
        label: &str,
    ) -> ServiceResult<ArchivalResponse> {
        session.require(Capabilities::RUN_ARCHIVAL)?;
        let school_year = SchoolYear::parse(label)?;

        let mut run = match self.ctx.archival_repo().find(&school_year).await? {
            Some(run) if run.status() == ArchivalStatus::Completed => {
                return Err(DomainError::ArchiveAlreadyCompleted(school_year.to_string()).into());
            }
            Some(run) => {
                info!(school_year = %school_year, status = %run.status(), "Resuming archival run");
                run
            }
            None => ArchivalRun::start(school_year.clone()),
        };
        self.ctx.archival_repo().save(&run).await?;

        let events = self.ctx.event_repo().find_all().await?;
        let total = events.len();
        let mut archived: u32 = 0;
        let mut failed = 0;

        for event in &events {
            let copy = HistoricalEvent::archive(event, &school_year);
            if let Err(e) = self.ctx.historical_repo().upsert(&copy).await {
                warn!(event_id = %event.id, error = %e, "Historical copy failed; event kept");
                failed += 1;
                continue;
            }
            match self.ctx.event_repo().delete(&event.id).await {
                Ok(()) => archived += 1,
                Err(e) => {
                    warn!(event_id = %event.id, error = %e, "Live event delete failed after copy");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            run.record_archived(archived);
            self.ctx.archival_repo().save(&run).await?;
            error!(
                school_year = %school_year,
                failed,
                total,
                "Archival incomplete; hour reset skipped"
            );
            return Err(DomainError::PartialFailure {
                operation: "archival",
                failed,
                total,
            }
            .into());
        }

        run.mark_events_archived(archived);
        self.ctx.archival_repo().save(&run).await?;
        info!(school_year = %school_year, archived, "Events archived");

        let users_reset = if run.hours_reset_done() {
            0
        } else {
            let count = HoursService::new(self.ctx).reset_procedure().await?;
            run.mark_hours_reset();
            self.ctx.archival_repo().save(&run).await?;
            count
        };

        run.mark_completed();
        self.ctx.archival_repo().save(&run).await?;

        info!(
            school_year = %school_year,
            events_archived = run.events_archived,
            users_reset,
            "School year archived"
        );

        Ok(ArchivalResponse {
            school_year: school_year.to_string(),
            events_archived: run.events_archived,
            users_reset,
            status: run.status().to_string(),
            completed_at: run.completed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::services::test_support::{
        advisor, builder, context, seed_event, seed_user, session, FlakyEventRepository,
        FlakyHistoricalEventRepository, FlakyUserRepository,
    };
    use hourboard_core::traits::{EventRepository, HistoricalEventRepository, UserRepository};
    use hourboard_core::{DocumentId, Role};
    use hourboard_db::{
        MemoryArchivalRunRepository, MemoryEventRepository, MemoryHistoricalEventRepository,
        MemoryUserRepository,
    };

    #[tokio::test]
    async fn test_archive_moves_events_and_zeroes_hours() {
        let ctx = context();
        seed_user(&ctx, "u1", Role::Member, 7).await;
        seed_user(&ctx, "u2", Role::Member, 3).await;
        seed_event(&ctx, "u1", "Tutoring", 7, "NHS", (2024, 10)).await;
        seed_event(&ctx, "u2", "Cleanup", 3, "Non-NHS", (2025, 4)).await;

        let response = ArchivalService::new(&ctx)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap();

        assert_eq!(response.events_archived, 2);
        assert_eq!(response.users_reset, 2);
        assert_eq!(response.status, "completed");

        assert!(ctx.event_repo().find_all().await.unwrap().is_empty());
        let year = SchoolYear::parse("2024-2025").unwrap();
        let history = ctx.historical_repo().find_by_school_year(&year).await.unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|h| h.school_year == year));
        for user in ctx.user_repo().find_all().await.unwrap() {
            assert_eq!(user.hours, 0);
        }
    }

    #[tokio::test]
    async fn test_blank_label_rejected_before_any_write() {
        let ctx = context();
        seed_user(&ctx, "u1", Role::Member, 7).await;
        seed_event(&ctx, "u1", "Tutoring", 7, "NHS", (2024, 10)).await;

        let err = ArchivalService::new(&ctx)
            .archive_school_year(&advisor(), "   ")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid school year");
        assert_eq!(err.status_code(), 400);

        assert_eq!(ctx.event_repo().find_all().await.unwrap().len(), 1);
        assert!(ctx.historical_repo().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_completed_label_is_rejected() {
        let ctx = context();
        let service = ArchivalService::new(&ctx);
        service.archive_school_year(&advisor(), "2024-2025").await.unwrap();

        seed_event(&ctx, "u1", "Late entry", 1, "NHS", (2025, 6)).await;
        let err = service
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
        assert_eq!(ctx.event_repo().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_copy_keeps_event_and_skips_reset_then_resumes() {
        let users = MemoryUserRepository::new();
        let events = MemoryEventRepository::new();
        let history = MemoryHistoricalEventRepository::new();
        let runs = MemoryArchivalRunRepository::new();

        let shared = || {
            builder()
                .user_repo(Arc::new(users.clone()))
                .event_repo(Arc::new(events.clone()))
                .archival_repo(Arc::new(runs.clone()))
        };
        let plain = shared().historical_repo(Arc::new(history.clone())).build().unwrap();

        seed_user(&plain, "u1", Role::Member, 9).await;
        let kept = seed_event(&plain, "u1", "Tutoring", 4, "NHS", (2024, 10)).await;
        seed_event(&plain, "u1", "Cleanup", 5, "NHS", (2024, 11)).await;

        let flaky = shared()
            .historical_repo(Arc::new(FlakyHistoricalEventRepository {
                inner: history.clone(),
                fail_upsert: vec![kept.id.clone()],
            }))
            .build()
            .unwrap();

        let err = ArchivalService::new(&flaky)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::PartialFailure { operation: "archival", failed: 1, total: 2 })
        ));

        let live = events.find_all().await.unwrap();
        assert_eq!(live, vec![kept.clone()]);
        assert_eq!(history.find_all().await.unwrap().len(), 1);
        let user = users.find_by_id(&DocumentId::from("u1")).await.unwrap().unwrap();
        assert_eq!(user.hours, 9);

        let response = ArchivalService::new(&plain)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap();
        assert_eq!(response.events_archived, 2);
        assert!(events.find_all().await.unwrap().is_empty());
        assert_eq!(history.find_all().await.unwrap().len(), 2);
        let user = users.find_by_id(&DocumentId::from("u1")).await.unwrap().unwrap();
        assert_eq!(user.hours, 0);
    }

    #[tokio::test]
    async fn test_failed_delete_after_copy_does_not_duplicate_history() {
        let users = MemoryUserRepository::new();
        let events = MemoryEventRepository::new();
        let history = MemoryHistoricalEventRepository::new();
        let runs = MemoryArchivalRunRepository::new();

        let shared = || {
            builder()
                .user_repo(Arc::new(users.clone()))
                .historical_repo(Arc::new(history.clone()))
                .archival_repo(Arc::new(runs.clone()))
        };
        let plain = shared().event_repo(Arc::new(events.clone())).build().unwrap();

        seed_user(&plain, "u1", Role::Member, 6).await;
        let stuck = seed_event(&plain, "u1", "Food drive", 6, "NHS", (2025, 2)).await;

        let flaky = shared()
            .event_repo(Arc::new(FlakyEventRepository {
                inner: events.clone(),
                fail_delete: vec![stuck.id.clone()],
            }))
            .build()
            .unwrap();

        let err = ArchivalService::new(&flaky)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::PartialFailure { operation: "archival", failed: 1, total: 1 })
        ));

        assert_eq!(events.find_all().await.unwrap(), vec![stuck.clone()]);
        let copies = history.find_all().await.unwrap();
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0].id, stuck.id);
        let user = users.find_by_id(&DocumentId::from("u1")).await.unwrap().unwrap();
        assert_eq!(user.hours, 6);

        let response = ArchivalService::new(&plain)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap();
        assert_eq!(response.status, "completed");
        assert!(events.find_all().await.unwrap().is_empty());
        let copies = history.find_all().await.unwrap();
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0].id, stuck.id);
    }

    #[tokio::test]
    async fn test_failed_reset_reports_partial_failure_and_resumes() {
        let users = MemoryUserRepository::new();
        let runs = MemoryArchivalRunRepository::new();

        let flaky = builder()
            .user_repo(Arc::new(FlakyUserRepository {
                inner: users.clone(),
                fail_set_hours: vec![DocumentId::from("u2")],
            }))
            .archival_repo(Arc::new(runs.clone()))
            .build()
            .unwrap();
        seed_user(&flaky, "u1", Role::Member, 2).await;
        seed_user(&flaky, "u2", Role::Member, 3).await;

        let err = ArchivalService::new(&flaky)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::PartialFailure { operation: "hour reset", failed: 1, total: 2 })
        ));

        let plain = builder()
            .user_repo(Arc::new(users.clone()))
            .archival_repo(Arc::new(runs.clone()))
            .build()
            .unwrap();
        let response = ArchivalService::new(&plain)
            .archive_school_year(&advisor(), "2024-2025")
            .await
            .unwrap();
        assert_eq!(response.users_reset, 2);
        assert_eq!(response.status, "completed");
    }

    #[tokio::test]
    async fn test_officer_cannot_archive() {
        let ctx = context();
        let err = ArchivalService::new(&ctx)
            .archive_school_year(&session("o1", Role::Officer), "2024-2025")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
    }
}
