//! # hourboard-service
//!
//! Application layer containing the workflows, session handling, and DTOs.
//! Every workflow takes an explicit [`Session`](hourboard_core::Session)
//! and checks the role policy before touching the store.

pub mod dto;
pub mod services;

pub use dto::{
    leaderboard_entries, AddHoursRequest, AddHoursResponse, AdvisorRequestResponse, ApiResponse,
    ArchivalResponse, ArchiveRequest, AvailableYearsResponse, CategorySplitResponse,
    ChangeRoleRequest, CreateUserRequest, DashboardQuery, DashboardViewResponse,
    DeleteHistoryResponse, EventResponse, EventsQuery, HealthChecks, HealthResponse,
    HistoricalEventResponse, HistoryQuery, HoursInput, LeaderboardEntry, MemberDashboardResponse,
    ReadinessResponse, ReassignTagRequest, ResetHoursResponse, SessionResponse,
    ToggleTemporaryAdvisorRequest, UserResponse,
};
pub use services::{
    AdvisorRequestService, ArchivalService, DashboardService, EventService, HistoryService,
    HoursService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SessionService, UserService, WorkflowSettings,
};
