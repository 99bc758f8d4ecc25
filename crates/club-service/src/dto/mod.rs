//! Data transfer objects
//!
//! This module provides:
//! - Request DTOs with validation for caller input
//! - Response DTOs for serializing output
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{parse_week_start, ComputeWeeklyParams, ComputeWeeklyRequest, WeeklyDeltasQuery};

pub use responses::{
    ApiResponse, BadgeMetadataResponse, ComputeSummaryResponse, FailedMemberResponse,
    WeekResponse, WeeklyDeltaResponse, WeeklyReportResponse,
};
