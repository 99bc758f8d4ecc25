//! # club-service
//!
//! Application layer: the delta calculator, the weekly aggregation
//! orchestrator, badge metadata lookup and the DTOs they return.

pub mod dto;
pub mod services;

pub use services::{
    AggregationOutcome, BadgeService, DeltaService, DeltaSet, FailedUpsert, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, WeeklyAggregationService,
};
