//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] and orchestrates domain
//! functions from club-core against the store traits.

pub mod aggregation;
pub mod badge;
pub mod context;
pub mod delta;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregation::{AggregationOutcome, FailedUpsert, WeeklyAggregationService};
pub use badge::BadgeService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use delta::{DeltaService, DeltaSet};
pub use error::{ServiceError, ServiceResult};
