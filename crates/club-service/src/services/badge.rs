//! Badge metadata service

use club_core::analytics::{all_badge_metadata, badge_metadata};

use crate::dto::BadgeMetadataResponse;

/// Read-only access to the badge registry
#[derive(Debug, Default, Clone, Copy)]
pub struct BadgeService;

impl BadgeService {
    pub fn new() -> Self {
        Self
    }

    /// Every known badge in canonical order
    pub fn list(&self) -> Vec<BadgeMetadataResponse> {
        all_badge_metadata().iter().map(BadgeMetadataResponse::from).collect()
    }

    /// Metadata for one id; unknown ids get the generic entry
    pub fn get(&self, id: &str) -> BadgeMetadataResponse {
        BadgeMetadataResponse::from(&badge_metadata(id))
    }
}
