use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::geojson::FeatureCollection;
use crate::ids::BatchId;
use crate::types::{BatchSummary, PageStatus, ValidatedClaim};

/// POST /documents response: one processed batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub batch_id: BatchId,
    pub processed_at: DateTime<Utc>,
    pub pages: Vec<PageReport>,
    pub claims: Vec<ValidatedClaim>,
    pub summary: BatchSummary,
    pub geojson: FeatureCollection,
}

/// Per-page outcome, without the page text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageReport {
    pub page_number: u32,
    pub status: PageStatus,
    pub chars: usize,
    pub embedded_json: usize,
    pub claim_blocks: usize,
}

/// Error body for rejected documents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
