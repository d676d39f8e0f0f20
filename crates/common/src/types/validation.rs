use serde::{Deserialize, Serialize};

use super::ExtractedClaim;

/// Findings attached to one claim by the batch validator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimValidation {
    /// Required fields that are absent, in check order.
    pub missing_fields: Vec<String>,
    /// Fields whose value violates a range constraint.
    pub invalid_fields: Vec<String>,
    /// Resembles an earlier claim in the batch.
    pub duplicate: bool,
    /// 1-based index of the earlier claim this one resembles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<usize>,
    /// Lies within the cluster radius of another claim in the batch.
    pub cluster_flag: bool,
    /// 1-based index of the first claim found within the cluster radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clustered_with: Option<usize>,
    /// Coordinates fall outside the configured bounding box.
    pub out_of_state: bool,
    pub low_confidence: bool,
    /// One human-readable line per finding, in the order the checks ran.
    pub explanations: Vec<String>,
}

impl ClaimValidation {
    /// "Valid" ignores clustering and out-of-state findings.
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty()
            && self.invalid_fields.is_empty()
            && !self.duplicate
            && !self.low_confidence
    }
}

/// An extracted claim together with its findings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidatedClaim {
    #[serde(flatten)]
    pub claim: ExtractedClaim,
    pub validation: ClaimValidation,
}

/// Aggregate counts over a validated batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub missing_coordinates: usize,
    pub duplicates: usize,
    pub clustered: usize,
}
