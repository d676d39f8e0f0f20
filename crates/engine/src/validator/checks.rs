//! Individual validation checks.
//!
//! Each check reads the batch and the index of the claim under test and
//! returns its finding without touching any other claim's result, so checks
//! compose in any order and can be tested on their own.

use fra_common::config::{BoundsConfig, ValidationConfig};
use fra_common::types::{is_present, ExtractedClaim};
use fra_geo::BoundingBox;

use super::similarity::{distance_between, duplicate_reason, DuplicateReason};

/// A required field that is absent, with its explanation.
#[derive(Clone, Debug, PartialEq)]
pub struct MissingField {
    pub field: &'static str,
    pub explanation: &'static str,
}

/// A field whose value breaks a range constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidField {
    pub field: &'static str,
    pub explanation: String,
}

/// Earlier claim in the batch that the claim under test resembles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DuplicateFinding {
    /// 0-based index into the batch.
    pub index: usize,
    pub reason: DuplicateReason,
}

/// Another claim lying within the cluster radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusterFinding {
    /// 0-based index into the batch.
    pub index: usize,
    pub distance_m: f64,
}

/// Required identity fields, in reporting order.
pub fn missing_fields(claim: &ExtractedClaim) -> Vec<MissingField> {
    let required = [
        ("name", &claim.name, "Claimant name is missing"),
        ("village", &claim.village, "Village name is missing"),
        ("district", &claim.district, "District is missing"),
        ("state", &claim.state, "State is missing"),
    ];

    required
        .into_iter()
        .filter(|(_, value, _)| !is_present(value))
        .map(|(field, _, explanation)| MissingField { field, explanation })
        .collect()
}

/// Latitude, longitude and area range checks. Absent values are not checked.
pub fn invalid_fields(claim: &ExtractedClaim) -> Vec<InvalidField> {
    let mut invalid = Vec::new();

    if let Some(lat) = claim.lat {
        if !(-90.0..=90.0).contains(&lat) {
            invalid.push(InvalidField {
                field: "lat",
                explanation: format!("Latitude {lat} is out of valid range (-90 to 90)"),
            });
        }
    }

    if let Some(lon) = claim.lon {
        if !(-180.0..=180.0).contains(&lon) {
            invalid.push(InvalidField {
                field: "lon",
                explanation: format!("Longitude {lon} is out of valid range (-180 to 180)"),
            });
        }
    }

    if let Some(extent) = claim.extent_ha {
        if extent < 0.0 {
            invalid.push(InvalidField {
                field: "extent_ha",
                explanation: format!("Area {extent} ha cannot be negative"),
            });
        }
    }

    invalid
}

/// First earlier claim (`j < index`) that resembles the claim at `index`.
///
/// Only earlier claims are considered, so of two look-alikes the first one
/// in document order is never flagged.
pub fn find_duplicate(
    batch: &[ExtractedClaim],
    index: usize,
    config: &ValidationConfig,
) -> Option<DuplicateFinding> {
    let claim = batch.get(index)?;
    batch[..index]
        .iter()
        .enumerate()
        .find_map(|(j, earlier)| {
            duplicate_reason(claim, earlier, config).map(|reason| DuplicateFinding { index: j, reason })
        })
}

/// First other claim, before or after `index`, within the cluster radius.
pub fn find_cluster_neighbor(
    batch: &[ExtractedClaim],
    index: usize,
    config: &ValidationConfig,
) -> Option<ClusterFinding> {
    let claim = batch.get(index)?;
    claim.coordinates()?;

    batch
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .find_map(|(j, other)| {
            distance_between(claim, other)
                .filter(|d| *d <= config.cluster_radius_m)
                .map(|distance_m| ClusterFinding { index: j, distance_m })
        })
}

/// Both coordinates present and outside the configured region.
pub fn is_out_of_bounds(claim: &ExtractedClaim, bounds: &BoundsConfig) -> bool {
    let region = BoundingBox::new(bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon);
    claim
        .coordinates()
        .is_some_and(|(lat, lon)| !region.contains(lat, lon))
}

pub fn is_low_confidence(claim: &ExtractedClaim, min_confidence: f64) -> bool {
    claim.extraction_confidence < min_confidence
}
