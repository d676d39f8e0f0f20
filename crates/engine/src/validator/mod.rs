//! Batch-aware claim validation.
//!
//! Every claim is annotated, never dropped. Duplicate detection looks only at
//! earlier claims; cluster detection looks at the whole batch in both
//! directions, so results depend on batch order but not on validation order.

pub mod checks;
mod similarity;
mod summary;

pub use similarity::{duplicate_reason, text_similarity, DuplicateReason};
pub use summary::summarize;

use fra_common::config::ValidationConfig;
use fra_common::types::{ClaimValidation, ExtractedClaim, ValidatedClaim};

/// Validates claim batches against configured thresholds.
#[derive(Clone, Debug, Default)]
pub struct ClaimValidator {
    config: ValidationConfig,
}

impl ClaimValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Annotate every claim in the batch, preserving order.
    pub fn validate_claims(&self, claims: &[ExtractedClaim]) -> Vec<ValidatedClaim> {
        let validated: Vec<ValidatedClaim> = (0..claims.len())
            .map(|index| ValidatedClaim {
                claim: claims[index].clone(),
                validation: self.validate_claim(claims, index),
            })
            .collect();

        for v in &validated {
            let findings = &v.validation;
            if !findings.missing_fields.is_empty() {
                metrics::counter!("validator.flags", "flag" => "missing_fields").increment(1);
            }
            if !findings.invalid_fields.is_empty() {
                metrics::counter!("validator.flags", "flag" => "invalid_fields").increment(1);
            }
            if findings.cluster_flag {
                metrics::counter!("validator.flags", "flag" => "cluster").increment(1);
            }
            if findings.out_of_state {
                metrics::counter!("validator.flags", "flag" => "out_of_state").increment(1);
            }
            if findings.low_confidence {
                metrics::counter!("validator.flags", "flag" => "low_confidence").increment(1);
            }
        }

        tracing::debug!(claims = validated.len(), "Batch validated");
        validated
    }

    /// Findings for the claim at `index`, running every check in order.
    pub fn validate_claim(&self, batch: &[ExtractedClaim], index: usize) -> ClaimValidation {
        let mut result = ClaimValidation::default();
        let Some(claim) = batch.get(index) else {
            return result;
        };

        for missing in checks::missing_fields(claim) {
            result.missing_fields.push(missing.field.to_string());
            result.explanations.push(missing.explanation.to_string());
        }

        for invalid in checks::invalid_fields(claim) {
            result.invalid_fields.push(invalid.field.to_string());
            result.explanations.push(invalid.explanation);
        }

        if let Some(dup) = checks::find_duplicate(batch, index, &self.config) {
            metrics::counter!("validator.flags", "flag" => "duplicate", "reason" => dup.reason.as_str())
                .increment(1);
            tracing::debug!(claim = index + 1, of = dup.index + 1, reason = ?dup.reason, "Possible duplicate");
            result.duplicate = true;
            result.duplicate_of = Some(dup.index + 1);
            result
                .explanations
                .push(format!("Possible duplicate of claim {}", dup.index + 1));
        }

        if let Some(neighbor) = checks::find_cluster_neighbor(batch, index, &self.config) {
            tracing::debug!(
                claim = index + 1,
                with = neighbor.index + 1,
                distance_m = neighbor.distance_m,
                "Clustered claim"
            );
            result.cluster_flag = true;
            result.clustered_with = Some(neighbor.index + 1);
            result.explanations.push(format!(
                "Clustered with claim {} (within {}m)",
                neighbor.index + 1,
                self.config.cluster_radius_m
            ));
        }

        if checks::is_out_of_bounds(claim, &self.config.bounds) {
            result.out_of_state = true;
            result.explanations.push(format!(
                "Coordinates appear to be outside {}",
                self.config.bounds.name
            ));
        }

        if checks::is_low_confidence(claim, self.config.min_confidence) {
            result.low_confidence = true;
            result.explanations.push(format!(
                "Low extraction confidence ({:.0}%)",
                claim.extraction_confidence * 100.0
            ));
        }

        result
    }
}

/// Validate a batch with the default thresholds.
pub fn validate_claims(claims: &[ExtractedClaim]) -> Vec<ValidatedClaim> {
    ClaimValidator::default().validate_claims(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_claims;
    use fra_common::types::{PageStatus, ParsedPage};
    use serde_json::json;

    fn claim(name: &str, lat: f64, lon: f64) -> ExtractedClaim {
        ExtractedClaim {
            name: Some(name.into()),
            village: Some("Badi".into()),
            district: Some("Mandla".into()),
            state: Some("Madhya Pradesh".into()),
            lat: Some(lat),
            lon: Some(lon),
            extraction_confidence: 0.95,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_snippet_claim_is_clean() {
        let pages = vec![ParsedPage {
            page_number: 1,
            status: PageStatus::Extracted,
            text: String::new(),
            embedded_json: vec![json!({"name": "A", "village": "B", "district": "C", "state": "D"})],
            claim_blocks: vec![],
        }];
        let validated = validate_claims(&extract_claims(&pages));

        assert_eq!(validated.len(), 1);
        let v = &validated[0].validation;
        assert!(v.missing_fields.is_empty());
        assert!(!v.duplicate);
        assert!(v.is_valid());
    }

    #[test]
    fn test_duplicate_refers_to_first() {
        let batch = vec![
            claim("Ramesh Kumar", 22.5, 80.4),
            claim("Ramesh Kumar", 22.5 + 3.0 / 111_194.9, 80.4),
        ];
        let validated = validate_claims(&batch);

        assert!(!validated[0].validation.duplicate);
        assert!(validated[1].validation.duplicate);
        assert_eq!(validated[1].validation.duplicate_of, Some(1));
        assert!(validated[1]
            .validation
            .explanations
            .contains(&"Possible duplicate of claim 1".to_string()));
    }

    #[test]
    fn test_cluster_regardless_of_order() {
        let a = claim("Ramesh Kumar", 22.5, 80.4);
        let b = claim("Sita Bai", 22.5 + 30.0 / 111_194.9, 80.4);

        for batch in [vec![a.clone(), b.clone()], vec![b, a]] {
            let validated = validate_claims(&batch);
            assert!(validated.iter().all(|v| v.validation.cluster_flag));
            assert_eq!(validated[0].validation.clustered_with, Some(2));
            assert_eq!(validated[1].validation.clustered_with, Some(1));
        }
    }

    #[test]
    fn test_out_of_state() {
        let validated = validate_claims(&[claim("A", 40.0, 100.0), claim("B", 20.0, 80.0)]);
        assert!(validated[0].validation.out_of_state);
        assert!(!validated[1].validation.out_of_state);
        assert!(validated[0]
            .validation
            .explanations
            .contains(&"Coordinates appear to be outside India".to_string()));
    }

    #[test]
    fn test_explanation_order() {
        let mut bad = ExtractedClaim {
            lat: Some(91.0),
            lon: Some(80.0),
            extraction_confidence: 0.25,
            ..Default::default()
        };
        bad.extent_ha = Some(-2.0);
        let validated = validate_claims(&[bad]);
        let v = &validated[0].validation;

        assert_eq!(v.missing_fields, vec!["name", "village", "district", "state"]);
        assert_eq!(v.invalid_fields, vec!["lat", "extent_ha"]);
        assert!(v.out_of_state);
        assert!(v.low_confidence);
        assert_eq!(v.explanations.len(), 8);
        assert_eq!(v.explanations[0], "Claimant name is missing");
        assert_eq!(v.explanations[4], "Latitude 91 is out of valid range (-90 to 90)");
        assert_eq!(v.explanations[7], "Low extraction confidence (25%)");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let batch = vec![
            claim("Ramesh Kumar", 22.5, 80.4),
            claim("Ramesh Kumar", 22.5, 80.4),
            claim("Sita Bai", 40.0, 100.0),
        ];
        let first: Vec<_> = validate_claims(&batch).into_iter().map(|v| v.validation).collect();
        let second: Vec<_> = validate_claims(&batch).into_iter().map(|v| v.validation).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cluster_radius_in_explanation() {
        let validator = ClaimValidator::new(ValidationConfig {
            cluster_radius_m: 75.0,
            ..Default::default()
        });
        let batch = vec![claim("A", 22.5, 80.4), claim("Zed", 22.5 + 60.0 / 111_194.9, 80.4)];
        let v = validator.validate_claim(&batch, 0);
        assert!(v
            .explanations
            .contains(&"Clustered with claim 2 (within 75m)".to_string()));
    }
}
