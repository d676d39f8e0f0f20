use fra_common::types::{BatchSummary, ValidatedClaim};

/// Aggregate counts over a validated batch.
pub fn summarize(claims: &[ValidatedClaim]) -> BatchSummary {
    claims.iter().fold(
        BatchSummary {
            total: claims.len(),
            ..Default::default()
        },
        |mut summary, c| {
            let v = &c.validation;
            if v.is_valid() {
                summary.valid += 1;
            }
            if !v.invalid_fields.is_empty() {
                summary.invalid += 1;
            }
            if c.claim.coordinates().is_none() {
                summary.missing_coordinates += 1;
            }
            if v.duplicate {
                summary.duplicates += 1;
            }
            if v.cluster_flag {
                summary.clustered += 1;
            }
            summary
        },
    )
}
