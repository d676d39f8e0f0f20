use fra_common::config::ValidationConfig;
use fra_common::types::ExtractedClaim;

/// Why two claims were judged to be the same claim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DuplicateReason {
    /// Identity text ("name village district") is nearly identical.
    FuzzyText { similarity: f64 },
    /// Coordinates lie within the duplicate radius.
    Coordinates { distance_m: f64 },
}

impl DuplicateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FuzzyText { .. } => "fuzzy_text",
            Self::Coordinates { .. } => "coordinates",
        }
    }
}

/// Normalized Levenshtein similarity in [0, 1], case-insensitive.
///
/// Identical strings score 1.0. Blank input on either side scores 0.0 so
/// that two claims with no identity text never match each other.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a, &b)
}

/// Compare two claims. Text is checked first, then coordinates.
pub fn duplicate_reason(
    a: &ExtractedClaim,
    b: &ExtractedClaim,
    config: &ValidationConfig,
) -> Option<DuplicateReason> {
    let similarity = text_similarity(&a.identity_text(), &b.identity_text());
    if similarity >= config.fuzzy_text_threshold {
        return Some(DuplicateReason::FuzzyText { similarity });
    }

    let distance_m = distance_between(a, b)?;
    (distance_m <= config.duplicate_radius_m).then_some(DuplicateReason::Coordinates { distance_m })
}

/// Great-circle distance in meters, when both claims carry coordinates.
pub fn distance_between(a: &ExtractedClaim, b: &ExtractedClaim) -> Option<f64> {
    let (lat1, lon1) = a.coordinates()?;
    let (lat2, lon2) = b.coordinates()?;
    Some(fra_geo::haversine_m(lat1, lon1, lat2, lon2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(name: &str, village: &str, district: &str) -> ExtractedClaim {
        ExtractedClaim {
            name: Some(name.into()),
            village: Some(village.into()),
            district: Some(district.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_similarity() {
        assert_eq!(text_similarity("Ramesh Badi", "ramesh badi"), 1.0);
        assert_eq!(text_similarity("", ""), 0.0);
        assert_eq!(text_similarity("abc", "  "), 0.0);
        assert!(text_similarity("Ramesh Kumar", "Sita Bai") < 0.5);
    }

    #[test]
    fn test_one_typo_is_duplicate() {
        let config = ValidationConfig::default();
        let a = claim("Ramesh Kumar", "Badi", "Mandla");
        let b = claim("Ramesh Kumaar", "Badi", "Mandla");
        assert!(matches!(
            duplicate_reason(&a, &b, &config),
            Some(DuplicateReason::FuzzyText { .. })
        ));
    }

    #[test]
    fn test_coordinates_duplicate() {
        let config = ValidationConfig::default();
        let mut a = claim("Ramesh Kumar", "Badi", "Mandla");
        let mut b = claim("Sita Bai", "Kosa", "Balaghat");
        a.lat = Some(22.5);
        a.lon = Some(80.4);
        b.lat = Some(22.5 + 5.0 / 111_194.9);
        b.lon = Some(80.4);

        let reason = duplicate_reason(&a, &b, &config).unwrap();
        assert_eq!(reason.as_str(), "coordinates");
    }

    #[test]
    fn test_empty_claims_are_not_duplicates() {
        let config = ValidationConfig::default();
        let a = ExtractedClaim::default();
        let b = ExtractedClaim::default();
        assert!(duplicate_reason(&a, &b, &config).is_none());
    }
}
