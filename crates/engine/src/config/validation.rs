use fra_common::config::AtlasConfig;
use fra_geo::BoundingBox;

use super::loader::ConfigError;

/// Validate the complete pipeline configuration.
///
/// Collects every problem so a misconfigured deployment sees them all at once.
pub fn validate(config: &AtlasConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_parser(config, &mut errors);
    validate_extraction(config, &mut errors);
    validate_thresholds(config, &mut errors);
    validate_service(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}

fn validate_parser(config: &AtlasConfig, errors: &mut Vec<String>) {
    let p = &config.parser;

    if p.max_pages == Some(0) {
        errors.push("parser.max_pages must be > 0 when set".into());
    }
    if p.structured_marker.trim().is_empty() {
        errors.push("parser.structured_marker must not be empty".into());
    }
    if p.decode_timeout_ms == 0 {
        errors.push("parser.decode_timeout_ms must be > 0".into());
    }
}

fn validate_extraction(config: &AtlasConfig, errors: &mut Vec<String>) {
    let e = &config.extraction;

    if !(0.0..=1.0).contains(&e.structured_confidence) {
        errors.push("extraction.structured_confidence must be between 0.0 and 1.0".into());
    }
    if e.raw_text_chars == 0 {
        errors.push("extraction.raw_text_chars must be > 0".into());
    }
}

fn validate_thresholds(config: &AtlasConfig, errors: &mut Vec<String>) {
    let v = &config.validation;

    if !(0.0..=1.0).contains(&v.fuzzy_text_threshold) {
        errors.push("validation.fuzzy_text_threshold must be between 0.0 and 1.0".into());
    }
    if !(0.0..=1.0).contains(&v.min_confidence) {
        errors.push("validation.min_confidence must be between 0.0 and 1.0".into());
    }
    if v.duplicate_radius_m <= 0.0 {
        errors.push("validation.duplicate_radius_m must be > 0".into());
    }
    if v.cluster_radius_m <= 0.0 {
        errors.push("validation.cluster_radius_m must be > 0".into());
    }
    if v.cluster_radius_m < v.duplicate_radius_m {
        errors.push("validation.cluster_radius_m must be >= validation.duplicate_radius_m".into());
    }

    let b = &v.bounds;
    if b.name.trim().is_empty() {
        errors.push("validation.bounds.name must not be empty".into());
    }
    if !BoundingBox::new(b.min_lat, b.max_lat, b.min_lon, b.max_lon).is_well_formed() {
        errors.push("validation.bounds must be ordered and within lat ±90, lon ±180".into());
    }
}

fn validate_service(config: &AtlasConfig, errors: &mut Vec<String>) {
    let s = &config.service;

    if s.port == 0 {
        errors.push("service.port must be > 0".into());
    }
    if s.max_upload_bytes == 0 {
        errors.push("service.max_upload_bytes must be > 0".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&AtlasConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AtlasConfig::default();
        config.validation.fuzzy_text_threshold = 2.0;
        config.validation.cluster_radius_m = 5.0;
        config.service.port = 0;

        let msg = validate(&config).unwrap_err().to_string();
        assert!(msg.contains("fuzzy_text_threshold"));
        assert!(msg.contains("cluster_radius_m must be >="));
        assert!(msg.contains("service.port"));
    }

    #[test]
    fn test_inverted_bounds() {
        let mut config = AtlasConfig::default();
        config.validation.bounds.min_lat = 40.0;
        assert!(validate(&config).is_err());
    }
}
