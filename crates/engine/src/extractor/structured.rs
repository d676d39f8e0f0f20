use fra_common::config::ExtractionConfig;
use fra_common::types::{ClaimField, ExtractedClaim};
use serde_json::Value;

use super::rules::parse_leading_float;
use super::truncate_chars;

/// Accepted key names per field, in priority order.
const ALIASES: &[(ClaimField, &[&str])] = &[
    (ClaimField::Name, &["name", "claimant", "holder_name"]),
    (ClaimField::Spouse, &["spouse"]),
    (ClaimField::Father, &["father", "guardian"]),
    (ClaimField::Address, &["address"]),
    (ClaimField::Village, &["village", "village_name"]),
    (ClaimField::Gp, &["gp", "gram_panchayat"]),
    (ClaimField::Tehsil, &["tehsil", "block"]),
    (ClaimField::District, &["district"]),
    (ClaimField::State, &["state"]),
    (ClaimField::NatureOfClaim, &["nature_of_claim", "claim_type"]),
    (ClaimField::ExtentHa, &["extent_ha", "area_ha", "area"]),
    (ClaimField::Lat, &["lat", "latitude"]),
    (ClaimField::Lon, &["lon", "longitude"]),
    (ClaimField::Disputed, &["disputed"]),
    (ClaimField::Evidence, &["evidence"]),
];

/// Build a claim from an embedded key-value snippet.
///
/// Structured data is trusted as-is: no pattern matching, fixed confidence.
/// `raw_text` comes from the page the snippet was found on.
pub fn extract_from_json(
    snippet: &Value,
    page_text: &str,
    config: &ExtractionConfig,
) -> ExtractedClaim {
    let mut claim = ExtractedClaim {
        structured_json_found: true,
        raw_text: truncate_chars(page_text, config.raw_text_chars),
        extraction_confidence: config.structured_confidence,
        ..Default::default()
    };

    let Some(obj) = snippet.as_object() else {
        return claim;
    };

    for (field, keys) in ALIASES {
        // First alias carrying a usable value wins.
        let Some(value) = keys
            .iter()
            .filter_map(|k| obj.get(*k))
            .find(|v| is_usable(v))
        else {
            continue;
        };

        if field.is_numeric() {
            // Coercion failure leaves the field unset; later aliases are not consulted.
            if let Some(n) = to_number(value) {
                claim.set_number(*field, n);
            }
        } else if let Some(text) = to_text(value) {
            claim.set_text(*field, text);
        }
    }

    claim
}

fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_float(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(value: Value) -> ExtractedClaim {
        extract_from_json(&value, "page text", &ExtractionConfig::default())
    }

    #[test]
    fn test_aliases() {
        let claim = extract(json!({
            "holder_name": "Sita Bai",
            "guardian": "Ram Lal",
            "village_name": "Kosa",
            "block": "Bichhiya",
            "district": "Mandla",
            "state": "Madhya Pradesh",
            "claim_type": "IFR",
            "latitude": "22.61",
            "longitude": 80.37,
            "area": "1.5 ha",
            "disputed": false
        }));

        assert_eq!(claim.name.as_deref(), Some("Sita Bai"));
        assert_eq!(claim.father.as_deref(), Some("Ram Lal"));
        assert_eq!(claim.village.as_deref(), Some("Kosa"));
        assert_eq!(claim.tehsil.as_deref(), Some("Bichhiya"));
        assert_eq!(claim.nature_of_claim.as_deref(), Some("IFR"));
        assert_eq!(claim.lat, Some(22.61));
        assert_eq!(claim.lon, Some(80.37));
        assert_eq!(claim.extent_ha, Some(1.5));
        assert_eq!(claim.disputed.as_deref(), Some("false"));
        assert!(claim.structured_json_found);
        assert_eq!(claim.extraction_confidence, 0.95);
        assert_eq!(claim.raw_text, "page text");
        assert!(claim.matched_fields.is_empty());
    }

    #[test]
    fn test_primary_alias_wins() {
        let claim = extract(json!({"claimant": "B", "name": "A", "holder_name": "C"}));
        assert_eq!(claim.name.as_deref(), Some("A"));
    }

    #[test]
    fn test_blank_alias_falls_through() {
        let claim = extract(json!({"name": "  ", "claimant": "Mohan"}));
        assert_eq!(claim.name.as_deref(), Some("Mohan"));
    }

    #[test]
    fn test_unparseable_number_is_none() {
        let claim = extract(json!({"lat": "north", "latitude": 22.5, "extent_ha": [1]}));
        assert_eq!(claim.lat, None);
        assert_eq!(claim.extent_ha, None);
        // Confidence is fixed regardless of what was found.
        assert_eq!(claim.extraction_confidence, 0.95);
    }

    #[test]
    fn test_non_object_snippet() {
        let claim = extract(json!(["name", "village"]));
        assert!(claim.name.is_none());
        assert!(claim.structured_json_found);
    }
}
