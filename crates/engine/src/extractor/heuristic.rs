use fra_common::types::{ExtractedClaim, FieldMatch};

use super::rules::{FieldRule, FieldValue};
use super::truncate_chars;

/// Build a claim from free text by running each field rule in order.
///
/// Confidence is the fraction of scored rules that found a value.
pub fn extract_from_text(text: &str, rules: &[FieldRule], raw_text_chars: usize) -> ExtractedClaim {
    let mut claim = ExtractedClaim {
        structured_json_found: false,
        raw_text: truncate_chars(text, raw_text_chars),
        ..Default::default()
    };

    let mut attempted = 0usize;
    let mut found = 0usize;

    for rule in rules {
        if rule.scored {
            attempted += 1;
        }

        let Some((value, matcher)) = rule.evaluate(text) else {
            continue;
        };

        match value {
            FieldValue::Text(s) => claim.set_text(rule.field, s),
            FieldValue::Number(n) => claim.set_number(rule.field, n),
        }
        claim.matched_fields.push(FieldMatch {
            field: rule.field,
            matcher: matcher.to_string(),
        });

        if rule.scored {
            found += 1;
        }
    }

    claim.extraction_confidence = if attempted == 0 {
        0.0
    } else {
        found as f64 / attempted as f64
    };

    claim
}
