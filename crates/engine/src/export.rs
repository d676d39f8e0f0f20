//! GeoJSON export of validated claims.

use chrono::{DateTime, Utc};
use fra_common::api::geojson::{Feature, FeatureCollection, Geometry};
use fra_common::types::ValidatedClaim;
use fra_common::{BatchId, Result};
use serde_json::{json, Value};

/// Build a FeatureCollection with one feature per claim, in batch order.
///
/// Feature ids are `"{timestamp_ms}-{batch_id}-{n}"` with 1-based `n`. Claims
/// without both coordinates get a `null` geometry but are still exported.
pub fn to_feature_collection(
    claims: &[ValidatedClaim],
    batch_id: BatchId,
    timestamp: DateTime<Utc>,
) -> Result<FeatureCollection> {
    let stamp = timestamp.timestamp_millis();

    let features = claims
        .iter()
        .enumerate()
        .map(|(index, validated)| -> Result<Feature> {
            let claim_id = format!("{stamp}-{batch_id}-{}", index + 1);
            let claim = &validated.claim;

            let properties = json!({
                "claim_id": claim_id,
                "name": claim.name,
                "village": claim.village,
                "district": claim.district,
                "state": claim.state,
                "extent_ha": claim.extent_ha,
                "validation": serde_json::to_value(&validated.validation)?,
                "structured_json_found": claim.structured_json_found,
                "extraction_confidence": claim.extraction_confidence,
            });

            let properties = match properties {
                Value::Object(map) => map,
                _ => serde_json::Map::new(),
            };

            Ok(Feature {
                kind: "Feature".into(),
                id: claim_id,
                properties,
                geometry: claim.coordinates().map(|(lat, lon)| Geometry::point(lat, lon)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection::new(features))
}
