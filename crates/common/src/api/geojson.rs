use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GeoJSON FeatureCollection of claim points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".into(),
            features,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub properties: serde_json::Map<String, Value>,
    /// None when the claim lacks either coordinate.
    pub geometry: Option<Geometry>,
}

/// Point geometry. Coordinates are `[lon, lat]` per RFC 7946.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(lat: f64, lon: f64) -> Self {
        Self {
            kind: "Point".into(),
            coordinates: [lon, lat],
        }
    }
}
