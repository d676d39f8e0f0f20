use serde::{Deserialize, Serialize};

/// Top-level pipeline configuration, deserialized from atlas.toml.
///
/// Every section falls back to its defaults, so a partial file (or none at
/// all, for library callers) yields the reference thresholds.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub parser: ParserConfig,
    pub extraction: ExtractionConfig,
    pub validation: ValidationConfig,
    pub service: ServiceConfig,
}

/// Document decoding and claim-block segmentation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Stop after this many pages. None processes every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    /// Fragments at or below this many characters are dropped while splitting.
    pub min_segment_chars: usize,
    /// An unsplit page longer than this is kept whole as a single block.
    pub whole_page_block_chars: usize,
    /// Label that introduces an embedded structured snippet.
    pub structured_marker: String,
    /// Upper bound on the decode step when run by the service.
    pub decode_timeout_ms: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_pages: None,
            min_segment_chars: 50,
            whole_page_block_chars: 100,
            structured_marker: "Structured-sample:".into(),
            decode_timeout_ms: 30_000,
        }
    }
}

/// Claim extraction parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fixed confidence for claims read from an embedded structured snippet.
    pub structured_confidence: f64,
    /// Characters of source text kept on each claim as `raw_text`.
    pub raw_text_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            structured_confidence: 0.95,
            raw_text_chars: 500,
        }
    }
}

/// Batch validation thresholds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Normalized Levenshtein similarity (0.0–1.0) at which identity text counts as a duplicate.
    pub fuzzy_text_threshold: f64,
    /// Two claims closer than this (meters) are coordinate duplicates.
    pub duplicate_radius_m: f64,
    /// Two claims closer than this (meters) are clustered.
    pub cluster_radius_m: f64,
    /// Claims below this extraction confidence are flagged.
    pub min_confidence: f64,
    /// Coordinates outside this box are flagged as out of state.
    pub bounds: BoundsConfig,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fuzzy_text_threshold: 0.9,
            duplicate_radius_m: 10.0,
            cluster_radius_m: 50.0,
            min_confidence: 0.5,
            bounds: BoundsConfig::default(),
        }
    }
}

/// Inclusive latitude/longitude box, in degrees.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Region name used in explanations.
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Rough bounding box of India.
impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            name: "India".into(),
            min_lat: 6.0,
            max_lat: 37.0,
            min_lon: 68.0,
            max_lon: 97.0,
        }
    }
}

/// HTTP service parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub port: u16,
    /// Request bodies larger than this are rejected before decoding.
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}
