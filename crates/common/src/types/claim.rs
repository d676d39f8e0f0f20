use serde::{Deserialize, Serialize};

/// Every field of a claim record that extraction can populate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    Name,
    Spouse,
    Father,
    Address,
    Village,
    Gp,
    Tehsil,
    District,
    State,
    NatureOfClaim,
    ExtentHa,
    Lat,
    Lon,
    Disputed,
    Evidence,
}

impl ClaimField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Spouse => "spouse",
            Self::Father => "father",
            Self::Address => "address",
            Self::Village => "village",
            Self::Gp => "gp",
            Self::Tehsil => "tehsil",
            Self::District => "district",
            Self::State => "state",
            Self::NatureOfClaim => "nature_of_claim",
            Self::ExtentHa => "extent_ha",
            Self::Lat => "lat",
            Self::Lon => "lon",
            Self::Disputed => "disputed",
            Self::Evidence => "evidence",
        }
    }

    /// Whether the field holds a real number rather than text.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::ExtentHa | Self::Lat | Self::Lon)
    }
}

impl std::fmt::Display for ClaimField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule populated a field during free-text extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: ClaimField,
    /// Label of the matcher that fired (e.g. "labeled_name").
    pub matcher: String,
}

/// A candidate forest-rights claim read from one snippet or text block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    /// Gram panchayat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tehsil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// IFR, CFR, CR, or free text from a structured snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature_of_claim: Option<String>,
    /// Claimed area in hectares.
    #[serde(default)]
    pub extent_ha: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disputed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    /// True when read from an embedded structured snippet rather than pattern matching.
    pub structured_json_found: bool,
    /// Leading characters of the source text.
    pub raw_text: String,
    /// Heuristic reliability in [0, 1].
    pub extraction_confidence: f64,
    /// Per-field provenance for pattern-matched claims.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_fields: Vec<FieldMatch>,
}

impl ExtractedClaim {
    /// Set a text field. Numeric fields are ignored.
    pub fn set_text(&mut self, field: ClaimField, value: String) {
        let slot = match field {
            ClaimField::Name => &mut self.name,
            ClaimField::Spouse => &mut self.spouse,
            ClaimField::Father => &mut self.father,
            ClaimField::Address => &mut self.address,
            ClaimField::Village => &mut self.village,
            ClaimField::Gp => &mut self.gp,
            ClaimField::Tehsil => &mut self.tehsil,
            ClaimField::District => &mut self.district,
            ClaimField::State => &mut self.state,
            ClaimField::NatureOfClaim => &mut self.nature_of_claim,
            ClaimField::Disputed => &mut self.disputed,
            ClaimField::Evidence => &mut self.evidence,
            ClaimField::ExtentHa | ClaimField::Lat | ClaimField::Lon => return,
        };
        *slot = Some(value);
    }

    /// Set a numeric field. Text fields are ignored.
    pub fn set_number(&mut self, field: ClaimField, value: f64) {
        match field {
            ClaimField::ExtentHa => self.extent_ha = Some(value),
            ClaimField::Lat => self.lat = Some(value),
            ClaimField::Lon => self.lon = Some(value),
            _ => {}
        }
    }

    /// Both coordinates, when present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Identity text used for fuzzy duplicate matching: "name village district".
    pub fn identity_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name.as_deref().unwrap_or(""),
            self.village.as_deref().unwrap_or(""),
            self.district.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Whether an optional text field counts as present (non-blank).
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
