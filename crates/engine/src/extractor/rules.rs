use fra_common::types::ClaimField;
use once_cell::sync::Lazy;
use regex::Regex;

const LABEL_GAP: [char; 3] = [' ', '\t', '_'];

/// One named pattern for a field. Group 1 captures the value.
#[derive(Clone, Debug)]
pub struct Matcher {
    pub label: &'static str,
    pattern: Regex,
}

impl Matcher {
    pub fn new(label: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label,
            pattern: Regex::new(pattern)?,
        })
    }

    /// The first capture in `text`, if the pattern matches.
    ///
    /// When the capture ran into the next label on the same line
    /// ("Ramesh Kumar Village: Badi"), that label word is dropped. A capture
    /// that is only a label comes back empty.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        let m = self.pattern.captures(text)?.get(1)?;
        let value = m.as_str();

        let rest = text[m.end()..].trim_start_matches(LABEL_GAP);
        if !rest.starts_with(':') {
            return Some(value);
        }

        Some(match value.rfind(LABEL_GAP) {
            Some(cut) => value[..cut].trim_end_matches(LABEL_GAP),
            None => "",
        })
    }
}

/// A value read by a rule.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// Ordered matchers for one claim field, most specific first.
#[derive(Clone, Debug)]
pub struct FieldRule {
    pub field: ClaimField,
    /// Counts toward extraction confidence.
    pub scored: bool,
    pub matchers: Vec<Matcher>,
    /// Canonicalizes a matched text value.
    pub normalize: Option<fn(&str) -> String>,
}

impl FieldRule {
    fn new(field: ClaimField, scored: bool, matchers: &[(&'static str, &str)]) -> Self {
        Self {
            field,
            scored,
            matchers: matchers
                .iter()
                .map(|&(label, pattern)| Matcher::new(label, pattern).expect("valid field pattern"))
                .collect(),
            normalize: None,
        }
    }

    fn normalized(mut self, f: fn(&str) -> String) -> Self {
        self.normalize = Some(f);
        self
    }

    /// Try each matcher in order and return the first usable value with the
    /// label of the matcher that produced it.
    ///
    /// A numeric capture that does not parse is not a match; the next
    /// matcher gets a chance.
    pub fn evaluate(&self, text: &str) -> Option<(FieldValue, &'static str)> {
        for matcher in &self.matchers {
            let Some(raw) = matcher.capture(text).map(str::trim) else {
                continue;
            };

            if self.field.is_numeric() {
                if let Some(n) = parse_leading_float(raw) {
                    return Some((FieldValue::Number(n), matcher.label));
                }
            } else if !raw.is_empty() {
                let value = match self.normalize {
                    Some(f) => f(raw),
                    None => collapse_whitespace(raw),
                };
                return Some((FieldValue::Text(value), matcher.label));
            }
        }
        None
    }
}

// Words inside a captured value are joined by horizontal whitespace only, so
// a value never runs into the label on the next line.
const TITLE_WORDS_1_3: &str = r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3})";
const TITLE_WORDS_1_2: &str = r"([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,2})";

/// Field rules for free-text claim blocks.
///
/// Seven fields are scored: name, spouse, father, village, district, state
/// and extent_ha. The rest are read when present but do not affect confidence.
pub static DEFAULT_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new(
            ClaimField::Name,
            true,
            &[
                (
                    "name_of_claimant",
                    format!(r"(?i)name[ \t]+of[ \t]+(?:the[ \t]+)?claimant(?:\(s\))?[\s:]+{TITLE_WORDS_1_3}").as_str(),
                ),
                (
                    "labeled_name",
                    format!(r"(?i)\b(?:name|claimant|holder)[\s:]+{TITLE_WORDS_1_3}").as_str(),
                ),
                ("claimant_token", r"(?i)Claimant[_\s]+(\w+(?:[_ \t]+\w+)*)"),
            ],
        ),
        FieldRule::new(
            ClaimField::Spouse,
            true,
            &[(
                "labeled_spouse",
                format!(r"(?i)\b(?:spouse|wife|husband)[\s:]+{TITLE_WORDS_1_2}").as_str(),
            )],
        ),
        FieldRule::new(
            ClaimField::Father,
            true,
            &[(
                "labeled_father",
                format!(r"(?i)(?:\bfather|\bguardian|\bs/o|\bd/o)[\s:]+{TITLE_WORDS_1_2}").as_str(),
            )],
        ),
        FieldRule::new(
            ClaimField::Village,
            true,
            &[
                (
                    "labeled_village",
                    r"(?i)village[\s:_]+([A-Z][a-z]+(?:[_ \t]+[A-Z\d][a-z\d]+)*)",
                ),
                ("village_token", r"(?i)Village[_\s]+(\w+(?:[_ \t]+\w+)*)"),
            ],
        ),
        FieldRule::new(
            ClaimField::District,
            true,
            &[
                (
                    "labeled_district",
                    r"(?i)district[\s:_]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
                ),
                ("district_token", r"(?i)District[_\s]+(\w+(?:[_ \t]+\w+)*)"),
            ],
        ),
        FieldRule::new(
            ClaimField::State,
            true,
            &[(
                "known_state",
                r"(?i)(Madhya\s+Pradesh|Maharashtra|Odisha|Chhattisgarh|Jharkhand|Andhra\s+Pradesh|Karnataka|Tamil\s+Nadu)",
            )],
        ),
        FieldRule::new(
            ClaimField::ExtentHa,
            true,
            &[
                ("labeled_extent", r"(?i)extent[\s:]+(\d+\.?\d*)\s*(?:ha|hectare)"),
                ("labeled_area", r"(?i)area[\s:]+(\d+\.?\d*)"),
                ("hectare_suffix", r"(?i)(\d+\.?\d+)\s*ha"),
            ],
        ),
        FieldRule::new(
            ClaimField::Lat,
            false,
            &[
                ("labeled_lat", r"(?i)lat(?:itude)?[\s:]+(\d{1,2}\.\d{4,})"),
                ("hemisphere_lat", r"(?i)(\d{1,2}\.\d{4,})[°\s]*[NS]"),
            ],
        ),
        FieldRule::new(
            ClaimField::Lon,
            false,
            &[
                ("labeled_lon", r"(?i)lon(?:gitude)?[\s:]+(\d{1,3}\.\d{4,})"),
                ("hemisphere_lon", r"(?i)(\d{1,3}\.\d{4,})[°\s]*[EW]"),
            ],
        ),
        FieldRule::new(
            ClaimField::Tehsil,
            false,
            &[(
                "labeled_tehsil",
                r"(?i)\b(?:tehsil|taluka|block)[\s:]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
            )],
        ),
        FieldRule::new(
            ClaimField::Gp,
            false,
            &[(
                "labeled_gp",
                r"(?i)\b(?:gram[ \t]+panchayat|GP)\b[\s:]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)",
            )],
        ),
        FieldRule::new(
            ClaimField::NatureOfClaim,
            false,
            &[(
                "claim_category",
                r"(?i)\b(IFR|CFR|CR|Individual\s+Forest\s+Rights?|Community\s+Forest\s+Resources?|Community\s+Rights?)\b",
            )],
        )
        .normalized(claim_category),
    ]
});

/// Map claim category wording to IFR, CFR or CR.
pub fn claim_category(raw: &str) -> String {
    let upper = raw.to_uppercase();
    if upper.contains("IFR") || upper.contains("INDIVIDUAL") {
        "IFR".into()
    } else if upper.contains("CFR") || upper.contains("RESOURCE") {
        "CFR".into()
    } else {
        "CR".into()
    }
}

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float pattern")
});

/// Parse the leading number of a string ("12.5 ha" → 12.5), ignoring the rest.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let m = LEADING_FLOAT.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|f| f.is_finite())
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: ClaimField) -> &'static FieldRule {
        DEFAULT_RULES.iter().find(|r| r.field == field).unwrap()
    }

    #[test]
    fn test_seven_scored_fields() {
        let scored: Vec<_> = DEFAULT_RULES
            .iter()
            .filter(|r| r.scored)
            .map(|r| r.field)
            .collect();
        assert_eq!(
            scored,
            vec![
                ClaimField::Name,
                ClaimField::Spouse,
                ClaimField::Father,
                ClaimField::Village,
                ClaimField::District,
                ClaimField::State,
                ClaimField::ExtentHa,
            ]
        );
    }

    #[test]
    fn test_name_priority() {
        let text = "Name of claimant: Ramesh Kumar Gond, Holder: Somebody Else";
        let (value, label) = rule(ClaimField::Name).evaluate(text).unwrap();
        assert_eq!(value, FieldValue::Text("Ramesh Kumar Gond".into()));
        assert_eq!(label, "name_of_claimant");
    }

    #[test]
    fn test_name_does_not_cross_lines() {
        let (value, label) = rule(ClaimField::Name)
            .evaluate("Name: Sita Bai\nVillage: Kosa")
            .unwrap();
        assert_eq!(value, FieldValue::Text("Sita Bai".into()));
        assert_eq!(label, "labeled_name");
    }

    #[test]
    fn test_values_stop_before_next_label() {
        let text = "Claim 1 Name: Ramesh Kumar Village: Badi District: Mandla, Madhya Pradesh";
        let field = |f| rule(f).evaluate(text).map(|(value, _)| value);

        assert_eq!(field(ClaimField::Name), Some(FieldValue::Text("Ramesh Kumar".into())));
        assert_eq!(field(ClaimField::Village), Some(FieldValue::Text("Badi".into())));
        assert_eq!(field(ClaimField::District), Some(FieldValue::Text("Mandla".into())));
        assert_eq!(
            field(ClaimField::State),
            Some(FieldValue::Text("Madhya Pradesh".into()))
        );
    }

    #[test]
    fn test_label_only_capture_is_skipped() {
        let village = rule(ClaimField::Village);
        assert_eq!(
            village.matchers[0].capture("Village: District: Mandla"),
            Some("")
        );
        assert!(village.evaluate("Village: District: Mandla").is_none());
    }

    #[test]
    fn test_claimant_token_fallback() {
        let (value, label) = rule(ClaimField::Name)
            .evaluate("Claimant_Ramesh_Kumar")
            .unwrap();
        assert_eq!(value, FieldValue::Text("Ramesh_Kumar".into()));
        assert_eq!(label, "claimant_token");
    }

    #[test]
    fn test_extent_patterns_in_order() {
        let extent = rule(ClaimField::ExtentHa);
        assert_eq!(
            extent.evaluate("Extent: 2.5 ha, area: 9").unwrap(),
            (FieldValue::Number(2.5), "labeled_extent")
        );
        assert_eq!(
            extent.evaluate("Total area: 1.75").unwrap(),
            (FieldValue::Number(1.75), "labeled_area")
        );
        assert_eq!(
            extent.evaluate("about 3.25 ha forest").unwrap(),
            (FieldValue::Number(3.25), "hectare_suffix")
        );
    }

    #[test]
    fn test_coordinates() {
        let text = "Location 22.123456° N, 80.654321° E";
        assert_eq!(
            rule(ClaimField::Lat).evaluate(text).unwrap(),
            (FieldValue::Number(22.123456), "hemisphere_lat")
        );
        assert_eq!(
            rule(ClaimField::Lon).evaluate(text).unwrap(),
            (FieldValue::Number(80.654321), "hemisphere_lon")
        );
        assert!(rule(ClaimField::Lat).evaluate("lat: 22.1").is_none());
    }

    #[test]
    fn test_state_whitespace_collapsed() {
        let (value, _) = rule(ClaimField::State)
            .evaluate("in madhya   pradesh")
            .unwrap();
        assert_eq!(value, FieldValue::Text("madhya pradesh".into()));
    }

    #[test]
    fn test_claim_category() {
        assert_eq!(claim_category("Individual Forest Rights"), "IFR");
        assert_eq!(claim_category("cfr"), "CFR");
        assert_eq!(claim_category("Community Forest Resource"), "CFR");
        assert_eq!(claim_category("Community Rights"), "CR");
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("12.5 ha"), Some(12.5));
        assert_eq!(parse_leading_float(" -3"), Some(-3.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
    }
}
