use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Brace-delimited blob that mentions at least one claim field by name.
static CLAIM_BLOB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\{[^{}]*"(?:name|village|district|state|lat|lon)"[^{}]*\}"#)
        .expect("valid claim blob pattern")
});

/// Finds structured claim snippets embedded in page text.
#[derive(Debug)]
pub struct SnippetScanner {
    /// `<marker> { ... }`, capturing the blob.
    labeled: Regex,
}

impl SnippetScanner {
    pub fn new(marker: &str) -> Self {
        let pattern = format!(r"(?i){}\s*(\{{[^}}]+\}})", regex::escape(marker.trim()));
        Self {
            labeled: Regex::new(&pattern).expect("escaped marker is a valid pattern"),
        }
    }

    /// Structured snippets in order: labeled ones first, then bare claim-shaped blobs.
    ///
    /// Blobs that fail to parse are skipped. A labeled blob is not reported
    /// again by the bare scan.
    pub fn scan(&self, text: &str) -> Vec<Value> {
        let mut snippets = Vec::new();
        let mut labeled_spans = Vec::new();

        for caps in self.labeled.captures_iter(text) {
            let Some(blob) = caps.get(1) else { continue };
            labeled_spans.push(blob.range());

            match serde_json::from_str::<Value>(blob.as_str()) {
                Ok(value) => snippets.push(value),
                Err(e) => {
                    metrics::counter!("parser.snippets.skipped", "kind" => "labeled").increment(1);
                    tracing::debug!(error = %e, offset = blob.start(), "Skipping unparseable labeled snippet");
                }
            }
        }

        for blob in CLAIM_BLOB.find_iter(text) {
            let span = blob.range();
            if labeled_spans
                .iter()
                .any(|l| span.start < l.end && l.start < span.end)
            {
                continue;
            }

            match serde_json::from_str::<Value>(blob.as_str()) {
                Ok(value) if looks_like_claim(&value) => snippets.push(value),
                Ok(_) => {
                    tracing::debug!(offset = span.start, "Ignoring JSON blob without claim identity fields");
                }
                Err(e) => {
                    metrics::counter!("parser.snippets.skipped", "kind" => "bare").increment(1);
                    tracing::debug!(error = %e, offset = span.start, "Skipping unparseable JSON blob");
                }
            }
        }

        snippets
    }
}

/// A bare blob counts as a claim when it names a person or a place.
fn looks_like_claim(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    ["name", "village", "district"]
        .iter()
        .any(|key| obj.get(*key).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
