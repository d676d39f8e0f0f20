use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How text extraction went for one page.
///
/// Distinguishes a page that genuinely has no text from one whose text could
/// not be decoded; both carry an empty `text`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageStatus {
    /// Text was decoded and contains non-whitespace characters.
    Extracted,
    /// Text was decoded but is empty or whitespace only (e.g. a scanned image).
    Blank,
    /// Text extraction raised; the page contributes empty text.
    Failed { reason: String },
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extracted => "extracted",
            Self::Blank => "blank",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One page of a source document, as produced by the parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPage {
    /// 1-based position in the document.
    pub page_number: u32,
    pub status: PageStatus,
    /// Full plain text of the page.
    pub text: String,
    /// Structured snippets recognized inside the text, in order of appearance.
    #[serde(default)]
    pub embedded_json: Vec<Value>,
    /// Text fragments each believed to hold one claim.
    #[serde(default)]
    pub claim_blocks: Vec<String>,
}

impl ParsedPage {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, PageStatus::Failed { .. })
    }
}
