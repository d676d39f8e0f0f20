//! Document parser: binary document → per-page text, embedded structured
//! snippets, and heuristically segmented claim blocks.

mod document;
mod segment;
mod snippets;

pub use document::{open, DocumentKind, PageSource, PdfSource, TextSource};
pub use segment::segment_claim_blocks;
pub use snippets::SnippetScanner;

use fra_common::config::ParserConfig;
use fra_common::types::{PageStatus, ParsedPage};

/// Progress callback: `(current_page, total_pages)`, 1-based.
pub type ProgressFn<'a> = &'a mut dyn FnMut(u32, u32);

/// Turns documents into `ParsedPage`s.
#[derive(Debug)]
pub struct DocumentParser {
    config: ParserConfig,
    snippets: SnippetScanner,
}

impl DocumentParser {
    pub fn new(config: ParserConfig) -> Self {
        let snippets = SnippetScanner::new(&config.structured_marker);
        Self { config, snippets }
    }

    /// Parse every page of a document, in order.
    ///
    /// Fails only when the document cannot be opened at all. A page whose
    /// text cannot be extracted is returned with empty text and
    /// `PageStatus::Failed`.
    pub fn parse_document(
        &self,
        bytes: &[u8],
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<ParsedPage>, ParseError> {
        let source = document::open(bytes).inspect_err(|e| {
            metrics::counter!("parser.documents.rejected").increment(1);
            tracing::warn!(error = %e, bytes = bytes.len(), "Document could not be opened");
        })?;

        Ok(self.parse_source(source.as_ref(), on_progress))
    }

    /// Parse every page of an already opened source, in order.
    pub fn parse_source(
        &self,
        source: &dyn PageSource,
        mut on_progress: Option<ProgressFn<'_>>,
    ) -> Vec<ParsedPage> {
        let start = std::time::Instant::now();
        let available = source.page_count();
        let total = self
            .config
            .max_pages
            .map_or(available, |cap| cap.min(available));

        if total < available {
            tracing::info!(available, processed = total, "Page cap reached, trailing pages skipped");
        }

        let mut pages = Vec::with_capacity(total as usize);
        for index in 0..total {
            let page_number = index + 1;
            let page = match source.page_text(index) {
                Ok(text) => self.parse_page(page_number, text),
                Err(reason) => {
                    tracing::warn!(page = page_number, reason = %reason, "Page text extraction failed");
                    ParsedPage {
                        page_number,
                        status: PageStatus::Failed { reason },
                        text: String::new(),
                        embedded_json: Vec::new(),
                        claim_blocks: Vec::new(),
                    }
                }
            };

            metrics::counter!("parser.pages", "status" => page.status.as_str()).increment(1);
            pages.push(page);

            if let Some(progress) = on_progress.as_deref_mut() {
                progress(page_number, total);
            }
        }

        metrics::histogram!("parser.document.latency", "kind" => source.kind().as_str())
            .record(start.elapsed().as_secs_f64());
        tracing::debug!(
            kind = source.kind().as_str(),
            pages = pages.len(),
            failed = pages.iter().filter(|p| p.is_failed()).count(),
            "Document parsed"
        );

        pages
    }

    /// Build a page from already-extracted text.
    pub fn parse_page(&self, page_number: u32, text: String) -> ParsedPage {
        let status = if text.trim().is_empty() {
            PageStatus::Blank
        } else {
            PageStatus::Extracted
        };

        let embedded_json = self.snippets.scan(&text);
        let claim_blocks = segment_claim_blocks(
            &text,
            self.config.min_segment_chars,
            self.config.whole_page_block_chars,
        );

        ParsedPage {
            page_number,
            status,
            text,
            embedded_json,
            claim_blocks,
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

/// Parse a document with the default parser settings.
pub fn parse_document(
    bytes: &[u8],
    on_progress: Option<ProgressFn<'_>>,
) -> Result<Vec<ParsedPage>, ParseError> {
    DocumentParser::default().parse_document(bytes, on_progress)
}

/// The document could not be opened at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document is empty")]
    Empty,

    #[error("unsupported document format (expected PDF or UTF-8 text)")]
    UnsupportedFormat,

    #[error("PDF could not be opened: {0}")]
    Pdf(String),
}

impl From<ParseError> for fra_common::AtlasError {
    fn from(e: ParseError) -> Self {
        fra_common::AtlasError::Decode(e.to_string())
    }
}
