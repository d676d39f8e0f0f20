//! Claim extractor: parsed pages → semi-structured claim records.
//!
//! Embedded structured snippets are read first and trusted with a fixed
//! confidence; free-text claim blocks go through ordered field rules and are
//! scored by how many expected fields were located.

mod heuristic;
pub mod rules;
mod structured;

pub use heuristic::extract_from_text;
pub use rules::{FieldRule, FieldValue, Matcher, DEFAULT_RULES};
pub use structured::extract_from_json;

use fra_common::config::ExtractionConfig;
use fra_common::types::{ExtractedClaim, ParsedPage};

/// Extracts claims from parsed pages.
#[derive(Clone, Debug)]
pub struct ClaimExtractor {
    config: ExtractionConfig,
    rules: Vec<FieldRule>,
}

impl ClaimExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_rules(config, DEFAULT_RULES.clone())
    }

    pub fn with_rules(config: ExtractionConfig, rules: Vec<FieldRule>) -> Self {
        Self { config, rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// One claim per embedded snippet and per claim block, page by page.
    ///
    /// A page with neither snippets nor blocks contributes one claim read
    /// from its whole text.
    pub fn extract_claims(&self, pages: &[ParsedPage]) -> Vec<ExtractedClaim> {
        let mut claims = Vec::new();

        for page in pages {
            for snippet in &page.embedded_json {
                claims.push(extract_from_json(snippet, &page.text, &self.config));
                metrics::counter!("extractor.claims", "path" => "structured").increment(1);
            }

            if !page.claim_blocks.is_empty() {
                for block in &page.claim_blocks {
                    claims.push(self.extract_text(block));
                    metrics::counter!("extractor.claims", "path" => "pattern").increment(1);
                }
            } else if page.embedded_json.is_empty() {
                tracing::debug!(page = page.page_number, "No claim blocks, reading whole page");
                claims.push(self.extract_text(&page.text));
                metrics::counter!("extractor.claims", "path" => "whole_page").increment(1);
            }
        }

        tracing::debug!(pages = pages.len(), claims = claims.len(), "Claims extracted");
        claims
    }

    fn extract_text(&self, text: &str) -> ExtractedClaim {
        extract_from_text(text, &self.rules, self.config.raw_text_chars)
    }
}

impl Default for ClaimExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

/// Extract claims with the default rules and settings.
pub fn extract_claims(pages: &[ParsedPage]) -> Vec<ExtractedClaim> {
    ClaimExtractor::default().extract_claims(pages)
}

/// The first `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
