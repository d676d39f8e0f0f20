//! Parse → extract → validate → summarize, for one document.

use chrono::{DateTime, Utc};
use fra_common::config::AtlasConfig;
use fra_common::types::{BatchSummary, ParsedPage, ValidatedClaim};
use fra_common::BatchId;

use crate::extractor::ClaimExtractor;
use crate::parser::{DocumentParser, ParseError, ProgressFn};
use crate::validator::{summarize, ClaimValidator};

/// Everything produced from one document.
#[derive(Clone, Debug)]
pub struct ProcessedBatch {
    pub batch_id: BatchId,
    pub processed_at: DateTime<Utc>,
    pub pages: Vec<ParsedPage>,
    pub claims: Vec<ValidatedClaim>,
    pub summary: BatchSummary,
}

/// The three pipeline stages, configured once and reused per document.
#[derive(Debug, Default)]
pub struct Pipeline {
    parser: DocumentParser,
    extractor: ClaimExtractor,
    validator: ClaimValidator,
}

impl Pipeline {
    pub fn new(parser: DocumentParser, extractor: ClaimExtractor, validator: ClaimValidator) -> Self {
        Self {
            parser,
            extractor,
            validator,
        }
    }

    pub fn from_config(config: &AtlasConfig) -> Self {
        Self::new(
            DocumentParser::new(config.parser.clone()),
            ClaimExtractor::new(config.extraction.clone()),
            ClaimValidator::new(config.validation.clone()),
        )
    }

    /// Run one document through every stage.
    ///
    /// Only a document that cannot be opened fails; every other irregularity
    /// ends up as a flag on a claim.
    pub fn process(
        &self,
        bytes: &[u8],
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<ProcessedBatch, ParseError> {
        let start = std::time::Instant::now();
        let batch_id = BatchId::new();

        let pages = self.parser.parse_document(bytes, on_progress)?;
        let extracted = self.extractor.extract_claims(&pages);
        let claims = self.validator.validate_claims(&extracted);
        let summary = summarize(&claims);

        metrics::counter!("pipeline.documents.processed").increment(1);
        metrics::histogram!("pipeline.document.latency").record(start.elapsed().as_secs_f64());

        tracing::info!(
            batch_id = %batch_id,
            pages = pages.len(),
            claims = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            duplicates = summary.duplicates,
            clustered = summary.clustered,
            missing_coordinates = summary.missing_coordinates,
            "Document processed"
        );

        Ok(ProcessedBatch {
            batch_id,
            processed_at: Utc::now(),
            pages,
            claims,
            summary,
        })
    }
}
