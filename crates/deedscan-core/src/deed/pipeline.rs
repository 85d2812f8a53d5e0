//! Document-to-record extraction pipeline.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::assembler::{assemble, RecordParts, TranslatedName};
use super::extractor::DeedExtractor;
use super::normalizer::Normalizer;
use super::segmenter::Segmenter;
use super::Result;
use crate::error::ExtractionError;
use crate::models::config::DeedscanConfig;
use crate::models::filter::FilterSpec;
use crate::models::record::{TransactionRecord, UNKNOWN};
use crate::translate::TranslatorAdapter;

/// Result of running the pipeline over one document.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Records that passed the filter, in document order.
    pub records: Vec<TransactionRecord>,
    /// Number of records in `records`.
    pub count: usize,
    /// Number of blocks found before filtering.
    pub blocks: usize,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Segment, extract, normalize, translate, assemble and filter.
///
/// Holds no per-document state, so one pipeline can serve concurrent
/// documents.
#[derive(Clone)]
pub struct Pipeline {
    segmenter: Segmenter,
    extractor: DeedExtractor,
    translator: TranslatorAdapter,
}

impl Pipeline {
    /// Create a pipeline with default anchors.
    pub fn new(translator: TranslatorAdapter) -> Self {
        Self {
            segmenter: Segmenter::new(),
            extractor: DeedExtractor::new(),
            translator,
        }
    }

    /// Create a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::InvalidPattern`] if a configured anchor
    /// does not compile.
    pub fn from_config(config: &DeedscanConfig) -> Result<Self> {
        let segmenter = Segmenter::from_patterns(&config.segmentation.anchor_patterns)?;
        Ok(Self::new(TranslatorAdapter::from_config(&config.translation)).with_segmenter(segmenter))
    }

    /// Replace the segmenter.
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn translator(&self) -> &TranslatorAdapter {
        &self.translator
    }

    /// Process a document, stamping records with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::NoInput`] if `text` is blank.
    pub async fn process(&self, text: &str, filter: &FilterSpec) -> Result<PipelineOutput> {
        self.process_at(text, filter, Utc::now()).await
    }

    /// Process a document as of `ingested_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::NoInput`] if `text` is blank.
    pub async fn process_at(
        &self,
        text: &str,
        filter: &FilterSpec,
        ingested_at: DateTime<Utc>,
    ) -> Result<PipelineOutput> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::NoInput);
        }

        info!("Processing {} characters of deed text", text.len());

        let normalizer = Normalizer::new(ingested_at.date_naive());
        let mut pending: Vec<RecordParts> = self
            .segmenter
            .segment(text)
            .map(|block| {
                let fields = self.extractor.extract_block(&block);
                let values = normalizer.normalize(&fields);
                RecordParts {
                    block_ordinal: block.ordinal,
                    buyer: TranslatedName::untranslated(&fields.buyer_name),
                    seller: TranslatedName::untranslated(&fields.seller_name),
                    fields,
                    values,
                }
            })
            .collect();
        let blocks = pending.len();

        debug!("Segmented document into {} blocks", blocks);

        self.translate_names(&mut pending).await;

        let records: Vec<TransactionRecord> = pending
            .into_iter()
            .map(|parts| assemble(parts, ingested_at))
            .filter(|record| filter.matches(record))
            .collect();

        let processing_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            "Kept {} of {} records in {}ms",
            records.len(),
            blocks,
            processing_time_ms
        );

        Ok(PipelineOutput {
            count: records.len(),
            records,
            blocks,
            processing_time_ms,
        })
    }

    /// Translate every known buyer/seller name of the document in one batch.
    async fn translate_names(&self, pending: &mut [RecordParts]) {
        let mut queue: Vec<String> = Vec::new();
        let mut slots: Vec<&mut TranslatedName> = Vec::new();

        for parts in pending.iter_mut() {
            for name in [&mut parts.buyer, &mut parts.seller] {
                if name.text != UNKNOWN {
                    queue.push(name.text.clone());
                    slots.push(name);
                }
            }
        }

        if queue.is_empty() {
            return;
        }

        let batch = self.translator.translate_all(&queue).await;
        for ((slot, text), status) in slots.into_iter().zip(batch.texts).zip(batch.statuses) {
            *slot = TranslatedName { text, status };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;
    use crate::models::record::{FieldStatus, TranslationStatus};
    use crate::translate::Translator;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Arc;

    const DOCUMENT: &str = "\
Document No: 1234/2020
Date: 05/03/2020
வாங்குபவர்: குமார்
விற்பவர்: ராஜா
Survey No: 12/3
Rs. 1,00,000
வ.எண். 88/2021
தேதி: 31/02/2021
வாங்குபவர்: குமார் செல்வம்
விற்பவர்: மீனா
சர்வே எண். 40/1
ரூ.2,50,000
Document No: 99/2022
Seller: Unknown Trust
";

    struct Dictionary(HashMap<&'static str, &'static str>);

    #[async_trait::async_trait]
    impl Translator for Dictionary {
        async fn translate(&self, text: &str) -> std::result::Result<String, TranslationError> {
            self.0
                .get(text)
                .map(|s| s.to_string())
                .ok_or_else(|| TranslationError::Malformed(format!("no entry for {text}")))
        }
    }

    struct AlwaysFails;

    #[async_trait::async_trait]
    impl Translator for AlwaysFails {
        async fn translate(&self, _text: &str) -> std::result::Result<String, TranslationError> {
            Err(TranslationError::Timeout(1))
        }
    }

    fn dictionary() -> TranslatorAdapter {
        let entries = HashMap::from([
            ("குமார்", "Kumar"),
            ("ராஜா", "Raja"),
            ("குமார் செல்வம்", "Kumar Selvam"),
            ("மீனா", "Meena"),
            ("Unknown Trust", "Unknown Trust"),
        ]);
        TranslatorAdapter::new(Arc::new(Dictionary(entries)))
    }

    fn ingested_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_process_document() {
        let pipeline = Pipeline::new(dictionary());
        let out = pipeline
            .process_at(DOCUMENT, &FilterSpec::none(), ingested_at())
            .await
            .unwrap();

        assert_eq!(out.blocks, 3);
        assert_eq!(out.count, 3);

        let first = &out.records[0];
        assert_eq!(first.fields.document_number, "1234/2020");
        assert_eq!(first.fields.survey_number, "12/3");
        assert_eq!(first.buyer_name_translated, "Kumar");
        assert_eq!(first.seller_name_translated, "Raja");
        assert_eq!(first.transaction_date, NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
        assert_eq!(first.transaction_value, Some(100_000));
        assert_eq!(first.translation_status, TranslationStatus::Translated);

        let second = &out.records[1];
        assert_eq!(second.fields.document_number, "88/2021");
        assert_eq!(second.date_status, FieldStatus::Malformed);
        assert_eq!(second.transaction_date, ingested_at().date_naive());
        assert_eq!(second.transaction_value, Some(250_000));

        let third = &out.records[2];
        assert_eq!(third.fields.survey_number, UNKNOWN);
        assert_eq!(third.fields.buyer_name, UNKNOWN);
        assert_eq!(third.buyer_name_translated, UNKNOWN);
        assert_eq!(third.seller_name_translated, "Unknown Trust");
        assert_eq!(third.date_status, FieldStatus::Missing);
        assert_eq!(third.transaction_value, None);

        let ordinals: Vec<usize> = out.records.iter().map(|r| r.block_ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_names_translated_in_one_call() {
        let pipeline = Pipeline::new(dictionary());
        pipeline
            .process_at(DOCUMENT, &FilterSpec::none(), ingested_at())
            .await
            .unwrap();
        assert_eq!(pipeline.translator().stats().calls(), 1);
    }

    #[tokio::test]
    async fn test_translation_failure_keeps_source_names() {
        let pipeline = Pipeline::new(TranslatorAdapter::new(Arc::new(AlwaysFails)));
        let out = pipeline
            .process_at(DOCUMENT, &FilterSpec::none(), ingested_at())
            .await
            .unwrap();

        assert_eq!(out.count, 3);
        for record in &out.records {
            assert_eq!(record.buyer_name_translated, record.fields.buyer_name);
            assert_eq!(record.seller_name_translated, record.fields.seller_name);
            assert_eq!(record.translation_status, TranslationStatus::Fallback);
        }
        assert_eq!(pipeline.translator().stats().failures(), 1);
    }

    #[tokio::test]
    async fn test_filter_applies_to_translated_names() {
        let pipeline = Pipeline::new(dictionary());
        let filter = FilterSpec::none()
            .with_buyer_name("kumar")
            .with_survey_number("12/3");
        let out = pipeline.process_at(DOCUMENT, &filter, ingested_at()).await.unwrap();

        assert_eq!(out.blocks, 3);
        assert_eq!(out.count, 1);
        assert_eq!(out.records[0].fields.document_number, "1234/2020");
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let pipeline = Pipeline::new(TranslatorAdapter::disabled());
        let err = pipeline.process(" \n ", &FilterSpec::none()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::NoInput));
    }

    #[tokio::test]
    async fn test_unstructured_text_gives_one_sentinel_record() {
        let pipeline = Pipeline::new(TranslatorAdapter::disabled());
        let out = pipeline
            .process("scanned page with no labels", &FilterSpec::none())
            .await
            .unwrap();

        assert_eq!(out.count, 1);
        let record = &out.records[0];
        assert_eq!(record.fields.document_number, UNKNOWN);
        assert_eq!(record.fields.survey_number, UNKNOWN);
        assert_eq!(record.translation_status, TranslationStatus::Skipped);
        assert_eq!(record.fields.source_text, "scanned page with no labels");
    }
}
