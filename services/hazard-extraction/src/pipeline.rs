//! Extraction Pipeline
//!
//! The in-memory document store and the forward pipeline over it:
//! text extraction -> code matching -> normalization -> reference lookup.
//! Each uploaded document is processed start-to-finish under the store's
//! write lock, so invocations never interleave.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use hazsheet_models::{HazardTable, RawMatchGroup, SdsDocument};
use hazsheet_utils::{HazSheetError, HazSheetResult, ReferenceConfig};

use crate::lookup::HazardLookup;
use crate::matcher::CodeMatcher;
use crate::normalizer::CodeNormalizer;
use crate::pdf_text::PdfTextExtractor;

struct StoredSds {
    meta: SdsDocument,
    data: Vec<u8>,
}

/// Document store plus pipeline components. No state survives a run except
/// the stored documents themselves; the reference workbook is reopened on
/// every extraction.
#[derive(Clone)]
pub struct SdsProcessor {
    documents: Arc<RwLock<HashMap<Uuid, StoredSds>>>,
    extractor: Arc<PdfTextExtractor>,
    matcher: Arc<CodeMatcher>,
    normalizer: Arc<CodeNormalizer>,
    lookup: Arc<HazardLookup>,
}

impl SdsProcessor {
    pub fn new(reference: &ReferenceConfig) -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
            extractor: Arc::new(PdfTextExtractor::new()),
            matcher: Arc::new(CodeMatcher::new()),
            normalizer: Arc::new(CodeNormalizer::new()),
            lookup: Arc::new(HazardLookup::new(reference)),
        }
    }

    /// Store an uploaded document. Only PDF uploads are accepted.
    pub async fn store_document(
        &self,
        file_name: &str,
        file_type: &str,
        data: &[u8],
    ) -> HazSheetResult<Uuid> {
        if !is_pdf(file_name, file_type) {
            return Err(HazSheetError::validation(
                "file",
                format!("only PDF uploads are accepted, got '{}'", file_type),
            ));
        }

        let meta = SdsDocument::new(file_name, file_type, data.len());
        let id = meta.id;

        let mut docs = self.documents.write().await;
        docs.insert(
            id,
            StoredSds {
                meta,
                data: data.to_vec(),
            },
        );

        info!(document_id = %id, file_name, "stored uploaded document");
        Ok(id)
    }

    pub async fn get_document(&self, id: Uuid) -> Option<SdsDocument> {
        let docs = self.documents.read().await;
        docs.get(&id).map(|d| d.meta.clone())
    }

    /// Run the full pipeline for a stored document and record the result on
    /// it. Failures mark the document failed and surface directly; there is
    /// no partial output.
    pub async fn extract(&self, id: Uuid) -> HazSheetResult<HazardTable> {
        let mut docs = self.documents.write().await;
        let doc = docs
            .get_mut(&id)
            .ok_or_else(|| HazSheetError::not_found("document"))?;

        match self.run(&doc.data) {
            Ok(table) => {
                doc.meta.complete(table.clone());
                Ok(table)
            }
            Err(e) => {
                doc.meta.fail();
                Err(e)
            }
        }
    }

    /// Export the stored result table as CSV bytes.
    pub async fn export(&self, id: Uuid) -> HazSheetResult<Vec<u8>> {
        let docs = self.documents.read().await;
        let doc = docs
            .get(&id)
            .ok_or_else(|| HazSheetError::not_found("document"))?;
        let table = doc
            .meta
            .result
            .as_ref()
            .ok_or_else(|| HazSheetError::not_found("extraction result"))?;

        crate::report::to_csv(table)
    }

    /// The pipeline itself. Data flows strictly forward; each stage is
    /// stateless across invocations.
    fn run(&self, data: &[u8]) -> HazSheetResult<HazardTable> {
        let lines = self.extractor.extract_lines(data)?;

        let groups: Vec<RawMatchGroup> = lines
            .iter()
            .flat_map(|line| self.matcher.match_line(line))
            .collect();

        let codes = self.normalizer.normalize(&groups);
        debug!(lines = lines.len(), groups = groups.len(), codes = codes.len(), "matched hazard codes");

        let table = self.lookup.resolve(&codes)?;
        info!(codes = codes.len(), rows = table.len(), "extraction run finished");

        Ok(table)
    }
}

fn is_pdf(file_name: &str, file_type: &str) -> bool {
    file_type.to_lowercase().contains("pdf") || file_name.to_lowercase().ends_with(".pdf")
}
