//! # HazSheet Core Domain Models
//!
//! Domain types shared between the extraction pipeline and its HTTP surface.
//! All models implement serialization/deserialization with serde.
//!
//! ## Key Models
//!
//! - **SdsDocument**: an uploaded safety-data-sheet with processing lifecycle
//! - **ExtractedLine**: one line of text pulled out of a document page
//! - **RawMatchGroup**: the raw hazard-code tokens matched on one line
//! - **HazardRecord**: one row of the reference workbook
//! - **HazardTable**: the final code-to-statement result table

pub mod document;
pub mod hazard;


pub use document::*;
pub use hazard::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = SdsDocument::new("sds.pdf", "application/pdf", 1024);
        assert!(!doc.id.to_string().is_empty());
        assert_eq!(doc.status, ProcessingStatus::Uploaded);
        assert!(doc.result.is_none());
    }

    #[test]
    fn test_hazard_category_sheet_order() {
        let names: Vec<&str> = HazardCategory::ALL.iter().map(|c| c.sheet_name()).collect();
        assert_eq!(
            names,
            vec!["Physical Hazards", "Health Hazards", "Environmental Hazards"]
        );
    }

    #[test]
    fn test_hazard_table_last_write_wins() {
        let mut table = HazardTable::new();
        table.insert("H315", "Causes skin irritation");
        table.insert("H315", "Causes severe skin burns");

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].statement, "Causes severe skin burns");
    }

    #[test]
    fn test_hazard_table_preserves_insertion_order() {
        let mut table = HazardTable::new();
        table.insert("H315", "Causes skin irritation");
        table.insert("H400", "Very toxic to aquatic life");
        table.insert("H315", "Causes skin irritation");

        let codes: Vec<&str> = table.rows().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["H315", "H400"]);
    }
}
