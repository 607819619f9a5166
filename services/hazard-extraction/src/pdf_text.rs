//! PDF Text Extraction
//!
//! Pulls the plain text out of an uploaded SDS page by page and splits it
//! into ordered lines for the code matcher.

use hazsheet_models::ExtractedLine;
use hazsheet_utils::HazSheetResult;

pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract ordered text lines from PDF bytes (page order, then in-page
    /// line order). Pages without a text layer contribute zero lines; a
    /// document that cannot be parsed at all is a hard failure.
    pub fn extract_lines(&self, data: &[u8]) -> HazSheetResult<Vec<ExtractedLine>> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)?;
        Ok(lines_from_pages(&pages))
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split per-page text into ordered, non-blank lines. Blank lines can never
/// carry a hazard-code token, so they are dropped here.
pub fn lines_from_pages(pages: &[String]) -> Vec<ExtractedLine> {
    let mut lines = Vec::new();
    for (page_index, text) in pages.iter().enumerate() {
        if text.trim().is_empty() {
            // Scanned page with no text layer - skipped, not an error.
            continue;
        }
        for (line_index, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            lines.push(ExtractedLine::new(page_index, line_index, line));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_split_into_ordered_lines() {
        let pages = vec![
            "SECTION 2: Hazards identification\nH315 Causes skin irritation".to_string(),
            "Disposal considerations".to_string(),
        ];

        let lines = lines_from_pages(&pages);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].page_index, 0);
        assert_eq!(lines[0].line_index, 0);
        assert_eq!(lines[1].text, "H315 Causes skin irritation");
        assert_eq!(lines[2].page_index, 1);
    }

    #[test]
    fn test_empty_page_contributes_no_lines() {
        let pages = vec![
            "".to_string(),
            "   \n  ".to_string(),
            "H315".to_string(),
        ];

        let lines = lines_from_pages(&pages);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].page_index, 2);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let pages = vec!["first\n\n\nsecond".to_string()];

        let lines = lines_from_pages(&pages);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_index, 0);
        assert_eq!(lines[1].line_index, 3);
    }

    #[test]
    fn test_unparseable_document_is_a_hard_failure() {
        let extractor = PdfTextExtractor::new();
        let result = extractor.extract_lines(b"not a pdf at all");
        assert!(result.is_err());
    }
}
