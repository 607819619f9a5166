//! Result Assembly
//!
//! Turns the code-to-statement table into its export encoding. The download
//! surface always offers the same file name and MIME type.

use hazsheet_models::HazardTable;
use hazsheet_utils::{HazSheetError, HazSheetResult};

pub const EXPORT_FILE_NAME: &str = "Hazard_Statement.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const CSV_HEADER: [&str; 2] = ["Code", "Hazard Statements"];

/// Encode the result table as CSV, one row per mapping entry in the table's
/// iteration order. An empty table yields a header-only file.
pub fn to_csv(table: &HazardTable) -> HazSheetResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in table.rows() {
        writer.write_record([row.code.as_str(), row.statement.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| HazSheetError::internal(e.to_string()))
}
