//! Hazard Statement Lookup
//!
//! Resolves canonical codes against the three-sheet reference workbook.
//! Sheets are processed in fixed category order and a later sheet overwrites
//! an earlier match for the same code. Codes never matched in any sheet are
//! dropped silently.

use std::path::PathBuf;

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use hazsheet_models::{HazardCategory, HazardTable};
use hazsheet_utils::{HazSheetError, HazSheetResult, ReferenceConfig};

pub struct HazardLookup {
    workbook_path: PathBuf,
}

impl HazardLookup {
    /// The workbook path comes in as explicit configuration; there is no
    /// process-wide reference constant.
    pub fn new(reference: &ReferenceConfig) -> Self {
        Self {
            workbook_path: PathBuf::from(&reference.workbook_path),
        }
    }

    /// Resolve the deduplicated code set to statements. The workbook is
    /// reopened on every call; a missing file or missing category sheet is
    /// fatal for the run.
    pub fn resolve(&self, codes: &[String]) -> HazSheetResult<HazardTable> {
        let mut workbook: Xlsx<_> = open_workbook(&self.workbook_path).map_err(|e| {
            HazSheetError::reference_table(format!("{}: {}", self.workbook_path.display(), e))
        })?;

        let mut sheets = Vec::new();
        for category in HazardCategory::ALL {
            let range = workbook
                .worksheet_range(category.sheet_name())
                .ok_or_else(|| {
                    HazSheetError::reference_table(format!(
                        "missing sheet '{}'",
                        category.sheet_name()
                    ))
                })??;
            sheets.push(range);
        }

        Ok(resolve_in_sheets(codes, &sheets))
    }
}

/// The sheet-order join: for every sheet, for every code, membership
/// anywhere in the sheet gates a lookup of the row whose code column
/// (column 0) equals the value; column 1 holds the statement.
pub fn resolve_in_sheets(codes: &[String], sheets: &[Range<DataType>]) -> HazardTable {
    let mut table = HazardTable::new();
    for sheet in sheets {
        for code in codes {
            let present = sheet
                .rows()
                .any(|row| row.iter().any(|cell| cell_equals(cell, code)));
            if !present {
                continue;
            }
            if let Some(row) = sheet
                .rows()
                .find(|row| row.first().map_or(false, |cell| cell_equals(cell, code)))
            {
                let code_cell = row.first().map(|c| c.to_string()).unwrap_or_default();
                let statement = row.get(1).map(|c| c.to_string()).unwrap_or_default();
                table.insert(code_cell, statement);
            }
        }
    }
    table
}

fn cell_equals(cell: &DataType, code: &str) -> bool {
    matches!(cell, DataType::String(s) if s == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[(&str, &str)]) -> Range<DataType> {
        let mut range = Range::new((0, 0), (rows.len() as u32, 1));
        range.set_value((0, 0), DataType::String("code".to_string()));
        range.set_value((0, 1), DataType::String("statement".to_string()));
        for (i, (code, statement)) in rows.iter().enumerate() {
            range.set_value((i as u32 + 1, 0), DataType::String(code.to_string()));
            range.set_value((i as u32 + 1, 1), DataType::String(statement.to_string()));
        }
        range
    }

    #[test]
    fn test_code_resolves_to_its_statement() {
        let sheets = vec![
            sheet(&[("H225", "Highly flammable liquid and vapour")]),
            sheet(&[("H315", "Causes skin irritation")]),
            sheet(&[("H400", "Very toxic to aquatic life")]),
        ];
        let codes = vec!["H315".to_string()];

        let table = resolve_in_sheets(&codes, &sheets);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("H315"), Some("Causes skin irritation"));
    }

    #[test]
    fn test_unmatched_codes_are_dropped_silently() {
        let sheets = vec![sheet(&[("H225", "Highly flammable liquid and vapour")])];
        let codes = vec!["H999".to_string()];

        let table = resolve_in_sheets(&codes, &sheets);

        assert!(table.is_empty());
    }

    #[test]
    fn test_later_sheet_overwrites_earlier_match() {
        let sheets = vec![
            sheet(&[]),
            sheet(&[("H410", "Health statement for H410")]),
            sheet(&[("H410", "Very toxic to aquatic life with long lasting effects")]),
        ];
        let codes = vec!["H410".to_string()];

        let table = resolve_in_sheets(&codes, &sheets);

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("H410"),
            Some("Very toxic to aquatic life with long lasting effects")
        );
    }

    #[test]
    fn test_membership_outside_code_column_records_nothing() {
        // The code appears as a whole cell value outside column 0.
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), DataType::String("code".to_string()));
        range.set_value((1, 0), DataType::String("H225".to_string()));
        range.set_value((1, 1), DataType::String("H226".to_string()));

        let codes = vec!["H226".to_string()];
        let table = resolve_in_sheets(&codes, &[range]);

        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_workbook_is_fatal() {
        let lookup = HazardLookup::new(&ReferenceConfig {
            workbook_path: "does_not_exist.xlsx".to_string(),
        });

        let result = lookup.resolve(&["H315".to_string()]);

        assert!(matches!(
            result,
            Err(HazSheetError::ReferenceTable { .. })
        ));
    }
}
