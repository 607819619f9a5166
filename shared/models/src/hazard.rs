use serde::{Deserialize, Serialize};

/// One line of text extracted from a document page. Ephemeral: produced and
/// consumed within a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLine {
    pub page_index: usize,
    pub line_index: usize,
    pub text: String,
}

impl ExtractedLine {
    pub fn new(page_index: usize, line_index: usize, text: impl Into<String>) -> Self {
        Self {
            page_index,
            line_index,
            text: text.into(),
        }
    }
}

/// The raw hazard-code tokens matched on one line by a single pattern
/// variant. A line can contribute one group per variant; the groups are
/// never merged before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatchGroup {
    pub page_index: usize,
    pub line_index: usize,
    pub tokens: Vec<String>,
}

/// One row of the reference workbook: a hazard code and its statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardRecord {
    pub code: String,
    pub statement: String,
}

/// The three GHS hazard categories, in the fixed order the reference
/// workbook sheets are processed. Later sheets overwrite earlier matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardCategory {
    Physical,
    Health,
    Environmental,
}

impl HazardCategory {
    pub const ALL: [HazardCategory; 3] = [
        HazardCategory::Physical,
        HazardCategory::Health,
        HazardCategory::Environmental,
    ];

    pub fn sheet_name(&self) -> &'static str {
        match self {
            HazardCategory::Physical => "Physical Hazards",
            HazardCategory::Health => "Health Hazards",
            HazardCategory::Environmental => "Environmental Hazards",
        }
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub code: String,
    pub statement: String,
}

/// The final code-to-statement table. Map semantics keyed by code with
/// last-write-wins, but iteration stays in first-insertion order so runs
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardTable {
    rows: Vec<ResultRow>,
}

impl HazardTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the statement for a code. A code matched again in
    /// a later sheet keeps its original position with the newer statement.
    pub fn insert(&mut self, code: impl Into<String>, statement: impl Into<String>) {
        let code = code.into();
        let statement = statement.into();
        if let Some(row) = self.rows.iter_mut().find(|r| r.code == code) {
            row.statement = statement;
        } else {
            self.rows.push(ResultRow { code, statement });
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.code == code)
            .map(|r| r.statement.as_str())
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(String, String)> for HazardTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = HazardTable::new();
        for (code, statement) in iter {
            table.insert(code, statement);
        }
        table
    }
}
