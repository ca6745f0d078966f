use serde::{Deserialize, Serialize};

/// A retained state variable, flattened for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedVariable {
    /// The variable's name
    pub name: String,
    /// Decimal-encoded slot index
    pub slot: String,
    /// Byte offset within the slot
    pub offset: u64,
    /// The compiler's type reference, e.g. `t_uint256`
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Source origin of the contract the variable was reported under
    pub source: String,
    /// Decimal-encoded storage width in bytes
    pub number_of_bytes: String,
}

/// The retained state variables of one contract in one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedRow {
    /// The contract's declared name
    pub name: String,
    /// Retained variables in layout order
    pub state_variables: Vec<ReportedVariable>,
}

/// The consolidated storage layout of a project: rows in unit order, then catalog order.
///
/// Serializes as a bare JSON array of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsolidatedTable {
    rows: Vec<ConsolidatedRow>,
}

impl ConsolidatedTable {
    /// Creates a table from rows that are already in order.
    pub fn new(rows: Vec<ConsolidatedRow>) -> Self {
        Self { rows }
    }

    /// The rows, in order.
    pub fn rows(&self) -> &[ConsolidatedRow] {
        &self.rows
    }

    /// Consume the table, returning its rows.
    pub fn into_rows(self) -> Vec<ConsolidatedRow> {
        self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of reported variables across all rows.
    pub fn variable_count(&self) -> usize {
        self.rows.iter().map(|row| row.state_variables.len()).sum()
    }

    /// Serialize as pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
