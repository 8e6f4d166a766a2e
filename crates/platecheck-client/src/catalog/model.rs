/// One row of the assignment sheet. Every field defaults to an empty
/// string when the column is absent; absence never rejects a row.
#[derive(Debug, Clone)]
pub struct AssignmentRow {
    pub tester: String,
    pub wave: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub city: String,
    pub method: String,
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct DeliveryRow {
    pub id: String,
    pub partner: String,
    pub restaurant: String,
    pub address: String,
    pub service: String,
}

/// The legacy positional text table: row 0 partner headers, row 1
/// method headers, row 2 text bodies, aligned by column index.
#[derive(Debug, Clone, Default)]
pub struct LegacyTextTable {
    pub rows: Vec<Vec<String>>,
}

impl LegacyTextTable {
    pub fn partners(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn methods(&self) -> &[String] {
        self.rows.get(1).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bodies(&self) -> &[String] {
        self.rows.get(2).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone)]
pub struct TextEntry {
    pub partner: String,
    pub method: String,
    pub content: String,
}

/// The structured text catalog. Entries keep the insertion order of the
/// source file; first-match-wins lookups depend on it.
#[derive(Debug, Clone)]
pub struct TextCatalog {
    pub entries: Vec<TextEntry>,
    pub general_template: Option<String>,
}
