//! Export column schema
//!
//! A fixed, named mapping from the export's column headers to note
//! fields. Lookups are by header name, so column order in the export does
//! not matter; a missing column or a blank cell yields `None` and the
//! note builder applies the documented default for that field.

use csv::StringRecord;

/// Column headers expected in the idea-inbox export
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    /// Idea text; missing → title falls back to "Idea N"
    pub idea: String,
    /// Workflow state; missing → omitted from frontmatter
    pub estado: String,
    /// Idea type; missing → omitted from frontmatter
    pub tipo: String,
    /// Source reference; missing → omitted from frontmatter
    pub fuente: String,
    /// Tag list cell; missing → no tags
    pub tags: String,
    /// Explicit connections cell; missing → no links, no section
    pub conexiones: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            idea: "📝 Idea".to_string(),
            estado: "Estado".to_string(),
            tipo: "💡 Tipo".to_string(),
            fuente: "📚 Fuente".to_string(),
            tags: "🏷️ Tags".to_string(),
            conexiones: "🔗 Conexiones".to_string(),
        }
    }
}

/// Cleaned field values for one export row
#[derive(Debug, Clone, Default)]
pub struct RowFields {
    pub idea: Option<String>,
    pub estado: Option<String>,
    pub tipo: Option<String>,
    pub fuente: Option<String>,
    pub tags: Option<String>,
    pub conexiones: Option<String>,
}

impl ColumnSchema {
    /// Pull the schema's fields out of one record, trimming cells and
    /// mapping blanks to `None`
    pub fn extract(&self, headers: &StringRecord, record: &StringRecord) -> RowFields {
        RowFields {
            idea: cell(headers, record, &self.idea),
            estado: cell(headers, record, &self.estado),
            tipo: cell(headers, record, &self.tipo),
            fuente: cell(headers, record, &self.fuente),
            tags: cell(headers, record, &self.tags),
            conexiones: cell(headers, record, &self.conexiones),
        }
    }
}

fn cell(headers: &StringRecord, record: &StringRecord, name: &str) -> Option<String> {
    let idx = headers.iter().position(|h| h == name)?;
    let value = record.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn extracts_by_header_name_not_position() {
        let schema = ColumnSchema::default();
        let headers = record(&["Estado", "📝 Idea"]);
        let row = record(&["Activa", "Medir overfitting"]);
        let fields = schema.extract(&headers, &row);
        assert_eq!(fields.idea.as_deref(), Some("Medir overfitting"));
        assert_eq!(fields.estado.as_deref(), Some("Activa"));
    }

    #[test]
    fn blank_cells_become_none() {
        let schema = ColumnSchema::default();
        let headers = record(&["📝 Idea", "Estado"]);
        let row = record(&["Una idea", "   "]);
        let fields = schema.extract(&headers, &row);
        assert!(fields.estado.is_none());
    }

    #[test]
    fn missing_columns_become_none() {
        let schema = ColumnSchema::default();
        let headers = record(&["📝 Idea"]);
        let row = record(&["Una idea"]);
        let fields = schema.extract(&headers, &row);
        assert!(fields.tags.is_none());
        assert!(fields.conexiones.is_none());
    }

    #[test]
    fn cells_are_trimmed() {
        let schema = ColumnSchema::default();
        let headers = record(&["📝 Idea"]);
        let row = record(&["  con espacios  "]);
        let fields = schema.extract(&headers, &row);
        assert_eq!(fields.idea.as_deref(), Some("con espacios"));
    }
}
