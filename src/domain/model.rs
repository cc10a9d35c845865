use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Sanitized, chart-ready data for one document.
///
/// The wire field names (`chartData`, `nameKey`, `dataKeys`) match what the
/// model is instructed to emit and what the rendering layer reads, so a
/// serialized record can be charted without further mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Ordered rows. For every key in `numeric_keys` the value is a number
    /// or null; all other fields pass through untouched for table display.
    #[serde(rename = "chartData")]
    pub rows: Vec<Map<String, Value>>,

    /// Field used as the categorical/label axis.
    #[serde(rename = "nameKey")]
    pub name_key: String,

    /// Fields confirmed to hold only numeric-or-null values across all
    /// rows. Distinct, and never contains `name_key`.
    #[serde(rename = "dataKeys")]
    pub numeric_keys: Vec<String>,
}

impl ChartRecord {
    /// The "no usable data" sentinel.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            name_key: String::new(),
            numeric_keys: Vec::new(),
        }
    }

    /// A record with no rows carries no usable data regardless of its keys.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the record has everything a chart needs: rows, a label axis
    /// and at least one numeric series.
    pub fn is_chartable(&self) -> bool {
        !self.rows.is_empty() && !self.name_key.is_empty() && !self.numeric_keys.is_empty()
    }
}

/// The document formats this tool accepts, identified by MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeKind {
    Pdf,
    Docx,
    Xlsx,
}

impl MimeKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            _ => None,
        }
    }

    /// Infer the kind from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_empty_record_is_not_chartable() {
        let record = ChartRecord::empty();
        assert!(record.is_empty());
        assert!(!record.is_chartable());
    }

    #[test]
    fn test_record_without_numeric_keys_is_not_chartable() {
        let mut row = Map::new();
        row.insert("Item".to_string(), json!("Widget"));
        let record = ChartRecord {
            rows: vec![row],
            name_key: "Item".to_string(),
            numeric_keys: vec![],
        };
        assert!(!record.is_empty());
        assert!(!record.is_chartable());
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let mut row = Map::new();
        row.insert("Item".to_string(), json!("Widget"));
        row.insert("Price".to_string(), json!(10.5));
        let record = ChartRecord {
            rows: vec![row],
            name_key: "Item".to_string(),
            numeric_keys: vec!["Price".to_string()],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["nameKey"], json!("Item"));
        assert_eq!(value["dataKeys"], json!(["Price"]));
        assert_eq!(value["chartData"][0]["Price"], json!(10.5));
    }

    #[test]
    fn test_mime_kind_from_path() {
        assert_eq!(MimeKind::from_path(&PathBuf::from("a.pdf")), Some(MimeKind::Pdf));
        assert_eq!(MimeKind::from_path(&PathBuf::from("b.DOCX")), Some(MimeKind::Docx));
        assert_eq!(MimeKind::from_path(&PathBuf::from("c.xlsx")), Some(MimeKind::Xlsx));
        assert_eq!(MimeKind::from_path(&PathBuf::from("d.txt")), None);
        assert_eq!(MimeKind::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn test_mime_kind_round_trips_through_mime_string() {
        for kind in [MimeKind::Pdf, MimeKind::Docx, MimeKind::Xlsx] {
            assert_eq!(MimeKind::from_mime(kind.mime()), Some(kind));
        }
        assert_eq!(MimeKind::from_mime("text/plain"), None);
    }
}
