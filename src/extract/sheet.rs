use crate::utils::error::{ChartError, Result};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::Path;

/// Every sheet rendered as a `Sheet: <name>` header plus CSV lines, with a
/// blank line between sheets, so the model sees sheet boundaries.
pub fn extract_text(path: &Path) -> Result<String> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        ChartError::Unexpected(format!("failed to read XLSX {}: {}", path.display(), e))
    })?;

    let names: Vec<String> = workbook.sheet_names().to_owned();
    let mut out = String::new();
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(|e| {
            ChartError::Unexpected(format!(
                "failed to read sheet '{}' in {}: {}",
                name,
                path.display(),
                e
            ))
        })?;

        out.push_str(&format!("Sheet: {}\n\n", name));

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in range.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        let csv_bytes = writer
            .into_inner()
            .map_err(|e| ChartError::Unexpected(format!("CSV buffer error: {}", e)))?;
        out.push_str(&String::from_utf8_lossy(&csv_bytes));
        out.push('\n');
    }

    Ok(out)
}
