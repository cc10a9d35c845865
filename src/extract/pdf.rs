use crate::utils::error::{ChartError, Result};
use std::path::Path;

pub fn extract_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path).map_err(|e| {
        ChartError::Unexpected(format!("failed to read PDF {}: {}", path.display(), e))
    })
}
