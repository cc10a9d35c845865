//! Local document-to-text extraction. Each format delegates to its parsing
//! crate; the pipeline only ever sees plain text.

mod docx;
mod pdf;
mod sheet;

use crate::domain::model::MimeKind;
use crate::utils::error::Result;
use std::path::Path;

pub fn extract_text(path: &Path, kind: MimeKind) -> Result<String> {
    match kind {
        MimeKind::Pdf => pdf::extract_text(path),
        MimeKind::Docx => docx::extract_text(path),
        MimeKind::Xlsx => sheet::extract_text(path),
    }
}
