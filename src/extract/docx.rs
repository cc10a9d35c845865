use crate::utils::error::{ChartError, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;

/// Raw text extraction: every paragraph's runs concatenated, one line per
/// paragraph. Styling, tables-as-structure and headers are not preserved;
/// the model works from plain text.
pub fn extract_text(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    let docx = read_docx(&data).map_err(|e| {
        ChartError::Unexpected(format!("failed to read DOCX {}: {}", path.display(), e))
    })?;

    let mut lines: Vec<String> = Vec::new();
    for child in docx.document.children.iter() {
        if let DocumentChild::Paragraph(para) = child {
            let line: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<String>(),
                    ),
                    _ => None,
                })
                .collect();
            lines.push(line);
        }
    }

    Ok(lines.join("\n"))
}
