use crate::core::sanitize;
use crate::domain::model::{ChartRecord, MimeKind};
use crate::domain::ports::{ConfigProvider, ModelClient, Pipeline, Storage};
use crate::extract;
use crate::utils::error::{ChartError, Result};
use std::path::Path;

/// Display name for user-facing errors: the file name when there is one,
/// the whole path otherwise.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// The per-document pipeline: local text extraction, one model call plus
/// sanitization, then a chart JSON artifact for the rendering layer.
pub struct DocumentPipeline<S: Storage, C: ConfigProvider, M: ModelClient> {
    storage: S,
    config: C,
    model: M,
}

impl<S: Storage, C: ConfigProvider, M: ModelClient> DocumentPipeline<S, C, M> {
    pub fn new(storage: S, config: C, model: M) -> Self {
        Self {
            storage,
            config,
            model,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, M: ModelClient> Pipeline for DocumentPipeline<S, C, M> {
    async fn extract(&self, file: &Path) -> Result<String> {
        let kind = MimeKind::from_path(file).ok_or_else(|| ChartError::UnsupportedFileType {
            file: file_label(file),
        })?;

        tracing::debug!("Extracting text from {} ({})", file.display(), kind.mime());
        let text = extract::extract_text(file, kind)?;

        if text.trim().is_empty() {
            return Err(ChartError::EmptyExtractedText {
                file: file_label(file),
            });
        }

        tracing::info!("Extracted {} chars from {}", text.len(), file_label(file));
        Ok(text)
    }

    async fn interpret(&self, file: &Path, text: &str) -> Result<ChartRecord> {
        let raw = self.model.extract_chart_data(text).await?;
        let record = sanitize::sanitize_response(&raw)?;

        if !record.is_chartable() {
            return Err(ChartError::NoChartableData {
                file: file_label(file),
            });
        }

        tracing::info!(
            "{}: {} rows, name key '{}', {} numeric series",
            file_label(file),
            record.rows.len(),
            record.name_key,
            record.numeric_keys.len()
        );
        Ok(record)
    }

    async fn load(&self, file: &Path, record: &ChartRecord) -> Result<String> {
        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let name = format!("{}.chart.json", stem);

        let json = serde_json::to_string_pretty(record)?;
        self.storage.write_file(&name, json.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_path(), name))
    }
}
