use crate::core::pipeline::file_label;
use crate::domain::model::MimeKind;
use crate::domain::ports::Pipeline;
use crate::utils::error::{ChartError, Result};
use std::path::Path;

/// Runs the two-document operation: both files are validated up front,
/// then the two pipelines run concurrently and independently. The run
/// succeeds only when both succeed; one error is surfaced, the other is
/// logged. An in-flight request is never cancelled.
pub struct ChartEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ChartEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, file_a: &Path, file_b: &Path) -> Result<(String, String)> {
        // Reject unsupported types before any extraction or network work.
        for file in [file_a, file_b] {
            if MimeKind::from_path(file).is_none() {
                return Err(ChartError::UnsupportedFileType {
                    file: file_label(file),
                });
            }
        }

        tracing::info!(
            "Processing {} and {}",
            file_label(file_a),
            file_label(file_b)
        );

        let (result_a, result_b) =
            tokio::join!(self.process(file_a), self.process(file_b));

        match (result_a, result_b) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(e), Err(other)) => {
                tracing::error!(
                    "{} also failed: {}",
                    file_label(file_b),
                    other
                );
                Err(e)
            }
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        }
    }

    async fn process(&self, file: &Path) -> Result<String> {
        let text = self.pipeline.extract(file).await?;
        let record = self.pipeline.interpret(file, &text).await?;
        self.pipeline.load(file, &record).await
    }
}
