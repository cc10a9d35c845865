use crate::domain::model::ChartRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn api_key(&self) -> &str;
    fn model(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// Transport to the hosted completion service. Takes the extracted document
/// text and returns the raw response text, which is expected (but not
/// guaranteed) to contain one JSON object. No retries at this seam.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn extract_chart_data(&self, document_text: &str) -> Result<String>;
}

/// One document's journey: file to text, text to sanitized record, record
/// to output artifact.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self, file: &Path) -> Result<String>;
    async fn interpret(&self, file: &Path, text: &str) -> Result<ChartRecord>;
    async fn load(&self, file: &Path, record: &ChartRecord) -> Result<String>;
}
