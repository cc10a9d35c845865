use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unsupported file type: {file}")]
    UnsupportedFileType { file: String },

    #[error("Could not extract any text from {file}")]
    EmptyExtractedText { file: String },

    #[error("The AI response was empty: {reason}")]
    ModelError { reason: String },

    #[error("AI response could not be parsed: {reason}")]
    MalformedResponse { reason: String },

    #[error("AI could not find any chartable data in {file}")]
    NoChartableData { file: String },

    #[error("Network error while contacting the AI service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {field}={value}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ChartError {
    /// Message shown on stderr, phrased for the person who uploaded the
    /// files rather than for the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnsupportedFileType { file } => format!(
                "Unsupported file type: {}. Please upload a .pdf, .docx or .xlsx document.",
                file
            ),
            Self::EmptyExtractedText { file } => format!(
                "Could not extract any text from {}. It might be empty or a scanned image.",
                file
            ),
            Self::ModelError { .. } => {
                "The AI response was empty. The content may have been blocked or the model \
                 could not find any data to process."
                    .to_string()
            }
            Self::MalformedResponse { .. } => {
                "Failed to parse the AI's response. The data structure might be invalid or \
                 incomplete."
                    .to_string()
            }
            Self::NoChartableData { file } => format!(
                "AI could not find any chartable data in {}. Please try a different file \
                 with clear tabular data.",
                file
            ),
            Self::Network(_) => {
                "A network error occurred while communicating with the AI. Please check \
                 your connection and try again."
                    .to_string()
            }
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            other => format!(
                "An unexpected error occurred while processing the document: {}. \
                 Please try again or use a different file.",
                other
            ),
        }
    }

    /// Process exit code: 2 for configuration problems caught before any
    /// work starts, 1 for everything that fails a run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValue { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
