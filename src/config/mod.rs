pub mod cli;

pub use cli::LocalStorage;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_input_file, validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "chartlift")]
#[command(about = "Turn tabular data buried in two documents into chart-ready JSON")]
pub struct CliConfig {
    /// First document (.pdf, .docx or .xlsx)
    pub file_a: PathBuf,

    /// Second document (.pdf, .docx or .xlsx)
    pub file_b: PathBuf,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub api_base: String,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_input_file("file_a", &self.file_a)?;
        validate_input_file("file_b", &self.file_b)?;
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("model", &self.model)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        Ok(())
    }
}
