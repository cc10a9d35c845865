pub mod ai;
pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

pub use ai::GeminiClient;
pub use config::{CliConfig, LocalStorage};
pub use core::{engine::ChartEngine, pipeline::DocumentPipeline};
pub use domain::model::{ChartRecord, MimeKind};
pub use utils::error::{ChartError, Result};
