pub mod engine;
pub mod pipeline;
pub mod sanitize;

pub use crate::domain::model::{ChartRecord, MimeKind};
pub use crate::domain::ports::{ConfigProvider, ModelClient, Pipeline, Storage};
