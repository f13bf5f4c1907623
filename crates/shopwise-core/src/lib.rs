pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::{AnalysisRequest, AnalysisResult, ImageAttachment, SourceCitation};
pub use config::Config;
pub use error::SearchError;
pub use report::{extract_section, ProductReport};
