pub mod output_format;
pub mod score_request;
pub mod score_response;

pub use output_format::OutputFormat;
pub use score_request::ScoreRequest;
pub use score_response::{ReportMetadata, ScoreResponse};
