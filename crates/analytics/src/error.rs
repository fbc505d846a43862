use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid engine parameter '{0}': {1}")]
    InvalidParameter(String, String),
}
