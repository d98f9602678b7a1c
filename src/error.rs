use jump61_ai::SearchError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type DriverResult<T> = Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_error_display() {
        let err = DriverError::InvalidSettings("size must be at least 1".to_string());
        assert_eq!(err.to_string(), "invalid settings: size must be at least 1");
        let err = DriverError::from(SearchError::InvalidDepth);
        assert_eq!(
            err.to_string(),
            "search failed: search depth must be at least 1"
        );
    }
}
