use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every fatal path in a command ends up here; `exit_code` maps it to the process status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Generated content did not match the expected schema: {0}")]
    Schema(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Usage mistakes exit with 2 (same as clap), everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(e) => AppError::Schema(e.to_string()),
            other => AppError::Llm(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_exits_with_usage_code() {
        let err = AppError::InvalidArgument("cobol".to_string());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_runtime_failures_exit_with_one() {
        let err = AppError::Render("pdflatex exited with status 1".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_llm_parse_error_becomes_schema_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = LlmError::Parse(parse_err).into();
        assert!(matches!(err, AppError::Schema(_)));
    }

    #[test]
    fn test_llm_empty_content_stays_llm_error() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
