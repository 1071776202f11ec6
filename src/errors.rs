use axum::http::StatusCode;
use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Fatal failures of a log load. Any of these leaves the previous dataset in place.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("file is empty")]
    EmptyInput,

    #[error("no valid data in file")]
    NoValidData,

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is not valid UTF-8 text: {0}")]
    FileDecode(#[from] std::str::Utf8Error),
}

/// Why a single line was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    InvalidFormat,
    InvalidDate(String),
}

/// Non-fatal per-line diagnostic, collected during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the raw input.
    pub line: usize,
    pub issue: LineIssue,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.issue {
            LineIssue::InvalidFormat => write!(f, "line {} skipped: invalid format", self.line),
            LineIssue::InvalidDate(text) => {
                write!(f, "line {}: invalid date format: {text}", self.line)
            }
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            err @ PipelineError::FileRead { .. } => Self::internal(err),
            err => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
