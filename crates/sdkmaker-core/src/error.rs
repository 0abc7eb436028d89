use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// Closed set of failure kinds produced by the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing required input at any pipeline stage.
    Validation,
    /// Raw text matches neither supported serialization format.
    ContentParsing,
    /// Transport-level failure fetching a remote document.
    Network,
}

impl ErrorKind {
    /// Human-readable category, carried in the error value.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation Error",
            ErrorKind::ContentParsing => "Content Parsing Error",
            ErrorKind::Network => "Network Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::ContentParsing => "ContentParsingError",
            ErrorKind::Network => "NetworkError",
        };
        write!(f, "{name}")
    }
}

/// How severe a failure is. Everything the pipeline raises today is fatal
/// to its task, so `Error` is the only severity the factories assign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// Value-carrying pipeline failure: kind, originating method, message,
/// structured details, severity, and timestamp.
#[derive(Debug, Clone, Error)]
#[error("[{kind}] in {method}: {message}")]
pub struct SdkError {
    pub kind: ErrorKind,
    pub method: String,
    pub message: String,
    pub details: Value,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl SdkError {
    fn new(kind: ErrorKind, method: &str, message: impl Into<String>, details: Value) -> Self {
        Self {
            kind,
            method: method.to_string(),
            message: message.into(),
            details,
            severity: Severity::Error,
            timestamp: Utc::now(),
        }
    }

    pub fn validation(method: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, method, message, Value::Null)
    }

    pub fn content_parsing(method: &str, message: impl Into<String>, details: Value) -> Self {
        Self::new(ErrorKind::ContentParsing, method, message, details)
    }

    pub fn network(method: &str, message: impl Into<String>, details: Value) -> Self {
        Self::new(ErrorKind::Network, method, message, details)
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}
