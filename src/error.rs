//! Error types for retail-etl
//!
//! This module defines the error hierarchy for the entire pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every error is fatal: a stage either produces a complete output file or
//! propagates the failure to the caller. Nothing is retried at this layer.

use thiserror::Error;

/// The main error type for retail-etl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Source connection failed: {message}")]
    Connection { message: String },

    #[error("Failed to fetch relation '{relation}': {message}")]
    RelationFetch { relation: String, message: String },

    #[error("Failed to decode record from '{relation}': {message}")]
    RecordDecode { relation: String, message: String },

    // ============================================================================
    // Data Shape Errors
    // ============================================================================
    #[error("Unparseable date in column '{column}': '{value}' does not match {format}")]
    DateParse {
        column: String,
        value: String,
        format: String,
    },

    #[error("Schema mismatch on column '{column}': {message}")]
    SchemaMismatch { column: String, message: String },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a relation fetch error
    pub fn fetch(relation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RelationFetch {
            relation: relation.into(),
            message: message.into(),
        }
    }

    /// Create a record decode error
    pub fn decode(relation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RecordDecode {
            relation: relation.into(),
            message: message.into(),
        }
    }

    /// Create a date parse error
    pub fn date_parse(
        column: impl Into<String>,
        value: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self::DateParse {
            column: column.into(),
            value: value.into(),
            format: format.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for retail-etl
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::fetch("list_orders", "table missing");
        assert_eq!(
            err.to_string(),
            "Failed to fetch relation 'list_orders': table missing"
        );

        let err = Error::date_parse("Order Date", "2022-13-45", "%d-%m-%Y");
        assert_eq!(
            err.to_string(),
            "Unparseable date in column 'Order Date': '2022-13-45' does not match %d-%m-%Y"
        );

        let err = Error::schema_mismatch("Month-Year", "column not found");
        assert_eq!(
            err.to_string(),
            "Schema mismatch on column 'Month-Year': column not found"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
