use crate::field_type::ReadKind;
use polars::prelude::PolarsError;
use thiserror::Error;

/// The record set does not have the shape the model is built from.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("record set is missing required section '{section}'")]
    MissingSection { section: &'static str },

    #[error("section '{section}' must be a JSON {expected}")]
    MalformedSection {
        section: &'static str,
        expected: &'static str,
    },

    #[error("record #{index} in section '{section}' must be a JSON object")]
    MalformedRecord { section: &'static str, index: usize },
}

/// A single field could not be read through its typed accessor.
///
/// Raised lazily, when the accessor is called, so one bad value never aborts
/// construction of the rest of the model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("field '{field}' holds '{value}', which is not a date in zone {zone}")]
    DateFormat {
        field: String,
        value: String,
        zone: String,
    },

    #[error("field '{field}' is registered as {actual}, not {expected}")]
    TypeMismatch {
        field: String,
        expected: ReadKind,
        actual: ReadKind,
    },
}

/// Failure reported by the external converter that produces record sets.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("unsupported file format: {message}")]
    UnsupportedFormat { message: String },

    #[error("file is password protected: {message}")]
    PasswordProtected { message: String },

    #[error("conversion failed: {message}")]
    Failed { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("converter produced invalid JSON: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("task {unique_id} is its own ancestor")]
    ParentCycle { unique_id: i64 },

    #[error("field error: {0}")]
    Field(#[from] FieldError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Conversion(#[from] ConversionError),

    #[error("dataframe error: {0}")]
    Polars(#[from] PolarsError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, ProjectError>;
