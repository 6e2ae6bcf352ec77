//! Boundary to the external converter that turns native project files into
//! record sets.

use crate::error::ConversionError;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Produces a record set for the model to be built from.
pub trait RecordSource {
    fn record_set(&self) -> Result<Value, ConversionError>;
}

impl RecordSource for Value {
    fn record_set(&self) -> Result<Value, ConversionError> {
        Ok(self.clone())
    }
}

/// A record set the converter already wrote to disk as JSON.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn record_set(&self) -> Result<Value, ConversionError> {
        debug!(path = %self.path.display(), "loading converted record set");
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

const ERROR_PREFIX: &str = "Conversion Error: ";

impl ConversionError {
    /// Map the converter's textual error channel onto a failure reason.
    ///
    /// Only the text following the converter's error prefix is examined; when
    /// the prefix is absent the whole trimmed output is used.
    pub fn classify(stderr: &str) -> Self {
        let message = stderr
            .find(ERROR_PREFIX)
            .map(|at| &stderr[at + ERROR_PREFIX.len()..])
            .unwrap_or(stderr)
            .trim()
            .to_string();
        let lowered = message.to_ascii_lowercase();
        if lowered.contains("unsupported file type") {
            ConversionError::UnsupportedFormat { message }
        } else if lowered.contains("password protected") {
            ConversionError::PasswordProtected { message }
        } else {
            ConversionError::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reads_the_text_after_the_prefix() {
        let err = ConversionError::classify(
            "Exception in thread main\nConversion Error: Unsupported file type\n",
        );
        assert!(matches!(
            err,
            ConversionError::UnsupportedFormat { ref message } if message == "Unsupported file type"
        ));
    }

    #[test]
    fn classify_detects_password_protection() {
        let err = ConversionError::classify("Conversion Error: File is password protected");
        assert!(matches!(err, ConversionError::PasswordProtected { .. }));
    }

    #[test]
    fn anything_else_is_a_plain_failure() {
        let err = ConversionError::classify("java.lang.OutOfMemoryError");
        assert!(matches!(
            err,
            ConversionError::Failed { ref message } if message == "java.lang.OutOfMemoryError"
        ));
    }
}
