pub mod cdn;
pub mod parse;
pub mod resolve;
pub mod version;

use serde::Serialize;

/// Error detail for JSON output.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
