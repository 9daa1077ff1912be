//! Errors raised at the byte boundary of the calculator.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    /// Input bytes are not valid UTF-8. `valid_up_to` is the length of the
    /// longest valid prefix.
    #[error("message is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl From<std::str::Utf8Error> for MessageError {
    fn from(err: std::str::Utf8Error) -> Self {
        MessageError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
