use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown match type code from phone number oracle: {0}")]
    UnknownMatchType(i32),
}
