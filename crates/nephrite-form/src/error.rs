use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    #[error("unknown field: {0}")]
    UnknownField(String),
}
