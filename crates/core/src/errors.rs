use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("quantity must be a number greater than zero (got {input:?})")]
    InvalidQuantity { input: String },
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. } => "Quantity must be greater than 0.",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("persistence failure: {0}")]
    Persistence(String),
}
