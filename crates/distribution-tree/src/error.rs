use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Empty input provided")]
    EmptyInput,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount for {address}: {reason}")]
    InvalidAmount { address: String, reason: String },

    #[error("Recipient not in tree: {0}")]
    UnknownRecipient(String),

    #[error("Root mismatch: artifact has {expected}, recipients hash to {computed}")]
    RootMismatch { expected: String, computed: String },

    #[error("Serde Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex Error: {0}")]
    Hex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, TreeError>;
