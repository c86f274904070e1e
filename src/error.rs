use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("no payment strategy configured")]
    NoPaymentStrategy,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown topping: {0}")]
    UnknownTopping(String),
    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
