use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
}
