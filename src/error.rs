//! Error types shared by the recipe store, timers and unit converter.
//!
//! None of these are fatal: panels catch them and render an inline message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitchenError {
    /// A timer was given a negative (or overflowing) duration component.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No recipe with this name exists in the store.
    #[error("Recipe '{0}' not found")]
    NotFound(String),

    /// Recipe name is empty or already taken.
    #[error("Recipe '{0}' already exists")]
    AlreadyExists(String),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    /// Text field content is not a number, or is negative where that is not allowed.
    #[error("Invalid numeric input '{0}'")]
    InvalidNumericInput(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl KitchenError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

pub type Result<T> = std::result::Result<T, KitchenError>;
