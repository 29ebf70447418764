//! Error types for the price list library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the price list library
#[derive(Error, Debug)]
pub enum Error {
    /// Top-level catalog value is not an object
    #[error("Catalog must be a JSON object mapping brand names to item arrays")]
    MalformedInput,

    /// A brand's value is not an array
    #[error("Brand \"{0}\" must contain an array")]
    InvalidBrandShape(String),

    /// An item lacks a usable name or numeric price
    #[error("Item {index} of brand \"{brand}\" must have a non-empty \"name\" and a numeric \"price\"")]
    InvalidItemShape { brand: String, index: usize },

    /// Pagination invoked with a zero capacity
    #[error("Page capacities must be positive (first page: {first}, other pages: {regular})")]
    InvalidCapacity { first: usize, regular: usize },

    /// Colour value could not be parsed
    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    /// No preset with this name
    #[error("Unknown theme colour: {0}")]
    UnknownTheme(String),

    /// Date parsing error
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
