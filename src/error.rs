use thiserror::Error;

/// Errors that can occur while importing a recipe page
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    /// The page does not contain the expected recipe sections
    #[error("Recipe section not found: {0}")]
    SectionNotFound(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
