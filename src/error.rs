use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Template file not found: {path}")]
    TemplateNotFound { path: String },

    /// Raised when `--vars` or `--set` cannot be turned into variables.
    #[error("Invalid variables: {0}.")]
    VariablesError(String),

    #[error("Failed to parse variables as JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with envplate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints `Error: <message>` to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
