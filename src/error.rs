use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pal operations
#[derive(Error, Diagnostic, Debug)]
pub enum PalError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pal::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pal::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed colour: {input}")]
    #[diagnostic(code(pal::colour))]
    MalformedColour {
        input: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pal::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pal::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PalError>;
