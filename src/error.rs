//! Error types for erd-picker.
//!
//! The dialog itself never fails; these errors belong to its collaborators:
//! configuration loading, reading the project data document, the
//! session-scoped key/value store, and the terminal.
//!
//! ## Error Categories
//!
//! - [`ConfigError`]: Errors from configuration loading and validation
//! - [`DataError`]: Errors reading or parsing the project data document
//! - [`SessionError`]: Errors from the session-scoped storage file
//! - [`UiError`]: Errors from terminal UI operations
//!
//! ## Example
//!
//! ```rust
//! use erd_picker::error::{ErdPickerError, DataError};
//!
//! fn example() -> Result<(), ErdPickerError> {
//!     Err(DataError::Parse {
//!         source_name: "stdin".to_string(),
//!         message: "expected value".to_string(),
//!     })?;
//!     Ok(())
//! }
//! # assert!(example().is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the erd-picker library.
#[derive(Error, Debug)]
pub enum ErdPickerError {
    /// An error occurred while loading or validating configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The project data document could not be loaded.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// The session-scoped storage could not be accessed.
    #[error("Session storage error: {0}")]
    Session(#[from] SessionError),

    /// An error occurred in the terminal UI.
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur during configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file at {path}: {message}")]
    FileReadError {
        /// Path to the config file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError {
        /// Path to the config file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Neither `XDG_CONFIG_HOME` nor a home directory is available.
    #[error("Could not determine a configuration directory")]
    NoConfigDirectory,

    /// Failed to create config directory.
    #[error("Failed to create config directory at {path}: {message}")]
    DirectoryCreationError {
        /// Path where directory creation failed.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

/// Errors raised while loading the organization/project document.
#[derive(Error, Debug)]
pub enum DataError {
    /// The data source could not be read.
    #[error("Failed to read project data from {source_name}: {message}")]
    Read {
        /// File path or `stdin`.
        source_name: String,
        /// Underlying I/O message.
        message: String,
    },

    /// The data source is not a valid project document.
    #[error("Failed to parse project data from {source_name}: {message}")]
    Parse {
        /// File path or `stdin`.
        source_name: String,
        /// Parse error message.
        message: String,
    },

    /// `-` was given as the data source while stdin is a terminal.
    #[error("Refusing to read project data from stdin: stdin is a terminal, pipe a document or pass --data <PATH>")]
    InteractiveStdin,
}

/// Errors from the file-backed session storage.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The storage file exists but could not be read.
    #[error("Failed to read session storage at {path}: {message}")]
    Read {
        /// Path to the storage file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The storage file could not be written.
    #[error("Failed to write session storage at {path}: {message}")]
    Write {
        /// Path to the storage file.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The storage file is not a JSON object of strings.
    #[error("Session storage at {path} is corrupt: {message}")]
    Corrupt {
        /// Path to the storage file.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Errors that can occur in the terminal UI.
#[derive(Error, Debug)]
pub enum UiError {
    /// Failed to initialize the terminal.
    #[error("Failed to initialize terminal: {0}")]
    TerminalInitError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Results using ErdPickerError.
///
/// Not re-exported from the crate root to avoid shadowing `anyhow::Result`.
pub type ErdPickerResult<T> = std::result::Result<T, ErdPickerError>;
