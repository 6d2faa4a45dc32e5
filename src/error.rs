//! # Error Types
//!
//! This module defines all error types for the CAGED engine.
//!
//! The engine itself is total over well-formed input: once a [`Key`](crate::Key)
//! exists, deriving positions, chords, labels and overlays cannot fail. Errors
//! only come from the edges where strings enter the engine (tonics, modes,
//! numerals, labeling schemes, settings files) and from catalog validation.
//!
//! ## Error Types
//! - `InvalidKey` - Unrecognized tonic spelling or mode
//! - `InvalidNumeral` - Unknown roman-numeral chord id
//! - `InvalidScheme` - Unknown labeling scheme id
//! - `ConfigError` - Invalid YAML settings
//! - `Catalog` - Malformed static position data
//!
//! ## Usage
//! ```rust
//! use caged::{create_key, CagedError};
//!
//! match create_key("H", "major") {
//!     Ok(key) => println!("{:?}", key.scale_notes),
//!     Err(CagedError::InvalidKey(message)) => eprintln!("Bad key: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CagedError {
    /// Unrecognized tonic spelling or unsupported mode.
    ///
    /// A tonic must be a letter A-G optionally followed by a single `#` or `b`,
    /// and a mode must be `major` or `minor`.
    ///
    /// # Example
    /// ```
    /// # use caged::CagedError;
    /// let err = CagedError::InvalidKey("unrecognized tonic 'H'".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: unrecognized tonic 'H'");
    /// ```
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Unknown roman-numeral chord id such as `"VIII"`.
    #[error("Invalid chord numeral: {0}")]
    InvalidNumeral(String),

    /// Unknown labeling scheme id.
    #[error("Invalid labeling scheme: {0}")]
    InvalidScheme(String),

    /// Invalid settings.
    ///
    /// Occurs when YAML settings cannot be parsed or contain unsupported values.
    ///
    /// # Example
    /// ```
    /// # use caged::CagedError;
    /// let err = CagedError::ConfigError("num-frets must be at least 4".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: num-frets must be at least 4");
    /// ```
    #[error("Invalid settings: {0}")]
    ConfigError(String),

    /// Malformed position template in the static catalog.
    #[error("Catalog error in {shape} shape: {message}")]
    Catalog { shape: String, message: String },
}
