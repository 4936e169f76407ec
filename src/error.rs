//! error.rs
//!
//! Error type for the fallible edges of the crate: reading configuration and
//! JSON files, and the input contract of the simple event script builder.
//!
//! Rendering itself never returns an error. Missing or malformed parish data
//! degrades to the `"empty"` sentinel, the `male/female` fallback or a fixed
//! advisory sentence instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the rendering pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON document could not be decoded.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A render configuration could not be parsed.
    #[error("invalid render configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The event carries no raw field values.
    #[error("event must have field_values")]
    MissingFieldValues,

    /// The event type defines no input fields.
    #[error("event type must have input_field_definitions")]
    MissingFieldDefinitions,
}

pub type Result<T> = std::result::Result<T, Error>;
