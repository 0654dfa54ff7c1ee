/*!
 * Error types for the redletter application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised when a corpus document does not have the expected shape.
///
/// Absence of a book, chapter or verse is never an error (sparse documents
/// are expected across translations); these variants cover values that are
/// present but of the wrong kind.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The top-level "books" key is missing or not an object
    #[error("document has no \"books\" object at the top level")]
    MissingBooks,

    /// A book, chapter or container value exists but is not an object
    #[error("expected an object at {path}")]
    NotAnObject {
        /// Dotted path into the document, e.g. "books.John.chapters.3"
        path: String,
    },

    /// A verse value exists but is not a string
    #[error("verse {book} {chapter}:{verse} is not a text value")]
    VerseNotText {
        /// Book name as it appears in the document
        book: String,
        /// Chapter number
        chapter: u32,
        /// Verse number
        verse: u32,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from corpus document structure
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error parsing a corpus file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
