//! Error types for uncolumn library.
//!
//! The reflow transform itself cannot fail; every variant here comes from the
//! boundary: reading the source, decoding it, writing the sink, or
//! serializing a report.

use std::io;
use thiserror::Error;

/// Result type alias for uncolumn operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around a reflow.
#[derive(Error, Debug)]
pub enum Error {
    /// The input source could not be opened or read.
    #[error("Cannot read source {origin}: {source}")]
    Source {
        /// Path or label of the source (e.g. `<stdin>`)
        origin: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input source is not valid UTF-8.
    #[error("Source {origin} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Decode {
        /// Path or label of the source
        origin: String,
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// The output sink could not be created or written.
    #[error("Cannot write output {target}: {source}")]
    Sink {
        /// Path or label of the sink
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error serializing a reflow report.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Whether the failure happened while reading or decoding the input.
    pub fn is_source(&self) -> bool {
        matches!(self, Error::Source { .. } | Error::Decode { .. })
    }

    /// Whether the failure happened while writing the output.
    pub fn is_sink(&self) -> bool {
        matches!(self, Error::Sink { .. })
    }
}
