//! Error types for tokmark.
//!
//! The projector itself never fails. These errors belong to the
//! collaborators around it: record decoding, the analyzer, the apply step
//! and configuration loading. None of them is fatal to a caller; most are
//! logged and absorbed where they occur.

/// Errors raised around a projection run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record line is not valid JSON.
    #[error("malformed segment record on line {line}: {source}")]
    MalformedRecord {
        /// One-based line number in the record stream.
        line: usize,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A record is valid JSON but neither a word nor a text segment.
    #[error("record on line {line} is neither a word nor a text segment")]
    UnknownSegmentShape {
        /// One-based line number in the record stream.
        line: usize,
    },

    /// No analyzer is available, or its resource failed to load.
    #[error("analyzer is not available")]
    MissingAnalyzer,

    /// The analyzer emits a format that cannot be decoded into segments.
    #[error("analyzer output format {0:?} cannot be decoded into segments")]
    UnsupportedFormat(crate::OutputFormat),

    /// The analyzer failed while processing text.
    #[error("analyzer error: {0}")]
    Analyzer(String),

    /// The tree has no run for a projected chunk.
    #[error("no text run {0} in the rendered tree")]
    AnchorNotFound(usize),

    /// A newer run started before this one was committed.
    #[error("run {ticket} is stale (current run is {current})")]
    StaleRun {
        /// The ticket of the run being committed.
        ticket: u64,
        /// The most recently issued ticket.
        current: u64,
    },

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for tokmark operations.
pub type Result<T> = std::result::Result<T, Error>;
