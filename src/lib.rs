//! # tokmark
//!
//! Mark tokenizer output in place on text that rendering has broken apart.
//!
//! ## The Problem
//!
//! An analyzer tokenizes the flat text of a rendered document. The document
//! itself is a tree, and markup cuts its sentences into disjoint runs:
//!
//! ```text
//! Markup:    <p>The <b>ca</b>t sat.</p>
//! Runs:      "The " | "ca" | "t sat."
//! Tokens:    The · cat · sat · .
//! ```
//!
//! Nothing lines up. `cat` spans two runs, and runs may contain characters
//! the analyzer never saw. We still want every token marked where it sits,
//! with one stable handle per token, without adding, dropping or reordering
//! a single character.
//!
//! ## The Pipeline
//!
//! ```text
//! tree ──text()──> Analyzer ──records──> decode_records ──> [Segment]
//!   │                                                          │
//!   └──walk()──> [Chunk] ─────────────> Projector::project <───┘
//!                                              │
//!                              [ChunkProjection] ──apply()──> tree
//! ```
//!
//! Only the projector has real algorithmic content; see [`Projector`]. The
//! analyzer and the tree are collaborators behind the [`Analyzer`] and
//! [`TextTree`] traits.
//!
//! ## Markers
//!
//! A word's marker is its position in the segment list. Two segments with
//! the same text at different positions stay distinguishable, and every
//! fragment of a token split across runs carries the same index.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokmark::{Chunk, Piece, Projector, Segment};
//!
//! let segments = [
//!     Segment::word("The"),
//!     Segment::text(": "),
//!     Segment::word("cat"),
//!     Segment::text(":."),
//! ];
//! let chunks = Chunk::collect(["The cat."]);
//!
//! let out = Projector::default().project(&segments, &chunks);
//! assert_eq!(
//!     out[0].pieces,
//!     vec![
//!         Piece::marked(0, "The"),
//!         Piece::plain(" "),
//!         Piece::marked(2, "cat"),
//!         Piece::plain("."),
//!     ]
//! );
//! ```
//!
//! ## Failure Model
//!
//! Nothing here is fatal. Malformed records are dropped and reported, a
//! missing analyzer leaves the text plain, surplus text comes out unmarked
//! and a run the tree cannot find is skipped.

mod analyzer;
mod chunk;
mod config;
mod error;
mod highlight;
mod markup;
mod piece;
mod projector;
mod records;
mod segment;
mod tree;

pub use analyzer::WordBoundaryAnalyzer;
pub use chunk::{is_accepted, Chunk};
pub use config::{AnalyzeSettings, Config, OutputFormat, ProjectorConfig, DEFAULT_TEXT_PREFIX};
pub use error::{Error, Result};
pub use highlight::{HighlightRun, Highlighter, RunTicket};
pub use markup::{MarkupRenderer, DEFAULT_ID_PREFIX};
pub use piece::{ChunkProjection, Piece};
pub use projector::{PendingMatch, ProjectionRun, Projector};
pub use records::{decode_records, Decoded};
pub use segment::{Resolved, Segment};
pub use tree::{apply, walk, Run, RunTree, TextTree};

/// A source of segment records.
///
/// Implementations turn text into line-delimited records, one segment per
/// line (see [`decode_records`]):
///
/// ```rust
/// use tokmark::{AnalyzeSettings, Analyzer, Result};
///
/// struct Whole;
///
/// impl Analyzer for Whole {
///     fn analyze(&self, text: &str, _settings: &AnalyzeSettings) -> Result<String> {
///         Ok(format!("{{\"w\":{:?}}}\n", text))
///     }
/// }
///
/// let records = Whole.analyze("cat", &AnalyzeSettings::default()).unwrap();
/// assert_eq!(records, "{\"w\":\"cat\"}\n");
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze `text`, returning one record per line.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::Analyzer`] if analysis fails, or
    /// [`Error::UnsupportedFormat`] for output shapes they cannot produce.
    fn analyze(&self, text: &str, settings: &AnalyzeSettings) -> Result<String>;
}
