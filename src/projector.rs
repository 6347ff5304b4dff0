//! Segment projection: laying a tokenization back onto fragmented text.
//!
//! ## The Problem
//!
//! An analyzer tokenized the flat text of a document. The document itself
//! is rendered as a tree, and markup splits sentences into disjoint runs.
//! We want every token's characters marked in place, run by run:
//!
//! ```text
//! Segments: [w:"The"] [t:" "] [w:"cat"] [t:"."]
//! Chunks:   "The ca" | "t."
//!
//! Chunk 0:  [0:"The"] " " [2:"ca"]
//! Chunk 1:  [2:"t"] "."           <- same marker as "ca"
//! ```
//!
//! ## The Algorithm
//!
//! One left-to-right pass. A segment cursor is shared by all chunks; each
//! chunk has its own character cursor. At every position:
//!
//! 1. No segments left: the rest of the chunk is plain.
//! 2. A segment was cut short at a chunk boundary (the *pending match*):
//!    continue it with the longest common prefix.
//! 3. Otherwise match the current segment afresh. A full match advances the
//!    segment cursor. A partial match becomes the pending match. No match
//!    means the character is an *interruption*: it is emitted plain and the
//!    same segment is tried again at the next character.
//!
//! There is no lookahead. An unmatched character is never blamed on the
//! segment list; the current segment simply waits for its text to show up.
//!
//! When a pending match cannot continue, the segment is tried afresh at the
//! same position. If that fails too, the character is an interruption and
//! the pending match survives it:
//!
//! ```text
//! Segments: [w:"cat"]
//! Chunk:    "c-at"
//!
//! [0:"c"] "-" [0:"at"]
//! ```
//!
//! ## Conservation
//!
//! Every input character lands in exactly one piece, in order. Mismatched
//! input degrades instead of failing: surplus chunk text comes out plain,
//! surplus segments are never reached.

use crate::{Chunk, ChunkProjection, Piece, ProjectorConfig, Resolved, Segment};

/// Projects a segment list onto a chunk list.
///
/// ## Example
///
/// ```rust
/// use tokmark::{Chunk, Piece, Projector, Segment};
///
/// let segments = [
///     Segment::word("The"),
///     Segment::text(": "),
///     Segment::word("cat"),
///     Segment::text(":."),
/// ];
/// let chunks = Chunk::collect(["The ca", "t."]);
///
/// let out = Projector::default().project(&segments, &chunks);
/// assert_eq!(out[0].pieces.last(), Some(&Piece::marked(2, "ca")));
/// assert_eq!(out[1].pieces[0], Piece::marked(2, "t"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Projector {
    config: ProjectorConfig,
}

impl Projector {
    /// Create a projector with the given configuration.
    #[must_use]
    pub fn new(config: ProjectorConfig) -> Self {
        Self { config }
    }

    /// The projector's configuration.
    #[must_use]
    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Project `segments` onto `chunks` in one run.
    ///
    /// Returns one projection per chunk, in order.
    #[must_use]
    pub fn project(&self, segments: &[Segment], chunks: &[Chunk]) -> Vec<ChunkProjection> {
        let mut run = self.start(segments);
        let out: Vec<_> = chunks.iter().map(|chunk| run.project_chunk(chunk)).collect();
        log::debug!(
            "projected {} segments onto {} chunks (stopped at segment {})",
            segments.len(),
            out.len(),
            run.next_segment()
        );
        out
    }

    /// Start a run over `segments`, to be fed chunks one at a time.
    ///
    /// Each run owns its cursor state; runs never share it.
    #[must_use]
    pub fn start<'s>(&'s self, segments: &'s [Segment]) -> ProjectionRun<'s> {
        ProjectionRun {
            segments,
            prefix: self.config.text_prefix(),
            next: 0,
            pending: None,
        }
    }
}

/// A segment whose match was cut short and continues in a later chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMatch<'s> {
    /// Index of the segment in the list.
    pub segment: usize,
    /// The segment's full resolved text.
    pub full_text: &'s str,
    /// Bytes of `full_text` already emitted.
    pub matched: usize,
    /// Whether emitted pieces are marked.
    pub is_word: bool,
}

impl<'s> PendingMatch<'s> {
    fn remainder(&self) -> &'s str {
        &self.full_text[self.matched..]
    }
}

/// Cursor state for one projection run.
#[derive(Debug, Clone)]
pub struct ProjectionRun<'s> {
    segments: &'s [Segment],
    prefix: Option<&'s str>,
    next: usize,
    pending: Option<PendingMatch<'s>>,
}

impl<'s> ProjectionRun<'s> {
    /// Index of the segment the run will match next.
    #[must_use]
    pub fn next_segment(&self) -> usize {
        self.next
    }

    /// The segment carried over from the previous chunk, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingMatch<'s>> {
        self.pending.as_ref()
    }

    /// Whether every segment has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.segments.len()
    }

    /// Project the next chunk, advancing the run.
    pub fn project_chunk(&mut self, chunk: &Chunk) -> ChunkProjection {
        ChunkProjection {
            chunk: chunk.clone(),
            pieces: self.project_text(&chunk.text),
        }
    }

    fn project_text(&mut self, text: &str) -> Vec<Piece> {
        let segments = self.segments;
        let mut pieces = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(segment) = segments.get(self.next) else {
                pieces.push(Piece::plain(&text[pos..]));
                break;
            };
            let rest = &text[pos..];

            if let Some(pending) = self.pending.as_mut() {
                let n = common_prefix_len(pending.remainder(), rest);
                if n > 0 {
                    pieces.push(piece(pending.segment, pending.is_word, &rest[..n]));
                    pos += n;
                    pending.matched += n;
                    if pending.matched == pending.full_text.len() {
                        self.next = pending.segment + 1;
                        self.pending = None;
                    }
                    continue;
                }
            }

            let Some(Resolved { text: want, is_word }) = segment.resolve(self.prefix) else {
                log::warn!("skipping invalid segment {}: {:?}", self.next, segment);
                self.next += 1;
                continue;
            };
            if want.is_empty() {
                self.next += 1;
                continue;
            }

            let n = common_prefix_len(want, rest);
            if n == 0 {
                // Interruption. A pending match, if any, waits it out.
                let width = rest.chars().next().map_or(rest.len(), char::len_utf8);
                pieces.push(Piece::plain(&rest[..width]));
                pos += width;
                continue;
            }

            pieces.push(piece(self.next, is_word, &rest[..n]));
            pos += n;
            if n == want.len() {
                self.next += 1;
                self.pending = None;
            } else {
                self.pending = Some(PendingMatch {
                    segment: self.next,
                    full_text: want,
                    matched: n,
                    is_word,
                });
            }
        }

        pieces
    }
}

fn piece(segment: usize, is_word: bool, text: &str) -> Piece {
    if is_word {
        Piece::marked(segment, text)
    } else {
        Piece::plain(text)
    }
}

/// Length in bytes of the longest common prefix, on char boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i)
}
