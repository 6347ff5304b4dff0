//! Output pieces: what a chunk becomes after projection.

use crate::Chunk;

/// A run of output text, either plain or marked with its owning segment.
///
/// Pieces of one segment split across chunks (or around an interruption)
/// carry the same `segment`, so a renderer can give every fragment of a
/// straddling token the same marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The piece text.
    pub text: String,
    /// Index of the owning word segment, or `None` for plain text.
    pub segment: Option<usize>,
}

impl Piece {
    /// A plain, unmarked piece.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segment: None,
        }
    }

    /// A piece marked with the segment at `segment`.
    #[must_use]
    pub fn marked(segment: usize, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            segment: Some(segment),
        }
    }

    /// Whether this piece carries a segment marker.
    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.segment.is_some()
    }
}

/// A chunk together with the pieces it projects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkProjection {
    /// The input chunk.
    pub chunk: Chunk,
    /// Output pieces, in order. Their concatenation is `chunk.text`.
    pub pieces: Vec<Piece>,
}

impl ChunkProjection {
    /// Whether the apply step should replace this chunk's run.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.pieces.is_empty()
    }

    /// Concatenation of all piece texts.
    #[must_use]
    pub fn reassemble(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }

    /// Segment indices referenced by marked pieces, consecutive repeats removed.
    #[must_use]
    pub fn segments(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.pieces.iter().filter_map(|p| p.segment).collect();
        out.dedup();
        out
    }
}
