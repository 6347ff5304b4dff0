//! The rendered tree: where chunks come from and where pieces go.
//!
//! Projection is pure. Touching the tree happens in two separate steps
//! around it:
//!
//! ```text
//! walk(tree) -> chunks -> Projector::project -> projections -> apply(tree)
//! ```
//!
//! [`TextTree`] is the seam a rendering environment implements. [`RunTree`]
//! is a minimal in-memory tree: a flat list of text runs, each either still
//! raw or already replaced by pieces.

use crate::{Chunk, ChunkProjection, Error, MarkupRenderer, Piece, Result};

/// A rendered tree of text runs.
pub trait TextTree {
    /// All text runs in document order, with their ids.
    fn runs(&self) -> Vec<(usize, &str)>;

    /// Replace the content of `run` with `pieces`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AnchorNotFound`] if the tree has no such run.
    fn replace(&mut self, run: usize, pieces: &[Piece]) -> Result<()>;

    /// The text handed to the analyzer.
    fn text(&self) -> String {
        self.runs().into_iter().map(|(_, text)| text).collect()
    }
}

/// Collect the chunks the projector sees: every run that is not
/// whitespace-only.
pub fn walk<T: TextTree + ?Sized>(tree: &T) -> Vec<Chunk> {
    Chunk::collect_with_ids(tree.runs())
}

/// Realize projections in the tree.
///
/// Projections with no pieces leave their run untouched. A run that cannot
/// be found is logged and skipped. Returns the number of runs replaced.
pub fn apply<T: TextTree + ?Sized>(tree: &mut T, projections: &[ChunkProjection]) -> usize {
    let mut replaced = 0;
    for projection in projections.iter().filter(|p| p.is_modified()) {
        match tree.replace(projection.chunk.run, &projection.pieces) {
            Ok(()) => replaced += 1,
            Err(e) => log::warn!("skipping {}: {e}", projection.chunk),
        }
    }
    replaced
}

/// One run of a [`RunTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Text as rendered.
    Raw(String),
    /// Text replaced by projected pieces.
    Projected {
        /// The run's original text.
        text: String,
        /// Pieces covering `text`.
        pieces: Vec<Piece>,
    },
}

impl Run {
    /// The run's text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Raw(text) | Self::Projected { text, .. } => text,
        }
    }
}

/// A flat, in-memory list of text runs.
///
/// ```rust
/// use tokmark::{RunTree, TextTree};
///
/// let tree = RunTree::from_runs(["The ", "ca", "t."]);
/// assert_eq!(tree.text(), "The cat.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTree {
    runs: Vec<Run>,
}

impl RunTree {
    /// Build a tree from raw runs in document order.
    pub fn from_runs<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runs: runs.into_iter().map(|s| Run::Raw(s.into())).collect(),
        }
    }

    /// The runs.
    #[must_use]
    pub fn as_runs(&self) -> &[Run] {
        &self.runs
    }

    /// Render the whole tree as markup.
    #[must_use]
    pub fn to_markup(&self, renderer: &MarkupRenderer) -> String {
        let mut out = String::new();
        for run in &self.runs {
            match run {
                Run::Raw(text) => out.push_str(&html_escape::encode_text(text)),
                Run::Projected { pieces, .. } => {
                    for piece in pieces {
                        renderer.render_piece_into(piece, &mut out);
                    }
                }
            }
        }
        out
    }
}

impl TextTree for RunTree {
    fn runs(&self) -> Vec<(usize, &str)> {
        self.runs.iter().map(Run::text).enumerate().collect()
    }

    fn replace(&mut self, run: usize, pieces: &[Piece]) -> Result<()> {
        let slot = self.runs.get_mut(run).ok_or(Error::AnchorNotFound(run))?;
        let text = slot.text().to_string();
        *slot = Run::Projected {
            text,
            pieces: pieces.to_vec(),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Projector, Segment};

    #[test]
    fn test_walk_skips_whitespace_runs() {
        let tree = RunTree::from_runs(["a", "\n", " b"]);
        let chunks = walk(&tree);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].run, 2);
        assert_eq!(chunks[1].text, " b");
    }

    #[test]
    fn test_apply_replaces_modified_runs() {
        let mut tree = RunTree::from_runs(["ca", "  ", "t"]);
        let segments = [Segment::word("cat")];
        let projections = Projector::default().project(&segments, &walk(&tree));

        assert_eq!(apply(&mut tree, &projections), 2);
        assert_eq!(tree.as_runs()[1], Run::Raw("  ".into()));
        assert_eq!(
            tree.to_markup(&MarkupRenderer::default()),
            "<span id=\"ℋ0\">ca</span>  <span id=\"ℋ0\">t</span>"
        );
    }

    #[test]
    fn test_apply_skips_missing_run() {
        let mut tree = RunTree::from_runs(["x"]);
        let projections = vec![
            ChunkProjection {
                chunk: Chunk::new("y", 9, 0),
                pieces: vec![Piece::plain("y")],
            },
            ChunkProjection {
                chunk: Chunk::new("x", 0, 1),
                pieces: vec![Piece::marked(0, "x")],
            },
        ];
        assert_eq!(apply(&mut tree, &projections), 1);
    }

    #[test]
    fn test_apply_leaves_empty_projection() {
        let mut tree = RunTree::from_runs(["x"]);
        let projections = vec![ChunkProjection {
            chunk: Chunk::new("x", 0, 0),
            pieces: vec![],
        }];
        assert_eq!(apply(&mut tree, &projections), 0);
        assert_eq!(tree.as_runs()[0], Run::Raw("x".into()));
    }

    #[test]
    fn test_replace_unknown_run() {
        let mut tree = RunTree::default();
        assert!(matches!(
            tree.replace(3, &[]),
            Err(Error::AnchorNotFound(3))
        ));
    }

    #[test]
    fn test_raw_text_escaped() {
        let tree = RunTree::from_runs(["a < b"]);
        assert_eq!(tree.to_markup(&MarkupRenderer::default()), "a &lt; b");
    }
}
