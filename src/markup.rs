//! Rendering pieces as markup.
//!
//! Marked pieces become addressable inline containers keyed by segment
//! index; everything else is escaped text:
//!
//! ```text
//! [0:"The"] " " [2:"ca"]   ->   <span id="ℋ0">The</span> <span id="ℋ2">ca</span>
//! ```
//!
//! Every fragment of a straddling token gets the same id, so a consumer
//! looking a token up by index finds all of its pieces.

use crate::Piece;

/// The id prefix used for segment markers.
pub const DEFAULT_ID_PREFIX: &str = "ℋ";

/// Renders pieces as HTML-style markup.
#[derive(Debug, Clone)]
pub struct MarkupRenderer {
    id_prefix: String,
}

impl MarkupRenderer {
    /// Create a renderer whose marker ids start with `id_prefix`.
    #[must_use]
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
        }
    }

    /// The marker id for a segment.
    #[must_use]
    pub fn marker_id(&self, segment: usize) -> String {
        format!("{}{}", self.id_prefix, segment)
    }

    /// Render one piece, appending to `out`.
    pub fn render_piece_into(&self, piece: &Piece, out: &mut String) {
        let text = html_escape::encode_text(&piece.text);
        match piece.segment {
            Some(segment) => {
                let id = self.marker_id(segment);
                out.push_str("<span id=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(&id));
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }

    /// Render a sequence of pieces.
    ///
    /// ```rust
    /// use tokmark::{MarkupRenderer, Piece};
    ///
    /// let html = MarkupRenderer::default()
    ///     .render(&[Piece::marked(0, "a<b"), Piece::plain(" & ")]);
    /// assert_eq!(html, "<span id=\"ℋ0\">a&lt;b</span> &amp; ");
    /// ```
    #[must_use]
    pub fn render(&self, pieces: &[Piece]) -> String {
        let mut out = String::new();
        for piece in pieces {
            self.render_piece_into(piece, &mut out);
        }
        out
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marked_and_plain() {
        let html = MarkupRenderer::default().render(&[
            Piece::marked(0, "The"),
            Piece::plain(" "),
            Piece::marked(2, "ca"),
        ]);
        assert_eq!(html, "<span id=\"ℋ0\">The</span> <span id=\"ℋ2\">ca</span>");
    }

    #[test]
    fn test_custom_prefix() {
        let renderer = MarkupRenderer::new("seg-");
        assert_eq!(renderer.marker_id(7), "seg-7");
        assert_eq!(
            renderer.render(&[Piece::marked(7, "x")]),
            "<span id=\"seg-7\">x</span>"
        );
    }

    #[test]
    fn test_prefix_is_attribute_escaped() {
        let renderer = MarkupRenderer::new("a\"b");
        assert_eq!(
            renderer.render(&[Piece::marked(1, "x")]),
            "<span id=\"a&quot;b1\">x</span>"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(MarkupRenderer::default().render(&[]), "");
    }
}
