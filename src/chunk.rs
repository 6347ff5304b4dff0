//! The Chunk type: one raw text run from a fragmented rendering.

/// A contiguous run of characters from a rendered tree.
///
/// Markup splits a logical sentence into several runs:
///
/// ```text
/// <p>The <b>ca</b>t sat.</p>
///
/// run 0: "The "
/// run 1: "ca"
/// run 2: "t sat."
/// ```
///
/// Chunk boundaries need not align with token boundaries; `cat` above
/// straddles runs 1 and 2.
///
/// ## Run vs Index
///
/// `run` identifies the run in the tree it came from, so the apply step can
/// find it again. `index` is the chunk's position among accepted chunks.
/// They differ once whitespace-only runs have been filtered out:
///
/// ```rust
/// use tokmark::Chunk;
///
/// let chunks = Chunk::collect(["Hello", "\n  ", "world"]);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].run, 2);
/// assert_eq!(chunks[1].index, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The run's text.
    pub text: String,
    /// Identifier of the run in its source tree.
    pub run: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, run: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            run,
            index,
        }
    }

    /// Build chunks from runs in document order, numbering runs by position.
    ///
    /// Empty and whitespace-only runs are rejected.
    pub fn collect<I, S>(runs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::collect_with_ids(runs.into_iter().enumerate())
    }

    /// Build chunks from `(run, text)` pairs in document order.
    pub fn collect_with_ids<I, S>(runs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        runs.into_iter()
            .filter(|(_, text)| is_accepted(text.as_ref()))
            .enumerate()
            .map(|(index, (run, text))| Self::new(text.as_ref(), run, index))
            .collect()
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Whether a run reaches the projector at all.
#[must_use]
pub fn is_accepted(text: &str) -> bool {
    !text.trim().is_empty()
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, run: {}, len: {} }}",
            self.index,
            self.run,
            self.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_rejected() {
        let chunks = Chunk::collect(["", " ", "\t\n", "a", " b "]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "a");
        assert_eq!(chunks[0].run, 3);
        assert_eq!(chunks[1].text, " b ");
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn test_explicit_ids() {
        let chunks = Chunk::collect_with_ids([(10, "x"), (11, "  "), (14, "y")]);
        assert_eq!(chunks, vec![Chunk::new("x", 10, 0), Chunk::new("y", 14, 1)]);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new("hello", 3, 1);
        assert_eq!(chunk.to_string(), "Chunk { index: 1, run: 3, len: 5 }");
    }
}
