//! The full pipeline: analyze, decode, walk, project, apply.
//!
//! A run has two halves. [`Highlighter::highlight`] is read-only: it asks
//! the analyzer for records and projects them onto the tree's runs.
//! [`Highlighter::commit`] writes the result into the tree, but only if no
//! newer run has started in the meantime. A caller that re-renders while a
//! run is in flight calls [`Highlighter::begin`] again, and the older run's
//! result is refused instead of clobbering the newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::tree::{apply, walk};
use crate::{
    decode_records, Analyzer, AnalyzeSettings, ChunkProjection, Config, Error, Projector, Result,
    TextTree,
};

/// Identifies one run. Only the most recently issued ticket can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTicket(u64);

impl RunTicket {
    /// The ticket's sequence number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The computed, not yet applied, result of a run.
#[derive(Debug)]
pub struct HighlightRun {
    ticket: RunTicket,
    /// One projection per accepted run of the tree.
    pub projections: Vec<ChunkProjection>,
    /// Records that could not be used.
    pub diagnostics: Vec<Error>,
}

impl HighlightRun {
    /// The ticket this run was computed under.
    #[must_use]
    pub fn ticket(&self) -> RunTicket {
        self.ticket
    }
}

/// Drives projection runs against an analyzer.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use tokmark::{Config, Highlighter, MarkupRenderer, RunTree, WordBoundaryAnalyzer};
///
/// let highlighter = Highlighter::new(Arc::new(WordBoundaryAnalyzer), Config::default());
/// let mut tree = RunTree::from_runs(["The ca", "t."]);
///
/// highlighter.run(&mut tree).unwrap();
/// assert_eq!(
///     tree.to_markup(&MarkupRenderer::default()),
///     "<span id=\"ℋ0\">The</span> <span id=\"ℋ2\">ca</span><span id=\"ℋ2\">t</span>."
/// );
/// ```
pub struct Highlighter {
    analyzer: Option<Arc<dyn Analyzer>>,
    projector: Projector,
    settings: AnalyzeSettings,
    generation: AtomicU64,
}

impl Highlighter {
    /// Create a highlighter backed by `analyzer`.
    #[must_use]
    pub fn new(analyzer: Arc<dyn Analyzer>, config: Config) -> Self {
        Self::with_analyzer(Some(analyzer), config)
    }

    /// Create a highlighter from a fallible analyzer loader.
    ///
    /// A failed load is logged; every run then reports
    /// [`Error::MissingAnalyzer`] and the tree stays plain.
    pub fn load<F>(load: F, config: Config) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn Analyzer>>,
    {
        let analyzer = match load() {
            Ok(analyzer) => Some(analyzer),
            Err(e) => {
                log::warn!("analyzer failed to load: {e}");
                None
            }
        };
        Self::with_analyzer(analyzer, config)
    }

    fn with_analyzer(analyzer: Option<Arc<dyn Analyzer>>, config: Config) -> Self {
        let config = config.synced();
        Self {
            analyzer,
            projector: Projector::new(config.projector),
            settings: config.analyze,
            generation: AtomicU64::new(0),
        }
    }

    /// Whether an analyzer is available.
    #[must_use]
    pub fn has_analyzer(&self) -> bool {
        self.analyzer.is_some()
    }

    /// Start a new run, superseding any run in flight.
    pub fn begin(&self) -> RunTicket {
        RunTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent run.
    #[must_use]
    pub fn is_current(&self, ticket: RunTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Compute a run over `tree` without modifying it.
    ///
    /// # Errors
    ///
    /// [`Error::MissingAnalyzer`] if no analyzer is available, or whatever
    /// the analyzer itself returns. Bad records are not errors; they end up
    /// in [`HighlightRun::diagnostics`].
    pub fn highlight<T: TextTree + ?Sized>(
        &self,
        tree: &T,
        ticket: RunTicket,
    ) -> Result<HighlightRun> {
        let Some(analyzer) = self.analyzer.as_ref() else {
            log::warn!("no analyzer available, leaving text unmarked");
            return Err(Error::MissingAnalyzer);
        };

        let records = analyzer.analyze(&tree.text(), &self.settings)?;
        let decoded = decode_records(&records);
        let chunks = walk(tree);
        let projections = self.projector.project(&decoded.segments, &chunks);

        Ok(HighlightRun {
            ticket,
            projections,
            diagnostics: decoded.diagnostics,
        })
    }

    /// Apply a computed run to `tree`. Returns the number of runs replaced.
    ///
    /// # Errors
    ///
    /// [`Error::StaleRun`] if a newer run was started after this one.
    pub fn commit<T: TextTree + ?Sized>(
        &self,
        tree: &mut T,
        run: &HighlightRun,
    ) -> Result<usize> {
        let current = self.generation.load(Ordering::SeqCst);
        if run.ticket.0 != current {
            log::debug!("discarding stale run {} (current {current})", run.ticket.0);
            return Err(Error::StaleRun {
                ticket: run.ticket.0,
                current,
            });
        }
        Ok(apply(tree, &run.projections))
    }

    /// Begin, compute and commit a run in one go.
    ///
    /// # Errors
    ///
    /// See [`Highlighter::highlight`] and [`Highlighter::commit`].
    pub fn run<T: TextTree + ?Sized>(&self, tree: &mut T) -> Result<HighlightRun> {
        let ticket = self.begin();
        let run = self.highlight(tree, ticket)?;
        self.commit(tree, &run)?;
        Ok(run)
    }
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("has_analyzer", &self.has_analyzer())
            .field("projector", &self.projector)
            .field("settings", &self.settings)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}
