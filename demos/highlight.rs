//! Highlighting Fragmented Text
//!
//! Marks tokens in a document whose sentences are split across markup runs.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example highlight
//! ```

use std::sync::Arc;

use tokmark::{Config, Highlighter, MarkupRenderer, RunTree, WordBoundaryAnalyzer};

fn main() {
    env_logger::init();

    // <p>The <b>qu</b>ick brown <a>fox</a> jumps.</p>
    let mut tree = RunTree::from_runs(["The ", "qu", "ick brown ", "fox", " jumps."]);

    let config = Config::default();
    let highlighter = Highlighter::new(Arc::new(WordBoundaryAnalyzer::default()), config);

    match highlighter.run(&mut tree) {
        Ok(run) => {
            for projection in &run.projections {
                println!("{}", projection.chunk);
                for piece in &projection.pieces {
                    match piece.segment {
                        Some(index) => println!("    [{index}] {:?}", piece.text),
                        None => println!("        {:?}", piece.text),
                    }
                }
            }
            for diagnostic in &run.diagnostics {
                eprintln!("warning: {diagnostic}");
            }
        }
        Err(e) => eprintln!("highlighting failed: {e}"),
    }

    println!("\n{}", tree.to_markup(&MarkupRenderer::default()));
}
