use crate::core::io::render::TextGrid;
use crate::core::models::block::{Block, BlockSummary};
use crate::engine::config::OptimizationConfig;
use crate::engine::error::EngineError;
use crate::engine::mapper::WordMapper;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::{self, Termination};
use crate::engine::state::LayoutScore;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub mapper: WordMapper,
    pub score: LayoutScore,
    /// Score of the words in their given order.
    pub baseline: LayoutScore,
    pub permutation: Vec<usize>,
    pub permutations_tried: u64,
    pub termination: Termination,
}

impl OptimizationResult {
    pub fn blocks(&self) -> &[Block] {
        self.mapper.blocks()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.mapper.into_blocks()
    }

    /// The words in the order that produced the winning layout.
    pub fn ordered_words(&self) -> &[String] {
        self.mapper.words()
    }

    pub fn summaries(&self) -> Vec<BlockSummary> {
        self.blocks().iter().map(Block::summary).collect()
    }
}

/// Lays words out in the given order with a single greedy pass.
#[instrument(skip_all, name = "map_words")]
pub fn map_words<S: AsRef<str>>(words: &[S]) -> Vec<Block> {
    let mapper = WordMapper::build(words);
    info!(
        words = words.len(),
        score = %mapper.score(),
        "Mapped words in input order."
    );
    mapper.into_blocks()
}

/// Searches word orders for the layout with the fewest blocks, then the
/// smallest total area.
///
/// Always returns the best layout found, whether the search exhausted every
/// order, hit the permutation cap, or was asked to stop.
#[instrument(skip_all, name = "optimize_layout_workflow")]
pub fn optimize_layout<S: AsRef<str> + Sync>(
    words: &[S],
    config: &OptimizationConfig,
    reporter: &ProgressReporter,
) -> Result<OptimizationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Searching word orders",
    });

    let outcome = search::run(words, config, reporter)?;

    match outcome.termination {
        Termination::Exhausted => reporter.report(Progress::Message(format!(
            "All {} word orders evaluated.",
            outcome.permutations_tried
        ))),
        Termination::CapReached => reporter.report(Progress::Message(format!(
            "Stopped at the cap of {} word orders.",
            outcome.permutations_tried
        ))),
        Termination::Stopped => reporter.report(Progress::Message(format!(
            "Stopped early after {} word orders.",
            outcome.permutations_tried
        ))),
    }
    reporter.report(Progress::PhaseFinish);

    info!(
        best = %outcome.score,
        baseline = %outcome.baseline,
        "Layout optimization complete."
    );

    Ok(OptimizationResult {
        mapper: outcome.best,
        score: outcome.score,
        baseline: outcome.baseline,
        permutation: outcome.permutation,
        permutations_tried: outcome.permutations_tried,
        termination: outcome.termination,
    })
}

/// Text projection of `blocks`; see [`TextGrid`].
pub fn render_blocks_as_text(blocks: &[Block]) -> Vec<String> {
    TextGrid::render(blocks)
}
