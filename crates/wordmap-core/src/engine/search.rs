use super::config::OptimizationConfig;
use super::error::EngineError;
use super::mapper::WordMapper;
use super::progress::{Progress, ProgressReporter};
use super::state::{LayoutScore, SearchState};
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Why a permutation search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// Every ordering of the words was evaluated.
    Exhausted,
    /// The permutation cap was hit with orderings left over.
    CapReached,
    /// A stop was requested through the progress reporter.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: WordMapper,
    pub score: LayoutScore,
    /// Indices into the input word list, in the order that produced `best`.
    pub permutation: Vec<usize>,
    /// Score of the first ordering evaluated, which is the input order.
    pub baseline: LayoutScore,
    pub permutations_tried: u64,
    pub termination: Termination,
}

/// Number of orderings the search will evaluate, saturating at `cap`.
pub fn permutation_budget(word_count: usize, cap: u64) -> u64 {
    (1..=word_count as u64)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .map_or(cap, |total| total.min(cap))
}

fn map_permutation<S: AsRef<str>>(words: &[S], permutation: &[usize]) -> WordMapper {
    let ordered: Vec<&str> = permutation.iter().map(|&i| words[i].as_ref()).collect();
    WordMapper::build(&ordered)
}

fn evaluate_batch<S: AsRef<str> + Sync>(
    words: &[S],
    batch: Vec<Vec<usize>>,
) -> Vec<(Vec<usize>, WordMapper)> {
    #[cfg(not(feature = "parallel"))]
    let iterator = batch.into_iter();

    #[cfg(feature = "parallel")]
    let iterator = batch.into_par_iter();

    iterator
        .map(|permutation| {
            let mapper = map_permutation(words, &permutation);
            (permutation, mapper)
        })
        .collect()
}

/// Evaluates word orders in lexicographic index order, starting with the input
/// order, and keeps the best layout under [`SearchState`]'s selection rule.
///
/// Every ordering gets its own mapper and grids. Under the `parallel` feature
/// orderings are mapped concurrently in batches, but candidates are still
/// offered to the selection rule one by one in permutation order, so the
/// outcome matches the sequential search exactly.
#[instrument(skip_all, name = "permutation_search")]
pub fn run<S: AsRef<str> + Sync>(
    words: &[S],
    config: &OptimizationConfig,
    reporter: &ProgressReporter,
) -> Result<SearchOutcome, EngineError> {
    let word_count = words.len();
    let cap = config.max_permutations;
    let batch_size = if cfg!(feature = "parallel") {
        config.batch_size.max(1)
    } else {
        1
    };

    let budget = permutation_budget(word_count, cap);
    info!(
        words = word_count,
        cap, budget, "Searching word orders for the most compact layout."
    );
    reporter.report(Progress::TaskStart {
        total_steps: budget,
    });

    let mut permutations = (0..word_count).permutations(word_count);
    let mut state = SearchState::new();
    let mut baseline = None;
    let mut tried: u64 = 0;

    let termination = loop {
        if tried > 0 && reporter.should_stop() {
            break Termination::Stopped;
        }
        let remaining = cap.saturating_sub(tried);
        if remaining == 0 {
            break if permutations.next().is_none() {
                Termination::Exhausted
            } else {
                Termination::CapReached
            };
        }

        let wanted = remaining.min(batch_size as u64) as usize;
        let batch: Vec<Vec<usize>> = permutations.by_ref().take(wanted).collect();
        let pulled = batch.len();

        for (permutation, mapper) in evaluate_batch(words, batch) {
            tried += 1;
            let score = mapper.score();
            if baseline.is_none() {
                baseline = Some(score);
            }
            if state.offer(score, || (mapper, permutation)) {
                debug!(permutation = tried, %score, "New best layout.");
                reporter.report(Progress::Message(format!(
                    "Permutation {}: {}",
                    tried, score
                )));
            }
            reporter.report(Progress::TaskIncrement);
        }

        if pulled < wanted {
            break Termination::Exhausted;
        }
    };

    reporter.report(Progress::TaskFinish);

    let ((best, permutation), score) = state.into_best().ok_or_else(|| {
        EngineError::Internal("permutation search finished without a candidate".to_string())
    })?;
    let baseline = baseline.unwrap_or(score);

    info!(
        tried,
        ?termination,
        %score,
        %baseline,
        "Permutation search finished."
    );

    Ok(SearchOutcome {
        best,
        score,
        permutation,
        baseline,
        permutations_tried: tried,
        termination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::OptimizationConfigBuilder;
    use crate::engine::progress::StopSignal;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn config(max_permutations: u64) -> OptimizationConfig {
        OptimizationConfigBuilder::new()
            .max_permutations(max_permutations)
            .batch_size(4)
            .build()
            .unwrap()
    }

    #[test]
    fn budget_saturates_at_cap() {
        assert_eq!(permutation_budget(0, 10), 1);
        assert_eq!(permutation_budget(3, 10), 6);
        assert_eq!(permutation_budget(4, 10), 10);
        assert_eq!(permutation_budget(40, 200_000), 200_000);
    }

    #[test]
    fn small_inputs_are_searched_exhaustively() {
        let outcome = run(&["cat", "tab", "bar"], &config(100), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.permutations_tried, 6);
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert!(outcome.score <= outcome.baseline);
    }

    #[test]
    fn cap_of_one_evaluates_only_the_input_order() {
        let words = ["ab", "cd", "bc"];
        let outcome = run(&words, &config(1), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.permutations_tried, 1);
        assert_eq!(outcome.termination, Termination::CapReached);
        assert_eq!(outcome.permutation, vec![0, 1, 2]);
        assert_eq!(outcome.score, WordMapper::build(&words).score());
    }

    #[test]
    fn cap_equal_to_permutation_count_reports_exhausted() {
        let outcome = run(&["ab", "cd", "bc"], &config(6), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.permutations_tried, 6);
        assert_eq!(outcome.termination, Termination::Exhausted);
    }

    #[test]
    fn search_finds_fewer_blocks_than_input_order() {
        let outcome = run(&["ab", "cd", "bc"], &config(100), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.baseline.block_count, 2);
        assert_eq!(outcome.score.block_count, 1);
        assert_eq!(outcome.best.block_count(), 1);

        let reordered: Vec<&str> = outcome
            .permutation
            .iter()
            .map(|&i| ["ab", "cd", "bc"][i])
            .collect();
        assert_eq!(outcome.best.words(), reordered.as_slice());
    }

    #[test]
    fn empty_word_list_yields_one_empty_block() {
        let outcome = run::<&str>(&[], &config(10), &ProgressReporter::new()).unwrap();
        assert_eq!(outcome.permutations_tried, 1);
        assert_eq!(outcome.score.block_count, 1);
        assert_eq!(outcome.score.total_area, 0);
    }

    #[test]
    fn stop_request_keeps_best_found_so_far() {
        let signal = StopSignal::new();
        signal.request_stop();
        let reporter = ProgressReporter::new().with_stop_signal(signal);

        let words = ["one", "thing", "i", "dont", "know", "why"];
        let outcome = run(&words, &config(1000), &reporter).unwrap();
        assert_eq!(outcome.termination, Termination::Stopped);
        assert!(outcome.permutations_tried >= 1);
        assert!(outcome.permutations_tried <= 4);
        assert!(outcome.score <= outcome.baseline);
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn batched_search_matches_one_by_one_search() {
        let words = ["one", "thing", "i", "dont", "know", "why", "it", "even"];
        let batched = |batch_size| {
            let config = OptimizationConfigBuilder::new()
                .max_permutations(20_000)
                .batch_size(batch_size)
                .build()
                .unwrap();
            run(&words, &config, &ProgressReporter::new()).unwrap()
        };

        let single = batched(1);
        let wide = batched(1024);
        assert_eq!(single.permutation, wide.permutation);
        assert_eq!(single.score, wide.score);
        assert_eq!(single.baseline, wide.baseline);
        assert_eq!(single.permutations_tried, wide.permutations_tried);
        assert_eq!(single.termination, Termination::CapReached);
    }

    #[test]
    fn progress_events_cover_every_permutation() {
        let increments = AtomicU64::new(0);
        let total = Mutex::new(None);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskStart { total_steps } => *total.lock().unwrap() = Some(total_steps),
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }));

        let outcome = run(&["ab", "bc", "cd", "de"], &config(10), &reporter).unwrap();
        drop(reporter);

        assert_eq!(outcome.permutations_tried, 10);
        assert_eq!(increments.load(Ordering::Relaxed), 10);
        assert_eq!(*total.lock().unwrap(), Some(10));
    }
}
