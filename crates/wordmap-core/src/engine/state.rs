use serde::Serialize;
use std::fmt;

/// Quality of a layout: fewer blocks first, then smaller total area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LayoutScore {
    pub block_count: usize,
    pub total_area: u64,
}

impl fmt::Display for LayoutScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} block(s), area {}", self.block_count, self.total_area)
    }
}

/// Running best candidate of a permutation search.
///
/// `min_blocks` is lowered by every candidate that does not lose on block
/// count, while `min_area` is only replaced when a candidate is accepted.
#[derive(Debug)]
pub struct SearchState<T> {
    best: Option<(T, LayoutScore)>,
    min_blocks: usize,
    min_area: u64,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            best: None,
            min_blocks: usize::MAX,
            min_area: u64::MAX,
        }
    }
}

impl<T> SearchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the selection rule to `score` and reports whether it became the
    /// new best. `candidate` is only evaluated on acceptance.
    pub fn offer(&mut self, score: LayoutScore, candidate: impl FnOnce() -> T) -> bool {
        if score.block_count > self.min_blocks {
            return false;
        }
        let accepted =
            score.block_count < self.min_blocks || score.total_area < self.min_area;
        if accepted {
            self.best = Some((candidate(), score));
            self.min_area = score.total_area;
        }
        self.min_blocks = score.block_count;
        accepted
    }

    pub fn best_score(&self) -> Option<LayoutScore> {
        self.best.as_ref().map(|(_, score)| *score)
    }

    pub fn best(&self) -> Option<&T> {
        self.best.as_ref().map(|(candidate, _)| candidate)
    }

    pub fn into_best(self) -> Option<(T, LayoutScore)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(block_count: usize, total_area: u64) -> LayoutScore {
        LayoutScore {
            block_count,
            total_area,
        }
    }

    #[test]
    fn first_offer_is_always_accepted() {
        let mut state = SearchState::new();
        assert!(state.offer(score(5, 500), || "first"));
        assert_eq!(state.best(), Some(&"first"));
    }

    #[test]
    fn selection_follows_block_count_then_area() {
        let mut state = SearchState::new();
        assert!(state.offer(score(2, 10), || 0));
        assert!(!state.offer(score(3, 1), || 1));
        assert!(!state.offer(score(2, 12), || 2));
        assert!(!state.offer(score(2, 10), || 3));
        assert!(state.offer(score(2, 9), || 4));
        assert!(state.offer(score(1, 50), || 5));
        assert!(!state.offer(score(2, 1), || 6));
        assert!(state.offer(score(1, 40), || 7));
        assert!(!state.offer(score(1, 40), || 8));

        let (best, best_score) = state.into_best().unwrap();
        assert_eq!(best, 7);
        assert_eq!(best_score, score(1, 40));
    }

    #[test]
    fn rejected_candidates_are_not_constructed() {
        let mut state = SearchState::new();
        state.offer(score(1, 4), || 0);
        let accepted = state.offer(score(1, 9), || -> i32 { panic!("should not be built") });
        assert!(!accepted);
    }

    #[test]
    fn scores_order_lexicographically() {
        assert!(score(1, 100) < score(2, 1));
        assert!(score(2, 5) < score(2, 6));
        assert_eq!(score(3, 3).to_string(), "3 block(s), area 3");
    }
}
