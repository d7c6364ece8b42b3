use super::grid::{BoundingBox, Grid};
use super::node::{Connection, NodeId, WordNode};
use super::position::{Direction, Position};
use serde::Serialize;
use tracing::trace;

/// Where and how a candidate word attaches to a word already in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinPoint {
    pub origin: NodeId,
    pub origin_index: usize,
    pub target_index: usize,
    pub direction: Direction,
    pub start: Position,
}

/// A set of words connected transitively through shared letters, laid out on one grid.
#[derive(Debug, Clone, Default)]
pub struct Block {
    nodes: Vec<WordNode>,
    grid: Grid,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[WordNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&WordNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounding_area(&self) -> u64 {
        self.grid.bounding_area()
    }

    /// Places `node` unconditionally, at the origin unless `start` is given.
    pub fn add_node(&mut self, node: WordNode, start: Option<Position>) {
        self.grid.commit(&node, start.unwrap_or(Position::ORIGIN));
        self.nodes.push(node);
    }

    /// First-fit search for a place to attach `candidate`.
    ///
    /// Scans existing nodes in insertion order; for each, every candidate letter
    /// index and then every origin letter index, left to right. A pair qualifies
    /// when the letters are equal and the origin letter is not already a
    /// junction on the origin node. The candidate runs perpendicular to the
    /// origin. The first pair whose run fits the grid wins.
    pub fn find_join(&self, candidate: &WordNode) -> Option<JoinPoint> {
        let target = candidate.letters();
        for origin in &self.nodes {
            let direction = origin.direction.opposite();
            for (target_index, &target_letter) in target.iter().enumerate() {
                for (origin_index, &origin_letter) in origin.letters().iter().enumerate() {
                    if target_letter != origin_letter || origin.connection_at(origin_index).is_some()
                    {
                        continue;
                    }
                    if let Some(start) =
                        self.grid
                            .fits(origin, origin_index, target, target_index, direction)
                    {
                        trace!(
                            origin = %origin.id,
                            candidate = %candidate.id,
                            letter = %target_letter,
                            %start,
                            "Join point found."
                        );
                        return Some(JoinPoint {
                            origin: origin.id,
                            origin_index,
                            target_index,
                            direction,
                            start,
                        });
                    }
                }
            }
        }
        None
    }

    /// Attaches `candidate` at `join`, which must come from [`Block::find_join`]
    /// on this block with no commit in between.
    ///
    /// The connection is recorded on the joining node only; the origin's own
    /// connection map is left as it was. `candidate` must not already hold a
    /// connection at `join.target_index`.
    pub fn join_node(&mut self, mut candidate: WordNode, join: JoinPoint) -> Connection {
        let connection = Connection {
            peer: join.origin,
            peer_index: join.origin_index,
            self_index: join.target_index,
        };
        let recorded = candidate.connect(connection);
        debug_assert!(
            recorded.is_ok(),
            "candidate {} already joined at letter {}",
            candidate.id,
            join.target_index
        );
        candidate.direction = join.direction;
        self.add_node(candidate, Some(join.start));
        connection
    }

    pub fn summary(&self) -> BlockSummary {
        let words = self
            .nodes
            .iter()
            .filter_map(|node| {
                self.grid.start_of(node.id).map(|start| PlacedWord {
                    id: node.id,
                    text: node.text.clone(),
                    direction: node.direction,
                    start,
                    connections: node.connections().values().copied().collect(),
                })
            })
            .collect();
        BlockSummary {
            words,
            bounds: self.grid.bounds(),
            area: self.grid.bounding_area(),
        }
    }
}

/// Serializable snapshot of one placed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub id: NodeId,
    pub text: String,
    pub direction: Direction,
    pub start: Position,
    pub connections: Vec<Connection>,
}

/// Serializable snapshot of a block for callers that render layouts elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    pub words: Vec<PlacedWord>,
    pub bounds: Option<BoundingBox>,
    pub area: u64,
}
