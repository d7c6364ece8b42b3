use super::state::LayoutScore;
use crate::core::models::block::Block;
use crate::core::models::node::{NodeId, WordNode};
use tracing::{debug, trace};

/// Greedy single-pass layout of an ordered word list.
///
/// Each word either joins the current block or opens a new one. Earlier blocks
/// are never revisited and joins are never undone.
#[derive(Debug, Clone)]
pub struct WordMapper {
    words: Vec<String>,
    blocks: Vec<Block>,
}

impl WordMapper {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let mut blocks = Vec::new();
        let mut current = Block::new();

        for (i, word) in words.iter().enumerate() {
            let node = WordNode::new(NodeId(i), word.as_str());
            if current.is_empty() {
                current.add_node(node, None);
                continue;
            }
            match current.find_join(&node) {
                Some(join) => {
                    current.join_node(node, join);
                }
                None => {
                    trace!(word = %word, "No join point; starting a new block.");
                    blocks.push(std::mem::take(&mut current));
                    current.add_node(node, None);
                }
            }
        }
        blocks.push(current);

        for (i, block) in blocks.iter().enumerate() {
            debug!(
                block = i,
                nodes = block.len(),
                area = block.bounding_area(),
                "Block laid out."
            );
        }

        Self { words, blocks }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn total_area(&self) -> u64 {
        self.blocks.iter().map(Block::bounding_area).sum()
    }

    pub fn score(&self) -> LayoutScore {
        LayoutScore {
            block_count: self.block_count(),
            total_area: self.total_area(),
        }
    }
}
