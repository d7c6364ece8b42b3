use super::traits::LayoutWriter;
use crate::core::models::block::Block;
use crate::core::models::position::Position;
use std::io::{self, Write};

pub const BLOCK_SEPARATOR: &str = "-----------";
const BLANK: char = ' ';

/// Plain-text projection of a layout: one line per grid row, blanks for empty
/// cells, and a separator line after each block.
pub struct TextGrid;

impl TextGrid {
    pub fn render_block(block: &Block) -> Vec<String> {
        let grid = block.grid();
        let Some(bounds) = grid.bounds() else {
            return Vec::new();
        };

        (bounds.top_left.y..=bounds.bottom_right.y)
            .map(|y| {
                (bounds.top_left.x..=bounds.bottom_right.x)
                    .map(|x| grid.char_at(Position::new(x, y)).unwrap_or(BLANK))
                    .collect()
            })
            .collect()
    }

    pub fn render(blocks: &[Block]) -> Vec<String> {
        let mut lines = Vec::new();
        for block in blocks {
            lines.extend(Self::render_block(block));
            lines.push(BLOCK_SEPARATOR.to_string());
        }
        lines
    }
}

impl LayoutWriter for TextGrid {
    type Error = io::Error;

    fn write_to(blocks: &[Block], writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in Self::render(blocks) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::node::{NodeId, WordNode};

    fn cat_tab_block() -> Block {
        let mut block = Block::new();
        block.add_node(WordNode::new(NodeId(0), "cat"), None);
        let tab = WordNode::new(NodeId(1), "tab");
        let join = block.find_join(&tab).unwrap();
        block.join_node(tab, join);
        block
    }

    #[test]
    fn renders_rows_inside_bounding_box() {
        let lines = TextGrid::render_block(&cat_tab_block());
        assert_eq!(lines, vec!["cat", "  a", "  b"]);
    }

    #[test]
    fn separator_follows_every_block() {
        let mut lone = Block::new();
        lone.add_node(WordNode::new(NodeId(2), "xyz"), None);
        let lines = TextGrid::render(&[cat_tab_block(), lone]);
        assert_eq!(
            lines,
            vec!["cat", "  a", "  b", BLOCK_SEPARATOR, "xyz", BLOCK_SEPARATOR]
        );
    }

    #[test]
    fn empty_block_renders_only_its_separator() {
        let lines = TextGrid::render(&[Block::new()]);
        assert_eq!(lines, vec![BLOCK_SEPARATOR]);
    }

    #[test]
    fn rendering_is_repeatable() {
        let blocks = vec![cat_tab_block()];
        assert_eq!(TextGrid::render(&blocks), TextGrid::render(&blocks));
    }

    #[test]
    fn write_to_path_writes_rendered_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.txt");
        TextGrid::write_to_path(&[cat_tab_block()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("cat\n  a\n  b\n{}\n", BLOCK_SEPARATOR));
    }
}
