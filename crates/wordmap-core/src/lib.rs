//! # WordMap Core Library
//!
//! Lays a sequence of words out as interlocking crossword-style blocks. Each word
//! is attached where it shares a letter with a word already placed; words that
//! cannot attach start a new block. A bounded search over word orders picks the
//! layout with the fewest blocks and, among those, the smallest total area.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Positions, word nodes, the sparse character
//!   grid with its conflict checks, blocks with first-fit join search, and
//!   read-only renderers plus the optional dictionary trie.
//!
//! - **[`engine`]: The Logic Core.** The greedy mapper, the permutation search
//!   and its selection rule, configuration, progress reporting and errors.
//!
//! - **[`workflows`]: The Public API.** `map_words`, `optimize_layout` and
//!   `render_blocks_as_text`.
//!
//! ```
//! use wordmap::workflows::layout::{map_words, render_blocks_as_text};
//!
//! let blocks = map_words(&["cat", "tab"]);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(render_blocks_as_text(&blocks)[0], "cat");
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
