//! # Core Module
//!
//! Data structures for laying words out on a sparse character plane, plus the
//! I/O helpers that read finished layouts.
//!
//! - **Layout Model** ([`models`]) - `Position`, `WordNode`, `Grid` and `Block`,
//!   including conflict detection and first-fit join search.
//! - **Input/Output** ([`io`]) - Text rendering of blocks and the dictionary trie.

pub mod io;
pub mod models;
