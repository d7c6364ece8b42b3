//! # Workflows Module
//!
//! Top-level entry points for callers of the library (the CLI, a web layer, or
//! a test harness). They take pre-normalized word lists and return finished
//! blocks.
//!
//! - **Layout Workflow** ([`layout`]) - `map_words` for a single greedy pass,
//!   `optimize_layout` for the bounded permutation search, and
//!   `render_blocks_as_text` for inspection.

pub mod layout;
