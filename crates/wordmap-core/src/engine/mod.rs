//! # Engine Module
//!
//! The layout engine: the greedy single-pass mapper and the permutation search
//! that runs it over many word orders.
//!
//! - **Configuration** ([`config`]) - Permutation cap and batch sizing
//! - **Mapping** ([`mapper`]) - Greedy block building for one word order
//! - **Search** ([`search`]) - Bounded permutation search over word orders
//! - **Scoring** ([`state`]) - Layout scores and the best-candidate selection rule
//! - **Progress Monitoring** ([`progress`]) - Progress events and early-exit signalling
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! The `parallel` feature maps each batch of word orders on the rayon pool; the
//! selection rule is still applied in permutation order.

pub mod config;
pub mod error;
pub mod mapper;
pub mod progress;
pub mod search;
pub mod state;
