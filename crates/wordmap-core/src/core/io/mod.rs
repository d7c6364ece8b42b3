//! Read-only projections of finished layouts and the optional word-list collaborator.
//!
//! Nothing in this module feeds back into placement decisions: renderers only read
//! block grids, and the dictionary is consulted by callers that want to validate
//! their input before laying it out.

pub mod dictionary;
pub mod render;
pub mod traits;
