pub mod block;
pub mod grid;
pub mod node;
pub mod position;
