//! Plotting companion for externally computed strongly connected components.

pub mod graph;
pub mod io;
pub mod layout;
pub mod render;
pub mod scc;
pub mod types;
