//! Readers for the two input text formats.

pub use edge_list::{parse_edge_list, read_edge_list};
pub use partition::{parse_partition, read_partition, scc_output_path};

pub mod error;

mod edge_list;
mod partition;
