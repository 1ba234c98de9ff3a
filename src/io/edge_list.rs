use super::error::{Error, Result};
use crate::graph::DiGraph;
use itertools::Itertools;
use log::info;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Reads a directed graph from an edge-list file.
///
/// One arc per line as two whitespace-separated labels. Lines whose first
/// character is `#` are comments. Any other line shape, blank lines
/// included, is a parse error naming the line.
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<DiGraph> {
    let path = path.as_ref();
    info!("reading edge list from {}", path.display());
    let graph = parse_edge_list(BufReader::new(File::open(path)?))?;
    info!(
        "read {} vertices and {} arcs",
        graph.num_vertices(),
        graph.num_arcs()
    );
    Ok(graph)
}

pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<DiGraph> {
    let mut graph = DiGraph::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        match line.split_whitespace().collect_tuple() {
            Some((src, dst)) => graph.add_arc(src, dst),
            None => {
                return Err(Error::parse(
                    i + 1,
                    "expected two whitespace-separated labels",
                    &line,
                ))
            }
        }
    }
    Ok(graph)
}
