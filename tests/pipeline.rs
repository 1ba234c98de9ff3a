use rand::{rngs::StdRng, SeedableRng};
use sccplot::{
    graph::DiGraph,
    io::{read_edge_list, read_partition, scc_output_path},
    layout::spring_layout,
    render::{render_svg, Style},
    scc::color_components,
};
use std::{collections::BTreeSet, fs, path::Path};

const EDGE_LIST: &str = "a b\nb c\n# comment\nc a\nc d\n";
const PARTITION: &str = "components of web.txt\n3: a b c\n1: d\n\n";

fn write_fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let data_dir = dir.join("data");
    let output_dir = dir.join("output");
    fs::create_dir_all(&data_dir).unwrap();
    fs::create_dir_all(&output_dir).unwrap();
    let input = data_dir.join("web.txt");
    fs::write(&input, EDGE_LIST).unwrap();
    let partition = scc_output_path(&output_dir, &input);
    fs::write(&partition, PARTITION).unwrap();
    (input, partition)
}

#[test]
fn test_edge_list_to_graph() {
    let dir = tempfile::tempdir().unwrap();
    let (input, _) = write_fixtures(dir.path());
    let graph = read_edge_list(&input).unwrap();
    assert_eq!(
        graph.vertices().collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );
    assert_eq!(
        graph.arcs().collect::<Vec<_>>(),
        vec![("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]
    );
}

#[test]
fn test_partition_vertices_are_a_subset_of_the_graph() {
    let dir = tempfile::tempdir().unwrap();
    let (input, partition) = write_fixtures(dir.path());
    let graph = read_edge_list(&input).unwrap();
    let components = read_partition(&partition).unwrap();
    let mentioned: BTreeSet<&str> = components
        .iter()
        .flat_map(|c| c.vertices().iter().map(String::as_str))
        .collect();
    let vertices: BTreeSet<&str> = graph.vertices().collect();
    assert!(mentioned.is_subset(&vertices));
}

#[test]
fn test_full_pipeline_produces_a_colored_svg() {
    let dir = tempfile::tempdir().unwrap();
    let (input, partition) = write_fixtures(dir.path());
    let graph = read_edge_list(&input).unwrap();
    let components = read_partition(&partition).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let (combined, colors) = color_components(&graph, &components, &mut rng);

    // the triangle and the singleton, without the cross-component arc
    assert_eq!(combined.num_vertices(), 4);
    assert_eq!(combined.num_arcs(), 3);
    assert!(!combined.contains_arc("c", "d"));
    assert_eq!(colors[&String::from("a")], colors[&String::from("c")]);

    let positions = spring_layout(&combined, 10);
    let mut buf = Vec::new();
    render_svg(&combined, &positions, Some(&colors), &Style::default(), &mut buf).unwrap();
    let svg = String::from_utf8(buf).unwrap();
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<line").count(), 3);
}

#[test]
fn test_fixed_seeds_reproduce_the_svg_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let (input, partition) = write_fixtures(dir.path());
    let graph = read_edge_list(&input).unwrap();
    let components = read_partition(&partition).unwrap();
    let render = |color_seed: u64| {
        let mut rng = StdRng::seed_from_u64(color_seed);
        let (combined, colors) = color_components(&graph, &components, &mut rng);
        let positions = spring_layout(&combined, 10);
        let mut buf = Vec::new();
        render_svg(&combined, &positions, Some(&colors), &Style::default(), &mut buf).unwrap();
        buf
    };
    assert_eq!(render(3), render(3));
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_edge_list(dir.path().join("absent.txt")).is_err());
    assert!(read_partition(dir.path().join("absent.dcsc.out.txt")).is_err());
}

#[test]
fn test_rerunning_the_loader_rebuilds_the_same_topology() {
    let dir = tempfile::tempdir().unwrap();
    let (input, partition) = write_fixtures(dir.path());
    let load = || -> DiGraph {
        let graph = read_edge_list(&input).unwrap();
        let components = read_partition(&partition).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        color_components(&graph, &components, &mut rng).0
    };
    assert_eq!(load(), load());
}
