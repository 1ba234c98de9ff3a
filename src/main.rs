use clap::{
    crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand,
};
use rand::{rngs::StdRng, SeedableRng};
use sccplot::{
    io::{read_edge_list, read_partition, scc_output_path},
    layout::{spring_layout, DEFAULT_SEED},
    render::{render_svg, Style},
    scc::color_components,
};
use std::{
    error::Error,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

fn handle_plot(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = input_path(matches);
    let graph = read_edge_list(&input)?;
    let positions = spring_layout(&graph, layout_seed(matches)?);
    let out = out_path(matches, ".svg");
    render_svg(
        &graph,
        &positions,
        None,
        &Style::default(),
        BufWriter::new(File::create(&out)?),
    )?;
    println!("wrote {}", out.display());
    Ok(())
}

fn handle_scc(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = input_path(matches);
    let graph = read_edge_list(&input)?;
    let partition = scc_output_path(
        Path::new(matches.value_of("output-dir").unwrap()),
        &input,
    );
    let components = read_partition(&partition)?;
    let (combined, colors) = match matches.value_of("color-seed") {
        Some(seed) => {
            color_components(&graph, &components, &mut StdRng::seed_from_u64(seed.parse()?))
        }
        None => color_components(&graph, &components, &mut rand::thread_rng()),
    };
    let positions = spring_layout(&combined, layout_seed(matches)?);
    let out = out_path(matches, ".scc.svg");
    render_svg(
        &combined,
        &positions,
        Some(&colors),
        &Style::default(),
        BufWriter::new(File::create(&out)?),
    )?;
    println!("wrote {}", out.display());
    Ok(())
}

fn input_path(matches: &ArgMatches) -> PathBuf {
    Path::new(matches.value_of("data-dir").unwrap()).join(matches.value_of("FILE").unwrap())
}

fn layout_seed(matches: &ArgMatches) -> Result<u64, std::num::ParseIntError> {
    match matches.value_of("seed") {
        Some(seed) => seed.parse(),
        None => Ok(DEFAULT_SEED),
    }
}

fn out_path(matches: &ArgMatches, suffix: &str) -> PathBuf {
    match matches.value_of("out") {
        Some(out) => PathBuf::from(out),
        None => {
            let input = Path::new(matches.value_of("FILE").unwrap());
            let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
            let mut name = stem.to_os_string();
            name.push(suffix);
            PathBuf::from(name)
        }
    }
}

fn common_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("FILE")
            .required(true)
            .help("Edge-list file name inside the data directory"),
        Arg::with_name("data-dir")
            .long("data-dir")
            .takes_value(true)
            .default_value("data")
            .help("Directory holding edge-list files"),
        Arg::with_name("seed")
            .long("seed")
            .takes_value(true)
            .help("Spring layout seed (default: 10)"),
        Arg::with_name("out")
            .long("out")
            .takes_value(true)
            .help("SVG output path (defaults to the input stem)"),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("plot")
                .about("Plots the directed graph read from an edge-list file")
                .args(&common_args()),
        )
        .subcommand(
            SubCommand::with_name("scc")
                .about("Plots the induced subgraph of the solver's SCC partition, one color per component")
                .args(&common_args())
                .arg(
                    Arg::with_name("output-dir")
                        .long("output-dir")
                        .takes_value(true)
                        .default_value("output")
                        .help("Directory holding the solver's .dcsc.out.txt files"),
                )
                .arg(
                    Arg::with_name("color-seed")
                        .long("color-seed")
                        .takes_value(true)
                        .help("Seed for component colors (entropy when absent)"),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("plot") {
        handle_plot(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("scc") {
        handle_scc(matches)?;
    }
    Ok(())
}
