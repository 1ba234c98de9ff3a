use super::error::{Error, Result};
use crate::scc::Component;
use log::info;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Suffix appended to the input's stem to locate the SCC solver's output.
const SCC_SUFFIX: &str = ".dcsc.out.txt";

/// Derives the SCC output path for `input` under `output_dir`.
///
/// `graphs/web.txt` becomes `<output_dir>/web.dcsc.out.txt`.
pub fn scc_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(SCC_SUFFIX);
    output_dir.join(name)
}

/// Reads an SCC partition file.
///
/// The first line is the solver's summary header and is discarded. Every
/// following line is a `"<size>: <label> <label> ..."` record; a blank line
/// or end of file terminates the list.
pub fn read_partition<P: AsRef<Path>>(path: P) -> Result<Vec<Component>> {
    let path = path.as_ref();
    info!("reading SCC partition from {}", path.display());
    let components = parse_partition(BufReader::new(File::open(path)?))?;
    info!("read {} components", components.len());
    Ok(components)
}

pub fn parse_partition<R: BufRead>(reader: R) -> Result<Vec<Component>> {
    let mut components = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i == 0 {
            continue;
        }
        if line.trim().is_empty() {
            break;
        }
        components.push(parse_component(i + 1, &line)?);
    }
    Ok(components)
}

fn parse_component(line_no: usize, line: &str) -> Result<Component> {
    let (size, labels) = line
        .split_once(':')
        .ok_or_else(|| Error::parse(line_no, "expected \"<size>: <labels>\"", line))?;
    let size: usize = size
        .trim()
        .parse()
        .map_err(|_| Error::parse(line_no, "component size is not an unsigned integer", line))?;
    let component = Component::new(labels.split_whitespace().map(String::from).collect());
    if component.len() != size {
        return Err(Error::parse(
            line_no,
            &format!("declared {} vertices but listed {}", size, component.len()),
            line,
        ));
    }
    Ok(component)
}
