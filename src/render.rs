//! SVG rendering with a fixed cosmetic style.

use crate::{
    graph::DiGraph,
    types::{Color, Position},
};
use derive_more::Display;
use log::info;
use std::{collections::BTreeMap, io::Write};

/// Node fill used when no color table is given (the plain edge-list render).
const DEFAULT_NODE_COLOR: &str = "#1f78b4";

/// Viridis anchors; component color scalars are interpolated between them.
const COLOR_SCALE: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "vertex {:?} has no position", _0)]
    MissingPosition(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::MissingPosition(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Cosmetic parameters shared by both renders.
#[derive(Debug, Clone)]
pub struct Style {
    /// Node marker area in square points.
    pub node_size: f64,
    pub edge_width: f64,
    pub font_size: f64,
    pub alpha: f64,
    pub edge_color: String,
    pub canvas: f64,
    pub margin: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            node_size: 20.0,
            edge_width: 0.25,
            font_size: 10.0,
            alpha: 0.6,
            edge_color: String::from("#000000"),
            canvas: 600.0,
            margin: 40.0,
        }
    }
}

/// Writes `graph` as a standalone SVG document.
///
/// Every vertex must appear in `positions`. With a color table, node fills
/// come from the color scale; without one, all nodes share the default fill.
pub fn render_svg<W: Write>(
    graph: &DiGraph,
    positions: &BTreeMap<String, Position>,
    colors: Option<&BTreeMap<String, Color>>,
    style: &Style,
    mut out: W,
) -> Result<(), Error> {
    info!(
        "rendering {} vertices and {} arcs",
        graph.num_vertices(),
        graph.num_arcs()
    );
    // node_size is a marker area, matching the original plotting convention
    let radius = (style.node_size / std::f64::consts::PI).sqrt();
    let place = |v: &str| -> Result<(f64, f64), Error> {
        let p = positions
            .get(v)
            .ok_or_else(|| Error::MissingPosition(String::from(v)))?;
        let scale = style.canvas - 2.0 * style.margin;
        // SVG y grows downwards
        Ok((
            style.margin + p[0] * scale,
            style.margin + (1.0 - p[1]) * scale,
        ))
    };
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{c}" height="{c}" viewBox="0 0 {c} {c}">"#,
        c = style.canvas
    )?;
    writeln!(
        out,
        r#"  <defs><marker id="arrow" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto"><path d="M0,0 L8,3 L0,6 z" fill="{}"/></marker></defs>"#,
        style.edge_color
    )?;
    for (src, dst) in graph.arcs() {
        let (x1, y1) = place(src)?;
        let (x2, y2) = place(dst)?;
        writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-opacity="{}" marker-end="url(#arrow)"/>"#,
            x1, y1, x2, y2, style.edge_color, style.edge_width, style.alpha
        )?;
    }
    for v in graph.vertices() {
        let (x, y) = place(v)?;
        let fill = match colors.and_then(|c| c.get(v)) {
            Some(&c) => color_scale(c),
            None => String::from(DEFAULT_NODE_COLOR),
        };
        writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{}"/>"#,
            x, y, radius, fill, style.alpha
        )?;
        writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="middle">{}</text>"#,
            x,
            y - radius - 2.0,
            style.font_size,
            escape(v)
        )?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

/// Maps a color scalar onto the perceptually-ordered scale as `#rrggbb`.
fn color_scale(color: Color) -> String {
    let t = f64::from(color) / 255.0 * (COLOR_SCALE.len() - 1) as f64;
    let i = (t.floor() as usize).min(COLOR_SCALE.len() - 2);
    let frac = t - i as f64;
    let (lo, hi) = (COLOR_SCALE[i], COLOR_SCALE[i + 1]);
    let mix =
        |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(lo[0], hi[0]),
        mix(lo[1], hi[1]),
        mix(lo[2], hi[2])
    )
}

fn escape(label: &str) -> String {
    label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::spring_layout;

    fn triangle() -> DiGraph {
        let mut graph = DiGraph::new();
        graph.add_arc("a", "b");
        graph.add_arc("b", "c");
        graph.add_arc("c", "a");
        graph
    }

    fn render_to_string(
        graph: &DiGraph,
        colors: Option<&BTreeMap<String, Color>>,
    ) -> Result<String, Error> {
        let positions = spring_layout(graph, 10);
        let mut buf = Vec::new();
        render_svg(graph, &positions, colors, &Style::default(), &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_render_contains_all_elements() {
        let svg = render_to_string(&triangle(), None).unwrap();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains(DEFAULT_NODE_COLOR));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let graph = triangle();
        assert_eq!(
            render_to_string(&graph, None).unwrap(),
            render_to_string(&graph, None).unwrap()
        );
    }

    #[test]
    fn test_colored_render_uses_the_scale() {
        let graph = triangle();
        let colors: BTreeMap<String, Color> = graph
            .vertices()
            .map(|v| (String::from(v), 0))
            .collect();
        let svg = render_to_string(&graph, Some(&colors)).unwrap();
        assert!(svg.contains("#440154"));
        assert!(!svg.contains(DEFAULT_NODE_COLOR));
    }

    #[test]
    fn test_missing_position_is_an_error() {
        let graph = triangle();
        let mut buf = Vec::new();
        let err = render_svg(&graph, &BTreeMap::new(), None, &Style::default(), &mut buf)
            .unwrap_err();
        match err {
            Error::MissingPosition(v) => assert_eq!(v, "a"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_color_scale_endpoints() {
        assert_eq!(color_scale(0), "#440154");
        assert_eq!(color_scale(255), "#fde725");
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut graph = DiGraph::new();
        graph.add_arc("a<b", "c&d");
        let svg = render_to_string(&graph, None).unwrap();
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("c&amp;d"));
    }
}
