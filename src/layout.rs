//! Seeded spring (Fruchterman-Reingold) layout.

use crate::{graph::DiGraph, types::Position};
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeMap;

/// Layout seed used by the CLI when none is given.
pub const DEFAULT_SEED: u64 = 10;

const ITERATIONS: usize = 50;
const INITIAL_TEMPERATURE: f64 = 0.1;
const MIN_DIST: f64 = 1e-9;

/// Computes a force-directed placement of `graph` in the unit square.
///
/// Initial positions come from `StdRng::seed_from_u64(seed)` and the graph's
/// vertex order is total, so the same graph and seed always produce the same
/// placement.
pub fn spring_layout(graph: &DiGraph, seed: u64) -> BTreeMap<String, Position> {
    let n = graph.num_vertices();
    if n == 0 {
        return BTreeMap::new();
    }
    info!("laying out {} vertices (seed {})", n, seed);
    let labels: Vec<&str> = graph.vertices().collect();
    let index: BTreeMap<&str, usize> =
        labels.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let arcs: Vec<(usize, usize)> = graph.arcs().map(|(u, v)| (index[u], index[v])).collect();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<Position> = (0..n).map(|_| [rng.gen(), rng.gen()]).collect();
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = INITIAL_TEMPERATURE;
    let cooling = INITIAL_TEMPERATURE / (ITERATIONS + 1) as f64;
    for _ in 0..ITERATIONS {
        let mut disp = vec![[0.0f64; 2]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                let repulsion = k * k / dist;
                disp[i][0] += dx / dist * repulsion;
                disp[i][1] += dy / dist * repulsion;
                disp[j][0] -= dx / dist * repulsion;
                disp[j][1] -= dy / dist * repulsion;
            }
        }
        for &(u, v) in &arcs {
            if u == v {
                continue;
            }
            let dx = pos[u][0] - pos[v][0];
            let dy = pos[u][1] - pos[v][1];
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
            let attraction = dist * dist / k;
            disp[u][0] -= dx / dist * attraction;
            disp[u][1] -= dy / dist * attraction;
            disp[v][0] += dx / dist * attraction;
            disp[v][1] += dy / dist * attraction;
        }
        for i in 0..n {
            let len = (disp[i][0] * disp[i][0] + disp[i][1] * disp[i][1])
                .sqrt()
                .max(MIN_DIST);
            let step = len.min(temperature);
            pos[i][0] += disp[i][0] / len * step;
            pos[i][1] += disp[i][1] / len * step;
        }
        temperature -= cooling;
    }
    rescale(&mut pos);
    labels
        .into_iter()
        .zip(pos)
        .map(|(v, p)| (String::from(v), p))
        .collect()
}

/// Shifts and uniformly scales positions into the unit square.
fn rescale(pos: &mut [Position]) {
    let (min_x, max_x) = match pos.iter().map(|p| p[0]).minmax().into_option() {
        Some(bounds) => bounds,
        None => return,
    };
    let (min_y, max_y) = pos
        .iter()
        .map(|p| p[1])
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let span = (max_x - min_x).max(max_y - min_y);
    if span <= MIN_DIST {
        for p in pos.iter_mut() {
            *p = [0.5, 0.5];
        }
        return;
    }
    for p in pos.iter_mut() {
        p[0] = (p[0] - min_x) / span;
        p[1] = (p[1] - min_y) / span;
    }
}
