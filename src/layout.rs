/* This file is part of sir-netviz:
   Animated visualization of epidemic state evolution on networks

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Force-directed (spring) layout, computed once per run.
//!
//! Every animation frame reuses the same positions; recomputing the layout
//! per frame would make a static topology look like it is moving.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::graph::Graph;
use crate::VizError;

/// Default number of force iterations.
pub const DEFAULT_ITERATIONS: usize = 50;

/// One 2D position per node, in [-1, 1] on both axes.
pub type Layout = Vec<(f64, f64)>;

/// Fruchterman-Reingold spring layout.
///
/// With `seed: Some(s)` the result is deterministic; with `None` the initial
/// positions come from entropy and two runs can produce visually different
/// (though topologically equivalent) pictures.
///
/// Edge endpoints outside `0..node_count` carry no position and exert no
/// force; the graph keeps them, the layout skips them.
pub fn spring_layout(
    graph: &Graph,
    iterations: usize,
    seed: Option<u64>,
) -> Result<Layout, VizError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(VizError::EmptyInput("graph has no nodes to lay out"));
    }
    let mut rng = match seed {
        Some(s) => Pcg64::seed_from_u64(s),
        None => Pcg64::from_entropy(),
    };
    let mut pos: Layout = (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();
    if n == 1 {
        return Ok(vec![(0.0, 0.0)]);
    }

    // Ideal spring length for a unit-square canvas.
    let k = 1.0 / (n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (iterations as f64 + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Pairwise repulsion.
        for u in 0..n {
            for v in (u + 1)..n {
                let dx = pos[u].0 - pos[v].0;
                let dy = pos[u].1 - pos[v].1;
                let dist_sq = (dx * dx + dy * dy).max(1e-12);
                let f = k * k / dist_sq;
                disp[u].0 += dx * f;
                disp[u].1 += dy * f;
                disp[v].0 -= dx * f;
                disp[v].1 -= dy * f;
            }
        }

        // Attraction along edges.
        for &(u, v) in graph.edges() {
            if u >= n || v >= n || u == v {
                continue;
            }
            let dx = pos[u].0 - pos[v].0;
            let dy = pos[u].1 - pos[v].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
            let f = dist / k;
            disp[u].0 -= dx / dist * f;
            disp[u].1 -= dy / dist * f;
            disp[v].0 += dx / dist * f;
            disp[v].1 += dy / dist * f;
        }

        // Displace, capped by the current temperature.
        for u in 0..n {
            let (dx, dy) = disp[u];
            let len = (dx * dx + dy * dy).sqrt();
            if len > 1e-12 {
                let step = len.min(temperature);
                pos[u].0 += dx / len * step;
                pos[u].1 += dy / len * step;
            }
        }
        temperature -= cooling;
    }

    rescale(&mut pos);
    Ok(pos)
}

/// Centers the layout on the origin and scales it into [-1, 1]^2.
fn rescale(pos: &mut Layout) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let mut extent = 0.0f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        extent = extent.max(p.0.abs()).max(p.1.abs());
    }
    if extent > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= extent;
            p.1 /= extent;
        }
    }
}
