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

//! Renders the animation: one looping GIF frame per timestep, all frames
//! drawn over the same layout so only the node colors change.

use std::path::PathBuf;

use log::{debug, info};
use plotters::prelude::*;

use crate::color::ColorTable;
use crate::graph::Graph;
use crate::layout::{spring_layout, Layout, DEFAULT_ITERATIONS};
use crate::VizError;

/// Frame delay of the encoded GIF, 5 frames per second.
pub const FRAME_DELAY_MS: u32 = 200;

#[derive(Debug, Clone)]
pub struct AnimationConfig {
    pub out_path: PathBuf,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    pub frame_delay_ms: u32,
    /// Node radius in pixels.
    pub node_radius: i32,
    pub layout_iterations: usize,
    /// Spring-layout seed; `None` means a fresh entropy seed per run.
    pub layout_seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("./files/animation.gif"),
            size: (800, 600),
            frame_delay_ms: FRAME_DELAY_MS,
            node_radius: 5,
            layout_iterations: DEFAULT_ITERATIONS,
            layout_seed: None,
        }
    }
}

/// Computes the layout once, then renders every frame.
///
/// Returns the layout so callers can correlate positions with node ids.
pub fn render(
    graph: &Graph,
    colors: &ColorTable,
    config: &AnimationConfig,
) -> Result<Layout, VizError> {
    validate(graph, colors)?;
    let layout = spring_layout(graph, config.layout_iterations, config.layout_seed)?;
    render_with_layout(graph, colors, &layout, config)?;
    Ok(layout)
}

/// Renders all frames over a precomputed layout.
///
/// Frames come out in strictly increasing timestep order, none skipped.
/// Every frame is filled white before nodes and edges are composited.
pub fn render_with_layout(
    graph: &Graph,
    colors: &ColorTable,
    layout: &Layout,
    config: &AnimationConfig,
) -> Result<(), VizError> {
    validate(graph, colors)?;
    if layout.len() != graph.node_count() {
        return Err(VizError::ShapeMismatch(format!(
            "layout has {} positions for {} nodes",
            layout.len(),
            graph.node_count()
        )));
    }

    let root = BitMapBackend::gif(&config.out_path, config.size, config.frame_delay_ms)
        .map_err(VizError::render)?
        .into_drawing_area();
    info!(
        "rendering {} frames of {} nodes to {}",
        colors.timesteps(),
        graph.node_count(),
        config.out_path.display()
    );

    for t in 0..colors.timesteps() {
        root.fill(&WHITE).map_err(VizError::render)?;
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(-1.1f64..1.1f64, -1.1f64..1.1f64)
            .map_err(VizError::render)?;

        // Edges first so nodes draw on top. Endpoints without a position
        // (out-of-range ids in the adjacency data) cannot be drawn.
        chart
            .draw_series(
                graph
                    .edges()
                    .iter()
                    .filter(|&&(u, v)| u < layout.len() && v < layout.len())
                    .map(|&(u, v)| PathElement::new(vec![layout[u], layout[v]], &BLACK)),
            )
            .map_err(VizError::render)?;

        chart
            .draw_series(
                layout
                    .iter()
                    .zip(colors.frame(t))
                    .map(|(&pos, &color)| Circle::new(pos, config.node_radius, color.filled())),
            )
            .map_err(VizError::render)?;

        root.present().map_err(VizError::render)?;
        debug!("frame {t} done");
    }
    Ok(())
}

fn validate(graph: &Graph, colors: &ColorTable) -> Result<(), VizError> {
    if graph.node_count() == 0 {
        return Err(VizError::EmptyInput("graph has no nodes"));
    }
    if colors.timesteps() == 0 {
        return Err(VizError::EmptyInput("evolution has no timesteps"));
    }
    if colors.node_count() != graph.node_count() {
        return Err(VizError::ShapeMismatch(format!(
            "evolution covers {} nodes, graph has {}",
            colors.node_count(),
            graph.node_count()
        )));
    }
    Ok(())
}
