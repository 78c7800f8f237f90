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

//! Visualizes a precomputed epidemic state evolution over a fixed network.
//!
//! The pipeline has three sequential stages:
//! 1. load an adjacency table and build an undirected [`graph::Graph`];
//! 2. load an evolution table and map every state code to a color
//!    ([`color::ColorTable`]);
//! 3. lay the graph out once with a spring layout and render one GIF frame
//!    per timestep ([`animate::render`]).
//!
//! Independently of the rendering, [`series::SirSeries`] reduces the
//! evolution table to Susceptible/Infected/Recovered counts per timestep.
//!
//! This crate only visualizes an evolution that was computed elsewhere; it
//! does not simulate any dynamics.

pub mod animate;
pub mod color;
pub mod graph;
pub mod layout;
pub mod series;
pub mod table;

use thiserror::Error;

/// All failures are fatal to the pipeline; there is no retry or recovery.
#[derive(Debug, Error)]
pub enum VizError {
    /// Missing or unreadable input, or an unwritable output path.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader failed (also covers missing input files).
    #[error("input error: {0}")]
    Input(#[from] csv::Error),

    /// A cell that should hold an integer does not.
    #[error("row {row}, column {column}: cannot parse {value:?} as an integer")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    /// The two input tables disagree on dimensions, or a table is ragged.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Zero nodes or zero timesteps; refusing to emit an empty artifact.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// The plotting backend failed while drawing or encoding the GIF.
    #[error("render error: {0}")]
    Render(String),
}

impl VizError {
    pub(crate) fn render<E: std::fmt::Display>(e: E) -> Self {
        VizError::Render(e.to_string())
    }
}
