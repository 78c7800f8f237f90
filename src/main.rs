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

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use sir_netviz::animate::{self, AnimationConfig, FRAME_DELAY_MS};
use sir_netviz::color::ColorTable;
use sir_netviz::graph::Graph;
use sir_netviz::layout::DEFAULT_ITERATIONS;
use sir_netviz::series::SirSeries;
use sir_netviz::table::{AdjacencyTable, EvolutionTable, DEFAULT_COLUMNS};
use sir_netviz::VizError;

/// Renders a precomputed epidemic evolution on a network as an animated GIF
/// and prints the S/I/R count series as CSV on stdout.
#[derive(Parser, Debug)]
#[command(name = "sir-netviz", version, about)]
struct Cli {
    /// Adjacency table: one row per node, cells list neighbor ids.
    #[arg(long, default_value = "./files/graph.csv")]
    graph: PathBuf,

    /// Evolution table: one row per node, one column per timestep.
    #[arg(long, default_value = "./files/evolution.csv")]
    evolution: PathBuf,

    /// Output path of the animated GIF.
    #[arg(long, default_value = "./files/animation.gif")]
    out: PathBuf,

    /// Number of adjacency columns to read per row.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Spring-layout seed; omit for a fresh layout per run.
    #[arg(long)]
    seed: Option<u64>,

    /// Spring-layout force iterations.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let adjacency = AdjacencyTable::from_path(&cli.graph, cli.columns)
        .with_context(|| format!("loading adjacency table {}", cli.graph.display()))?;
    let graph = Graph::from_adjacency(&adjacency);
    info!(
        "graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let evolution = EvolutionTable::from_path(&cli.evolution)
        .with_context(|| format!("loading evolution table {}", cli.evolution.display()))?;
    if evolution.node_count() != graph.node_count() {
        return Err(VizError::ShapeMismatch(format!(
            "evolution covers {} nodes, graph has {}",
            evolution.node_count(),
            graph.node_count()
        ))
        .into());
    }
    info!("evolution: {} timesteps", evolution.timesteps());

    let colors = ColorTable::from_evolution(&evolution);
    let config = AnimationConfig {
        out_path: cli.out.clone(),
        size: (cli.width, cli.height),
        frame_delay_ms: FRAME_DELAY_MS,
        layout_iterations: cli.iterations,
        layout_seed: cli.seed,
        ..AnimationConfig::default()
    };
    animate::render(&graph, &colors, &config)
        .with_context(|| format!("rendering {}", cli.out.display()))?;
    info!("wrote {}", cli.out.display());

    let series = SirSeries::from_evolution(&evolution);
    print!("{}", series.to_csv());
    Ok(())
}
