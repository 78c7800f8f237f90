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

use crate::table::EvolutionTable;

/// Susceptible/Infected/Recovered counts per timestep.
///
/// Every node falls into exactly one bucket every timestep, so for all t
/// `s[t] + i[t] + r[t]` equals the node count. Computed straight from the
/// evolution table, independent of the graph and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SirSeries {
    pub s: Vec<usize>,
    pub i: Vec<usize>,
    pub r: Vec<usize>,
}

impl SirSeries {
    /// Code 0 is susceptible, positive is infected, negative is recovered.
    pub fn from_evolution(evolution: &EvolutionTable) -> Self {
        let timesteps = evolution.timesteps();
        let mut s = Vec::with_capacity(timesteps);
        let mut i = Vec::with_capacity(timesteps);
        let mut r = Vec::with_capacity(timesteps);
        for frame in evolution.frames() {
            s.push(frame.iter().filter(|&&code| code == 0).count());
            i.push(frame.iter().filter(|&&code| code > 0).count());
            r.push(frame.iter().filter(|&&code| code < 0).count());
        }
        Self { s, i, r }
    }

    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Three CSV lines (`S,...`, `I,...`, `R,...`) for downstream tooling.
    pub fn to_csv(&self) -> String {
        let line = |label: &str, counts: &[usize]| {
            let mut out = label.to_string();
            for c in counts {
                out.push(',');
                out.push_str(&c.to_string());
            }
            out.push('\n');
            out
        };
        line("S", &self.s) + &line("I", &self.i) + &line("R", &self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_partition_the_nodes() {
        // Four nodes over three timesteps.
        let evolution = EvolutionTable::from_node_rows(vec![
            vec![0, 2, -1],
            vec![0, 0, 1],
            vec![1, 3, -2],
            vec![-1, -4, -9],
        ]);
        let series = SirSeries::from_evolution(&evolution);
        assert_eq!(series.len(), 3);
        assert_eq!(series.s, vec![2, 1, 0]);
        assert_eq!(series.i, vec![1, 2, 1]);
        assert_eq!(series.r, vec![1, 1, 3]);
        for t in 0..series.len() {
            assert_eq!(series.s[t] + series.i[t] + series.r[t], 4);
        }
    }

    #[test]
    fn single_timestep_gives_length_one_series() {
        let evolution = EvolutionTable::from_node_rows(vec![vec![0], vec![1], vec![-1]]);
        let series = SirSeries::from_evolution(&evolution);
        assert_eq!(series.len(), 1);
        assert_eq!((series.s[0], series.i[0], series.r[0]), (1, 1, 1));
    }

    #[test]
    fn node_zero_moves_from_s_to_i() {
        let evolution = EvolutionTable::from_node_rows(vec![vec![0, 2]]);
        let series = SirSeries::from_evolution(&evolution);
        assert_eq!(series.s, vec![1, 0]);
        assert_eq!(series.i, vec![0, 1]);
    }

    #[test]
    fn csv_output_has_three_labeled_lines() {
        let evolution = EvolutionTable::from_node_rows(vec![vec![0, 1], vec![0, -1]]);
        let series = SirSeries::from_evolution(&evolution);
        assert_eq!(series.to_csv(), "S,2,0\nI,0,1\nR,0,1\n");
    }
}
