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

//! State-code to color mapping.
//!
//! Codes follow the SIR convention: 0 is susceptible, positive codes are
//! infected with rising severity, negative codes are recovered with
//! deepening tiers. The mapping is total over `i32`; every code outside the
//! listed domain falls to the deepest recovered green.

use plotters::style::RGBColor;

use crate::table::EvolutionTable;

pub const SUSCEPTIBLE_BLUE: RGBColor = RGBColor(0x41, 0x69, 0xE1);
pub const INFECTED_1: RGBColor = RGBColor(0xBF, 0x2C, 0x35);
pub const INFECTED_2: RGBColor = RGBColor(0xF0, 0x78, 0x57);
pub const INFECTED_3: RGBColor = RGBColor(0xBE, 0x39, 0x8D);
pub const RECOVERED_1: RGBColor = RGBColor(0x00, 0x80, 0x00);
pub const RECOVERED_2: RGBColor = RGBColor(0x00, 0x66, 0x00);
pub const RECOVERED_3: RGBColor = RGBColor(0x00, 0x4D, 0x00);
pub const RECOVERED_4: RGBColor = RGBColor(0x00, 0x35, 0x00);
pub const RECOVERED_DEEP: RGBColor = RGBColor(0x00, 0x1E, 0x00);

const STATE_COLORS: [(i32, RGBColor); 8] = [
    (0, SUSCEPTIBLE_BLUE),
    (1, INFECTED_1),
    (2, INFECTED_2),
    (3, INFECTED_3),
    (-1, RECOVERED_1),
    (-2, RECOVERED_2),
    (-3, RECOVERED_3),
    (-4, RECOVERED_4),
];

/// Pure total mapping from state code to node color.
pub fn node_color(code: i32) -> RGBColor {
    STATE_COLORS
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, color)| color)
        .unwrap_or(RECOVERED_DEEP)
}

/// Per-frame node colors, same shape as the evolution table.
///
/// Fully materialized before the animation starts; the renderer only reads
/// rows out of it.
#[derive(Debug, Clone)]
pub struct ColorTable {
    rows: Vec<Vec<RGBColor>>,
}

impl ColorTable {
    pub fn from_evolution(evolution: &EvolutionTable) -> Self {
        let rows = evolution
            .frames()
            .iter()
            .map(|frame| frame.iter().map(|&code| node_color(code)).collect())
            .collect();
        Self { rows }
    }

    pub fn timesteps(&self) -> usize {
        self.rows.len()
    }

    pub fn node_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Node colors for frame `t`.
    pub fn frame(&self, t: usize) -> &[RGBColor] {
        &self.rows[t]
    }
}
