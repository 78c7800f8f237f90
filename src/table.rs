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

//! Loaders for the two delimited input tables. Neither file has a header
//! row; both are read once and are immutable afterwards.

use std::path::Path;

use csv::ReaderBuilder;

use crate::VizError;

/// Default number of adjacency columns read per row.
pub const DEFAULT_COLUMNS: usize = 20;

/// One row per node; each cell is either empty or the id of a neighbor.
#[derive(Debug, Clone)]
pub struct AdjacencyTable {
    rows: Vec<Vec<Option<usize>>>,
}

impl AdjacencyTable {
    /// Reads an adjacency table, keeping at most `columns` cells per row.
    ///
    /// Empty or missing cells become `None`. A non-integer cell is a
    /// [`VizError::Parse`]. Neighbor ids are not bounds-checked here or
    /// anywhere downstream.
    pub fn from_path<P: AsRef<Path>>(path: P, columns: usize) -> Result<Self, VizError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut rows = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let mut cells = Vec::with_capacity(columns);
            for column in 0..columns {
                let cell = record.get(column).map(str::trim).unwrap_or("");
                if cell.is_empty() {
                    cells.push(None);
                } else {
                    let id = cell.parse::<usize>().map_err(|_| VizError::Parse {
                        row,
                        column,
                        value: cell.to_string(),
                    })?;
                    cells.push(Some(id));
                }
            }
            rows.push(cells);
        }
        Ok(Self { rows })
    }

    /// Node count of the graph this table encodes, one node per row.
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.rows
    }
}

/// Per-node state codes over time, indexed `[timestep][node]`.
///
/// The file stores one row per node and one column per timestep; the table
/// is transposed on load so that each row of `states` is one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionTable {
    states: Vec<Vec<i32>>,
}

impl EvolutionTable {
    /// Reads an evolution table and transposes it to timesteps x nodes.
    ///
    /// Every file row must have the same length; a ragged file is a
    /// [`VizError::ShapeMismatch`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VizError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut per_node: Vec<Vec<i32>> = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let mut codes = Vec::with_capacity(record.len());
            for (column, cell) in record.iter().enumerate() {
                let cell = cell.trim();
                let code = cell.parse::<i32>().map_err(|_| VizError::Parse {
                    row,
                    column,
                    value: cell.to_string(),
                })?;
                codes.push(code);
            }
            if let Some(first) = per_node.first() {
                if codes.len() != first.len() {
                    return Err(VizError::ShapeMismatch(format!(
                        "evolution row {} has {} timesteps, row 0 has {}",
                        row,
                        codes.len(),
                        first.len()
                    )));
                }
            }
            per_node.push(codes);
        }
        Ok(Self::from_node_rows(per_node))
    }

    /// Builds the table from one state sequence per node (pre-transpose).
    pub fn from_node_rows(per_node: Vec<Vec<i32>>) -> Self {
        let timesteps = per_node.first().map_or(0, Vec::len);
        let states = (0..timesteps)
            .map(|t| per_node.iter().map(|codes| codes[t]).collect())
            .collect();
        Self { states }
    }

    pub fn timesteps(&self) -> usize {
        self.states.len()
    }

    pub fn node_count(&self) -> usize {
        self.states.first().map_or(0, Vec::len)
    }

    /// State codes of every node at timestep `t`.
    pub fn frame(&self, t: usize) -> &[i32] {
        &self.states[t]
    }

    pub fn frames(&self) -> &[Vec<i32>] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sir-netviz-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn adjacency_preserves_row_count_and_empty_cells() {
        let path = scratch_file("adj.csv", "1,,\n,,\n0,1,\n");
        let table = AdjacencyTable::from_path(&path, 3).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(table.node_count(), 3);
        assert_eq!(table.rows()[0], vec![Some(1), None, None]);
        assert_eq!(table.rows()[1], vec![None, None, None]);
        assert_eq!(table.rows()[2], vec![Some(0), Some(1), None]);
    }

    #[test]
    fn adjacency_ignores_cells_past_the_column_width() {
        let path = scratch_file("adj-wide.csv", "1,2,3,4\n");
        let table = AdjacencyTable::from_path(&path, 2).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(table.rows()[0], vec![Some(1), Some(2)]);
    }

    #[test]
    fn adjacency_rejects_non_integer_cells() {
        let path = scratch_file("adj-bad.csv", "1,x\n");
        let err = AdjacencyTable::from_path(&path, 2).unwrap_err();
        fs::remove_file(&path).unwrap();
        match err {
            VizError::Parse { row, column, value } => {
                assert_eq!((row, column), (0, 1));
                assert_eq!(value, "x");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn missing_input_file_fails() {
        let path = std::env::temp_dir().join("sir-netviz-does-not-exist.csv");
        assert!(AdjacencyTable::from_path(&path, 20).is_err());
    }

    #[test]
    fn evolution_is_transposed_on_load() {
        // Two nodes, three timesteps.
        let path = scratch_file("evo.csv", "0,1,2\n0,0,-1\n");
        let table = EvolutionTable::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(table.timesteps(), 3);
        assert_eq!(table.node_count(), 2);
        assert_eq!(table.frame(0), &[0, 0]);
        assert_eq!(table.frame(1), &[1, 0]);
        assert_eq!(table.frame(2), &[2, -1]);
    }

    #[test]
    fn ragged_evolution_is_a_shape_mismatch() {
        let path = scratch_file("evo-ragged.csv", "0,1,2\n0,0\n");
        let err = EvolutionTable::from_path(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, VizError::ShapeMismatch(_)));
    }

    #[test]
    fn negative_codes_parse() {
        let path = scratch_file("evo-neg.csv", "-4,-1\n");
        let table = EvolutionTable::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(table.frame(0), &[-4]);
        assert_eq!(table.frame(1), &[-1]);
    }
}
