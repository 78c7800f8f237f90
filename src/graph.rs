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

use crate::table::AdjacencyTable;

/// An undirected graph with a dense node set `0..nodes`.
///
/// Nodes come from the adjacency table's row count, so isolated nodes are
/// preserved. Edges are stored exactly as the table lists them: duplicates,
/// self-loops, and out-of-range neighbor ids all pass through unchecked.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// One node per table row, one edge per non-empty cell.
    pub fn from_adjacency(table: &AdjacencyTable) -> Self {
        let nodes = table.node_count();
        let mut edges = Vec::new();
        for (node, row) in table.rows().iter().enumerate() {
            for &cell in row {
                if let Some(neighbor) = cell {
                    edges.push((node, neighbor));
                }
            }
        }
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge list as (row-node, neighbor) pairs, in table order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Undirected membership test, used by tests.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.edges
            .iter()
            .any(|&(a, b)| (a, b) == (u, v) || (a, b) == (v, u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<Option<usize>>>) -> AdjacencyTable {
        // Round-trip through a scratch file to exercise the real loader.
        // Trailing comma keeps all-empty rows from reading as blank lines,
        // which the reader would skip.
        let text: String = rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|c| c.map_or(String::new(), |v| v.to_string()))
                    .collect();
                cells.join(",") + ",\n"
            })
            .collect();
        let columns = rows.iter().map(Vec::len).max().unwrap_or(1);
        let path = std::env::temp_dir().join(format!(
            "sir-netviz-{}-graph-{}.csv",
            std::process::id(),
            rows.len()
        ));
        std::fs::write(&path, text).unwrap();
        let table = AdjacencyTable::from_path(&path, columns).unwrap();
        std::fs::remove_file(&path).unwrap();
        table
    }

    #[test]
    fn node_count_equals_row_count_even_without_edges() {
        let g = Graph::from_adjacency(&table(vec![vec![None], vec![None], vec![None]]));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn first_cell_becomes_an_edge() {
        let g = Graph::from_adjacency(&table(vec![vec![Some(1), None], vec![None, None]]));
        assert_eq!(g.node_count(), 2);
        assert!(g.contains_edge(0, 1));
    }

    #[test]
    fn duplicate_and_self_edges_pass_through() {
        let g = Graph::from_adjacency(&table(vec![
            vec![Some(1), Some(1), Some(0)],
            vec![Some(0), None, None],
        ]));
        // 0-1 twice, 0-0 once, 1-0 once: nothing is deduplicated.
        assert_eq!(g.edge_count(), 4);
        assert!(g.contains_edge(0, 0));
    }

    #[test]
    fn out_of_range_neighbors_are_not_validated() {
        let g = Graph::from_adjacency(&table(vec![vec![Some(7)]]));
        assert_eq!(g.node_count(), 1);
        assert!(g.contains_edge(0, 7));
    }
}
