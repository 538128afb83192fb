//! Randomized depth-first spanning tree over the cell grid
//!
//! The walk is iterative with an explicit stack, so large cell grids never
//! recurse. Every cell is reached exactly once, yielding
//! `cell_count - 1` edges in the order they were carved.

use crate::algorithm::bitset::CellBitset;
use crate::algorithm::layout::{CellCoord, CellLayout, DIRECTIONS};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Carved adjacency between two neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellEdge {
    /// Cell the walk stood on
    pub from: CellCoord,
    /// Newly visited neighbour
    pub to: CellCoord,
}

/// Result of the depth-first walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Cell the walk started from
    pub start: CellCoord,
    /// Carved edges in walk order
    pub edges: Vec<CellEdge>,
}

impl SpanningTree {
    /// Every cell the tree touches: the start followed by each edge target
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        std::iter::once(self.start).chain(self.edges.iter().map(|edge| edge.to))
    }
}

/// Walk the cell grid from a uniformly random start cell
///
/// The start column is drawn before the start row. At each step the
/// unvisited neighbours of the stack top are collected in [`DIRECTIONS`]
/// order and one is chosen uniformly; a stack top without unvisited
/// neighbours is popped.
pub fn build_spanning_tree<R: Rng + ?Sized>(layout: &CellLayout, rng: &mut R) -> SpanningTree {
    let start = CellCoord::new(
        rng.random_range(0..layout.cell_width()),
        rng.random_range(0..layout.cell_height()),
    );

    let mut visited = CellBitset::new(layout.cell_count());
    visited.insert(layout.index(start));

    let mut stack = vec![start];
    let mut edges = Vec::with_capacity(layout.cell_count().saturating_sub(1));
    let mut neighbors = Vec::with_capacity(DIRECTIONS.len());

    while let Some(&current) = stack.last() {
        neighbors.clear();
        neighbors.extend(
            DIRECTIONS
                .iter()
                .filter_map(|&direction| layout.neighbor(current, direction))
                .filter(|&cell| !visited.contains(layout.index(cell))),
        );

        let Some(&next) = neighbors.choose(rng) else {
            stack.pop();
            continue;
        };

        visited.insert(layout.index(next));
        edges.push(CellEdge {
            from: current,
            to: next,
        });
        stack.push(next);
    }

    log::debug!(
        "spanning tree: start ({}, {}), {} edges, {visited} visited",
        start.x,
        start.y,
        edges.len()
    );

    SpanningTree { start, edges }
}
