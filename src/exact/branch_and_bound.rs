use std::{cmp::Ordering, collections::BinaryHeap, mem::take};

use log::info;
use smallvec::SmallVec;

use crate::prelude::*;

type NodeIndex = u32;

/// Minimum outgoing edge weight per vertex. Summed over all vertices this
/// is an admissible lower bound on any closed tour, since every vertex
/// contributes exactly one outgoing edge to a tour.
struct MinOutTable {
    min_out: Vec<Weight>,
    total: Weight,
}

impl MinOutTable {
    fn new<M: DistanceMatrix>(matrix: &M) -> Self {
        let min_out: Vec<Weight> = matrix
            .vertices()
            .map(|u| {
                matrix
                    .vertices()
                    .filter(|&v| v != u)
                    .map(|v| matrix.weight(u, v))
                    .min()
                    .unwrap_or(0) // a single-vertex instance has no outgoing edges
            })
            .collect();

        let total = min_out.iter().sum();
        Self { min_out, total }
    }

    fn of(&self, u: Vertex) -> Weight {
        self.min_out[u as usize]
    }

    fn total(&self) -> Weight {
        self.total
    }
}

/// One partial tour from the start vertex up to `vertex`. The realized
/// path and the visited set are recovered by walking the parent chain;
/// nodes are immutable after creation and live in the engine's arena
/// until the search completes.
struct SearchNode {
    vertex: Vertex,
    lower_bound: Weight,
    parent: Option<NodeIndex>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    lower_bound: Weight,
    node: NodeIndex,
}

// BinaryHeap is a max-heap; order entries so that the smallest bound is
// popped first, ties resolved toward the earlier-created node.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .lower_bound
            .cmp(&self.lower_bound)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first branch-and-bound search for a minimum-weight closed tour.
///
/// The bound of a node is the weight of the edges fixed so far plus, for
/// every vertex without a fixed outgoing edge, its cheapest outgoing
/// option. Extending a partial tour by an edge therefore replaces the
/// frontier vertex's hypothetical cheapest edge with the real one. The
/// bound is deliberately weaker than a matrix-reduction bound but cheap
/// to maintain.
pub struct BranchAndBound<'a, M: DistanceMatrix> {
    matrix: &'a M,
    start: Vertex,
    min_out: MinOutTable,
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<HeapEntry>,
    visited: Vec<bool>,
    best_weight: Weight,
    best_path: Vec<Vertex>,
    expansions: usize,
    max_expanded_bound: Weight,
}

impl<'a, M: DistanceMatrix> BranchAndBound<'a, M> {
    /// ** Panics if the instance has no vertices or `start` is out of range **
    pub fn new(matrix: &'a M, start: Vertex) -> Self {
        assert!(!matrix.is_empty());
        assert!(start < matrix.number_of_vertices());

        Self {
            matrix,
            start,
            min_out: MinOutTable::new(matrix),
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            visited: vec![false; matrix.len()],
            best_weight: Weight::MAX,
            best_path: Vec::new(),
            expansions: 0,
            max_expanded_bound: 0,
        }
    }

    /// Runs the search to completion and returns the optimal tour. The
    /// engine is single-shot; all search nodes remain in the arena and
    /// are released in bulk when the engine is dropped.
    pub fn solve(&mut self) -> Tour {
        assert!(self.nodes.is_empty());

        if self.matrix.number_of_vertices() == 1 {
            return Tour::trivial(self.start);
        }

        let root = self.create_node(self.start, self.min_out.total(), None);
        self.frontier.push(HeapEntry {
            lower_bound: self.min_out.total(),
            node: root,
        });

        let mut available: SmallVec<[Vertex; 16]> = SmallVec::new();

        while let Some(HeapEntry { node, .. }) = self.frontier.pop() {
            let lower_bound = self.nodes[node as usize].lower_bound;

            // entries pushed before the incumbent improved may be stale
            if lower_bound >= self.best_weight {
                continue;
            }
            self.expansions += 1;
            self.max_expanded_bound = self.max_expanded_bound.max(lower_bound);

            let frontier_vertex = self.nodes[node as usize].vertex;
            self.available_vertices(node, &mut available);

            if available.is_empty() {
                // complete permutation: replace the frontier vertex's
                // hypothetical cheapest outgoing edge with the real
                // closing edge back to the start
                let closed = lower_bound - self.min_out.of(frontier_vertex)
                    + self.matrix.weight(frontier_vertex, self.start);

                if closed < self.best_weight {
                    self.best_weight = closed;
                    self.best_path = self.path_of(node);
                }
                continue;
            }

            for &child_vertex in &available {
                let child_bound = lower_bound - self.min_out.of(frontier_vertex)
                    + self.matrix.weight(frontier_vertex, child_vertex);

                if child_bound < self.best_weight {
                    let child = self.create_node(child_vertex, child_bound, Some(node));
                    self.frontier.push(HeapEntry {
                        lower_bound: child_bound,
                        node: child,
                    });
                }
            }
        }

        info!(
            "search finished: expanded {} of {} created nodes, best weight {}",
            self.expansions,
            self.nodes.len(),
            self.best_weight
        );

        Tour::new(take(&mut self.best_path), self.best_weight)
    }

    /// Returns the number of nodes popped and expanded so far
    pub fn number_of_expansions(&self) -> usize {
        self.expansions
    }

    /// Largest lower bound among the expanded nodes. Best-first order
    /// with an admissible bound keeps this at or below the optimal tour
    /// weight: until the optimum is recorded the frontier holds a prefix
    /// of an optimal tour whose bound cannot be exceeded by a popped
    /// entry, and afterwards the stale-entry check discards anything
    /// matching the incumbent.
    pub fn max_expanded_bound(&self) -> Weight {
        self.max_expanded_bound
    }

    fn create_node(
        &mut self,
        vertex: Vertex,
        lower_bound: Weight,
        parent: Option<NodeIndex>,
    ) -> NodeIndex {
        let index = self.nodes.len() as NodeIndex;
        self.nodes.push(SearchNode {
            vertex,
            lower_bound,
            parent,
        });
        index
    }

    /// Collects all vertices not on the path from the root to `node`
    fn available_vertices(&mut self, node: NodeIndex, out: &mut SmallVec<[Vertex; 16]>) {
        self.visited.fill(false);

        let mut current = Some(node);
        while let Some(index) = current {
            let node = &self.nodes[index as usize];
            self.visited[node.vertex as usize] = true;
            current = node.parent;
        }

        out.clear();
        out.extend(
            self.matrix
                .vertices()
                .filter(|&v| !self.visited[v as usize]),
        );
    }

    /// Reconstructs the realized path of `node`, ordered from the start vertex
    fn path_of(&self, node: NodeIndex) -> Vec<Vertex> {
        let mut path = Vec::with_capacity(self.matrix.len());

        let mut current = Some(node);
        while let Some(index) = current {
            let node = &self.nodes[index as usize];
            path.push(node.vertex);
            current = node.parent;
        }

        path.reverse();
        path
    }
}

/// Solves the instance exactly and returns a minimum-weight closed tour
/// beginning at `start`.
pub fn branch_and_bound_solver<M: DistanceMatrix>(matrix: &M, start: Vertex) -> Tour {
    let mut algo = BranchAndBound::new(matrix, start);
    algo.solve()
}
