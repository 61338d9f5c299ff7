pub mod matrix;
pub mod random;

pub type Vertex = u32;
pub type NumVertices = Vertex;
pub type Weight = u64;

use std::ops::Range;

pub use matrix::*;
pub use random::*;

/// Read-only view on a complete weighted (generally asymmetric) instance
pub trait DistanceMatrix {
    /// Returns the number of vertices of the instance
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the weight of the directed edge (u, v).
    /// The value on the diagonal (u == v) is unspecified and must not be
    /// relied upon. ** Panics if u >= n or v >= n **
    fn weight(&self, u: Vertex, v: Vertex) -> Weight;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns true if the instance has no vertices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a range over all vertex indices
    fn vertices(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }
}
