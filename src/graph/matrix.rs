use super::*;
use crate::errors::{InvariantCheck, MatrixInvariantError};

/// Dense row-major storage for a complete weighted instance. Diagonal
/// entries are stored but carry no meaning. An instance may record the
/// weight of a known optimal tour, which the harness uses to judge
/// solver results; the solver itself never looks at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphMatrix {
    number_of_vertices: NumVertices,
    weights: Vec<Weight>,
    optimum: Option<Weight>,
}

impl GraphMatrix {
    /// Creates an instance with `n` vertices and all weights zero.
    ///
    /// # Example
    /// ```
    /// use batsp::graph::*;
    /// let matrix = GraphMatrix::new(4);
    /// assert_eq!(matrix.number_of_vertices(), 4);
    /// assert_eq!(matrix.weight(0, 1), 0);
    /// ```
    pub fn new(number_of_vertices: NumVertices) -> Self {
        assert!(number_of_vertices > 0);
        Self {
            number_of_vertices,
            weights: vec![0; (number_of_vertices as usize).pow(2)],
            optimum: None,
        }
    }

    /// Builds an instance from explicit rows; each row must have exactly
    /// as many entries as there are rows.
    ///
    /// # Example
    /// ```
    /// use batsp::graph::*;
    /// let matrix = GraphMatrix::from_rows(&[[0, 2], [3, 0]]);
    /// assert_eq!(matrix.weight(0, 1), 2);
    /// assert_eq!(matrix.weight(1, 0), 3);
    /// ```
    pub fn from_rows<R: AsRef<[Weight]>>(rows: &[R]) -> Self {
        let n = rows.len();
        let mut matrix = Self::new(n as NumVertices);
        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), n);
            matrix.weights[u * n..(u + 1) * n].copy_from_slice(row);
        }
        matrix
    }

    pub fn set_weight(&mut self, u: Vertex, v: Vertex, weight: Weight) {
        let idx = self.index_of(u, v);
        self.weights[idx] = weight;
    }

    /// Records the weight of a known optimal tour for this instance
    pub fn set_optimum(&mut self, optimum: Weight) {
        self.optimum = Some(optimum);
    }

    pub fn optimum(&self) -> Option<Weight> {
        self.optimum
    }

    fn index_of(&self, u: Vertex, v: Vertex) -> usize {
        assert!(u < self.number_of_vertices && v < self.number_of_vertices);
        u as usize * self.len() + v as usize
    }
}

impl DistanceMatrix for GraphMatrix {
    fn number_of_vertices(&self) -> NumVertices {
        self.number_of_vertices
    }

    fn weight(&self, u: Vertex, v: Vertex) -> Weight {
        self.weights[self.index_of(u, v)]
    }
}

impl InvariantCheck<MatrixInvariantError> for GraphMatrix {
    fn is_correct(&self) -> Result<(), MatrixInvariantError> {
        if self.number_of_vertices == 0 {
            return Err(MatrixInvariantError::Empty);
        }

        let expected = self.len().pow(2);
        if self.weights.len() != expected {
            return Err(MatrixInvariantError::StorageSize {
                expected,
                found: self.weights.len(),
            });
        }

        Ok(())
    }
}
