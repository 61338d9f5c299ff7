use crate::graph::*;
use std::io::Write;

/// A closed tour produced by a solver: the vertex sequence holds every
/// vertex exactly once starting at the chosen start vertex; the edge back
/// from the last vertex to the start is implicit but included in `weight`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    vertices: Vec<Vertex>,
    weight: Weight,
}

impl Tour {
    pub fn new(vertices: Vec<Vertex>, weight: Weight) -> Self {
        assert!(!vertices.is_empty());
        Self { vertices, weight }
    }

    /// The zero-weight tour of a single-vertex instance.
    ///
    /// # Example
    /// ```
    /// use batsp::utils::Tour;
    /// let tour = Tour::trivial(0);
    /// assert_eq!(tour.weight(), 0);
    /// assert_eq!(tour.len(), 1);
    /// ```
    pub fn trivial(start: Vertex) -> Self {
        Self::new(vec![start], 0)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices on the tour.
    ///
    /// # Example
    /// ```
    /// use batsp::utils::Tour;
    /// let tour = Tour::new(vec![0, 2, 1], 9);
    /// assert_eq!(tour.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the vertices in tour order.
    ///
    /// # Example
    /// ```
    /// use batsp::utils::Tour;
    /// let tour = Tour::new(vec![0, 2, 1], 9);
    /// let mut iter = tour.iter();
    /// assert_eq!(iter.next(), Some(0));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Recomputes the closed-tour weight on the given instance, including
    /// the edge back from the last vertex to the first.
    pub fn weight_on<M: DistanceMatrix>(&self, matrix: &M) -> Weight {
        if self.len() == 1 {
            return 0;
        }

        let closing = matrix.weight(*self.vertices.last().unwrap(), self.vertices[0]);
        self.vertices
            .windows(2)
            .map(|pair| matrix.weight(pair[0], pair[1]))
            .sum::<Weight>()
            + closing
    }

    /// Returns true if the tour is a feasible optimal-candidate for the
    /// instance: it begins at `start`, visits every vertex exactly once,
    /// and its recorded weight matches the edge weights of the instance.
    pub fn is_valid<M: DistanceMatrix>(&self, matrix: &M, start: Vertex) -> bool {
        if self.len() != matrix.len() || self.vertices[0] != start {
            return false;
        }

        let mut seen = vec![false; matrix.len()];
        for v in self.iter() {
            if v >= matrix.number_of_vertices() || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }

        self.weight == self.weight_on(matrix)
    }

    /// Writes the tour as a weight line followed by the vertex sequence.
    ///
    /// ```
    /// use batsp::utils::Tour;
    /// let tour = Tour::new(vec![0, 1, 3, 2], 35);
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// tour.write(&mut buffer).unwrap();
    /// assert_eq!(buffer, b"35\n0 1 3 2\n");
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(&mut writer, "{}", self.weight)?;

        let mut sep = "";
        for v in self.iter() {
            write!(&mut writer, "{sep}{v}")?;
            sep = " ";
        }
        writeln!(&mut writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::scenario_matrix;

    #[test]
    fn weight_on_includes_closing_edge() {
        let matrix = scenario_matrix();
        let tour = Tour::new(vec![0, 1, 3, 2], 35);

        // 10 + 10 + 9 + 6
        assert_eq!(tour.weight_on(&matrix), 35);
        assert!(tour.is_valid(&matrix, 0));
    }

    #[test]
    fn rejects_wrong_start() {
        let matrix = scenario_matrix();
        let tour = Tour::new(vec![1, 3, 2, 0], 35);
        assert!(!tour.is_valid(&matrix, 0));
    }

    #[test]
    fn rejects_repeated_vertex() {
        let matrix = scenario_matrix();
        let tour = Tour::new(vec![0, 1, 1, 2], 35);
        assert!(!tour.is_valid(&matrix, 0));
    }

    #[test]
    fn rejects_wrong_weight() {
        let matrix = scenario_matrix();
        let tour = Tour::new(vec![0, 1, 3, 2], 36);
        assert!(!tour.is_valid(&matrix, 0));
    }

    #[test]
    fn trivial_tour_is_valid() {
        let matrix = GraphMatrix::new(1);
        assert!(Tour::trivial(0).is_valid(&matrix, 0));
    }
}
