use itertools::Itertools;

use crate::prelude::*;

/// Exhaustively enumerates all `(n-1)!` orderings of the non-start
/// vertices and returns a minimum-weight closed tour beginning at
/// `start`. Only intended as a correctness reference for small
/// instances.
///
/// ** Panics if the instance has no vertices or `start` is out of range **
pub fn brute_force_solver<M: DistanceMatrix>(matrix: &M, start: Vertex) -> Tour {
    assert!(!matrix.is_empty());
    assert!(start < matrix.number_of_vertices());

    if matrix.number_of_vertices() == 1 {
        return Tour::trivial(start);
    }

    let others = matrix.vertices().filter(|&v| v != start).collect_vec();

    let mut best_weight = Weight::MAX;
    let mut best_order: Vec<Vertex> = Vec::new();

    for order in others.iter().copied().permutations(others.len()) {
        let mut weight = matrix.weight(start, order[0]);
        weight += order
            .windows(2)
            .map(|pair| matrix.weight(pair[0], pair[1]))
            .sum::<Weight>();
        weight += matrix.weight(*order.last().unwrap(), start);

        if weight < best_weight {
            best_weight = weight;
            best_order = order;
        }
    }

    let mut vertices = Vec::with_capacity(matrix.len());
    vertices.push(start);
    vertices.extend(best_order);

    Tour::new(vertices, best_weight)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::scenario_matrix;

    #[test]
    fn four_vertex_scenario() {
        let matrix = scenario_matrix();
        let tour = brute_force_solver(&matrix, 0);

        assert_eq!(tour.weight(), 35);
        assert!(tour.is_valid(&matrix, 0));
    }

    #[test]
    fn single_vertex_instance() {
        let matrix = GraphMatrix::new(1);
        assert_eq!(brute_force_solver(&matrix, 0), Tour::trivial(0));
    }

    #[test]
    fn picks_the_cheap_orientation() {
        let matrix = GraphMatrix::from_rows(&[[0, 1, 90], [90, 0, 1], [1, 90, 0]]);
        let tour = brute_force_solver(&matrix, 1);

        assert_eq!(tour.weight(), 3);
        assert_eq!(tour.vertices(), [1, 2, 0]);
    }
}
