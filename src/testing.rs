use crate::prelude::*;
use rand::Rng;

/// The 4-vertex asymmetric instance with known optimal weight 35
/// (one optimal tour is 0 -> 1 -> 3 -> 2 -> 0)
pub fn scenario_matrix() -> GraphMatrix {
    let mut matrix = GraphMatrix::from_rows(&[
        [0, 10, 15, 20],
        [5, 0, 9, 10],
        [6, 13, 0, 12],
        [8, 8, 9, 0],
    ]);
    matrix.set_optimum(35);
    matrix
}

/// Endless stream of random complete instances of a fixed size
pub fn random_matrix_stream<R: Rng>(
    rng: &mut R,
    n: NumVertices,
    max_weight: Weight,
) -> impl Iterator<Item = GraphMatrix> + '_ {
    std::iter::repeat_with(move || GraphMatrix::random_complete(rng, n, max_weight))
}
