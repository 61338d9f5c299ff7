use crate::graph::*;
use rand::Rng;

pub trait RandomComplete: Sized {
    /// Generates a complete asymmetric instance on `n` vertices with every
    /// off-diagonal weight drawn uniformly from `1..=max_weight`. The two
    /// directions of a vertex pair are drawn independently.
    fn random_complete<R: Rng>(rng: &mut R, n: NumVertices, max_weight: Weight) -> Self;
}

impl RandomComplete for GraphMatrix {
    fn random_complete<R: Rng>(rng: &mut R, n: NumVertices, max_weight: Weight) -> Self {
        assert!(max_weight >= 1);

        let mut matrix = Self::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v {
                    matrix.set_weight(u, v, rng.gen_range(1..=max_weight));
                }
            }
        }

        matrix
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn weights_respect_range() {
        let mut rng = Pcg64::seed_from_u64(1234);

        for max_weight in [1, 10, 1000] {
            let matrix = GraphMatrix::random_complete(&mut rng, 20, max_weight);
            for u in matrix.vertices() {
                for v in matrix.vertices() {
                    if u != v {
                        assert!((1..=max_weight).contains(&matrix.weight(u, v)));
                    }
                }
            }
        }
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let first = GraphMatrix::random_complete(&mut Pcg64::seed_from_u64(777), 12, 10);
        let second = GraphMatrix::random_complete(&mut Pcg64::seed_from_u64(777), 12, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn single_vertex_instance() {
        let mut rng = Pcg64::seed_from_u64(1);
        let matrix = GraphMatrix::random_complete(&mut rng, 1, 10);
        assert_eq!(matrix.number_of_vertices(), 1);
    }
}
