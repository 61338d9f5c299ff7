pub mod branch_and_bound;
pub mod brute_force;

pub use branch_and_bound::*;
pub use brute_force::*;
