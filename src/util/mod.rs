pub use num_traits::{Num, One, Zero};

mod span;
pub use span::*;

/// Fixed size weight vector, one entry per stencil neighbor.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;
