use crate::stencil::*;

/// Unit impulse spreads like a binomial distribution.
pub fn averaging() -> Coefficients {
    Coefficients::new(0.25, 0.5, 0.25)
}

/// Explicit heat equation, stable for `k * dt / dx^2 <= 0.5`.
pub fn heat_1d(dt: f64, dx: f64, k: f64) -> Coefficients {
    Coefficients::from_operation(move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        middle + (k * dt / (dx * dx)) * (left - 2.0 * middle + right)
    })
}

/// First order upwind advection to the right.
pub fn upwind_1d(courant: f64) -> Coefficients {
    Coefficients::from_operation(move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        middle - courant * (middle - left)
    })
}
