use crate::domain::*;
use crate::error::*;

/// Index used when no impulse position is given.
/// For a single point domain `N / 2` is the left ghost cell,
/// so the only interior point is used instead.
pub fn default_impulse_index(num_points: usize) -> usize {
    (num_points / 2).max(1)
}

/// Discrete impulse, every other interior point is zero.
pub fn impulse_ic(
    field: &mut Field,
    index: Option<usize>,
    value: f64,
) -> StencilResult<()> {
    let index =
        index.unwrap_or_else(|| default_impulse_index(field.num_points()));
    if !field.interior_span().contains(index) {
        return Err(StencilError::ImpulseOutOfRange {
            index,
            num_points: field.num_points(),
        });
    }
    field.interior_mut().fill(0.0);
    field.set_value(index, value)
}
