//! The stencil update kernel.
//!
//! Every kernel reads `current` and writes the interior of `next`,
//! for each interior index `i`
//! `next[i] = left * current[i - 1] + center * current[i] + right * current[i + 1]`.
//! Ghost cells of `next` are never written.
//!
//! Each interior point depends only on three values of `current`,
//! so the interior may be split among workers in any way.
//! All kernels here produce bit identical output.
//!
//! `current` and `next` can't be the same storage,
//! the borrow checker refuses to hand out both borrows:
//!
//! ```compile_fail
//! use stencil_march::domain::Field;
//! use stencil_march::par_stencil;
//! use stencil_march::stencil::standard_stencils::averaging;
//!
//! let mut field = Field::new(5).unwrap();
//! par_stencil::apply(&averaging(), field.buffer(), field.buffer_mut(), 2).unwrap();
//! ```

use crate::error::*;
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;

/// Both buffers need the same length and at least one interior point.
pub fn check_shape(current: &[f64], next: &[f64]) -> StencilResult<()> {
    if current.len() != next.len() {
        return Err(StencilError::LengthMismatch {
            current: current.len(),
            next: next.len(),
        });
    }
    if current.len() < 3 {
        return Err(StencilError::FieldTooSmall { len: current.len() });
    }
    Ok(())
}

/// Compute `output[k]` for index `start + k`.
/// `current` is the whole input buffer, ghosts included.
#[inline]
fn apply_range(
    coefficients: &Coefficients,
    current: &[f64],
    start: usize,
    output: &mut [f64],
) {
    debug_assert!(start >= 1);
    let input = &current[start - 1..start + output.len() + 1];
    for (o, w) in output.iter_mut().zip(input.windows(3)) {
        *o = coefficients.apply(w[0], w[1], w[2]);
    }
}

/// Parallel kernel, the interior is broken into tasks of `chunk_size` points.
pub fn apply(
    coefficients: &Coefficients,
    current: &[f64],
    next: &mut [f64],
    chunk_size: usize,
) -> StencilResult<()> {
    check_shape(current, next)?;
    if chunk_size == 0 {
        return Err(StencilError::InvalidChunkSize);
    }
    profiling::scope!("par_stencil::apply");

    let interior = Span::interior(current.len() - 2);
    next[interior.range()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(c, output_chunk): (usize, &mut [f64])| {
            let start = interior.min + c * chunk_size;
            apply_range(coefficients, current, start, output_chunk);
        });
    Ok(())
}

/// Parallel kernel over exactly `parts` disjoint spans of the interior
/// (fewer if there are fewer interior points), one rayon task each.
pub fn apply_partitioned(
    coefficients: &Coefficients,
    current: &[f64],
    next: &mut [f64],
    parts: usize,
) -> StencilResult<()> {
    check_shape(current, next)?;
    if parts == 0 {
        return Err(StencilError::InvalidPartitionCount);
    }
    profiling::scope!("par_stencil::apply_partitioned");

    let interior = Span::interior(current.len() - 2);
    let spans = interior.split(parts);
    let mut remaining = &mut next[interior.range()];
    rayon::scope(|s| {
        for span in spans {
            let (output, rest) =
                std::mem::take(&mut remaining).split_at_mut(span.buffer_size());
            remaining = rest;
            s.spawn(move |_| {
                profiling::scope!("par_stencil: Thread Callback");
                apply_range(coefficients, current, span.min, output);
            });
        }
    });
    Ok(())
}

/// Single threaded reference kernel.
pub fn apply_serial(
    coefficients: &Coefficients,
    current: &[f64],
    next: &mut [f64],
) -> StencilResult<()> {
    check_shape(current, next)?;
    let n = current.len() - 2;
    for i in 1..=n {
        next[i] = coefficients.apply(current[i - 1], current[i], current[i + 1]);
    }
    Ok(())
}
