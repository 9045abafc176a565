use crate::domain::*;
use crate::error::*;
use crate::initial_conditions::ICType;
use rayon::prelude::*;

/// Generate normal like distribution over the interior with spike in the
/// middle, all values are in [0, 1].
pub fn normal_ic_1d(
    field: &mut Field,
    variance: f64,
    chunk_size: usize,
) -> StencilResult<()> {
    ICType::Normal { variance }.validate()?;
    let n_f = field.num_points() as f64;
    let sigma_sq: f64 = (n_f / variance) * (n_f / variance);
    let ic_gen = |index: usize| {
        let x = (index as f64) - (n_f + 1.0) / 2.0;
        let exp = -x * x / (2.0 * sigma_sq);
        exp.exp()
    };
    field
        .interior_mut()
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(c, chunk): (usize, &mut [f64])| {
            let offset = 1 + c * chunk_size;
            for (i, v) in chunk.iter_mut().enumerate() {
                *v = ic_gen(offset + i);
            }
        });
    Ok(())
}
