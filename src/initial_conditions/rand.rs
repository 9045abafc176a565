use crate::domain::*;
use crate::error::*;
use crate::initial_conditions::ICType;
use rand::prelude::*;
use rayon::prelude::*;

/// Uniform random integers in `[0, max_val)`.
/// With a seed, each chunk gets its own generator derived from the seed
/// and the chunk number, so results don't depend on thread scheduling.
pub fn rand_ic(
    field: &mut Field,
    max_val: i32,
    seed: Option<u64>,
    chunk_size: usize,
) -> StencilResult<()> {
    ICType::Rand { max_val, seed }.validate()?;
    field
        .interior_mut()
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(c, chunk): (usize, &mut [f64])| {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s.wrapping_add(c as u64)),
                None => StdRng::from_entropy(),
            };
            for v in chunk {
                *v = rng.gen_range(0..max_val) as f64;
            }
        });
    Ok(())
}
