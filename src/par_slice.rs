use crate::util::*;
use rayon::prelude::*;

/// Sets each element to the same value.
/// `chunk_size` is break the work into tasks for multi-threading.
pub fn set_value<NumType: Num + Copy + Send + Sync>(
    a_slice: &mut [NumType],
    value: NumType,
    chunk_size: usize,
) {
    a_slice
        .par_chunks_mut(chunk_size)
        .for_each(|a_chunk: &mut [NumType]| {
            for a in a_chunk {
                *a = value;
            }
        });
}

/// Element wise copy of `src` into `dst`, both must have equal length.
pub fn copy_from<NumType: Num + Copy + Send + Sync>(
    dst: &mut [NumType],
    src: &[NumType],
    chunk_size: usize,
) {
    debug_assert_eq!(dst.len(), src.len());
    dst.par_chunks_mut(chunk_size)
        .zip(src.par_chunks(chunk_size))
        .for_each(|(d_chunk, s_chunk)| {
            d_chunk.copy_from_slice(s_chunk);
        });
}

pub fn scale<NumType: Num + Copy + Send + Sync>(
    a_slice: &mut [NumType],
    factor: NumType,
    chunk_size: usize,
) {
    a_slice
        .par_chunks_mut(chunk_size)
        .for_each(|a_chunk: &mut [NumType]| {
            for a in a_chunk {
                *a = *a * factor;
            }
        });
}

/// Chunks are summed in parallel, partial sums are then combined in chunk
/// order, so the result only depends on `chunk_size`, not on scheduling.
pub fn sum<NumType: Num + Copy + Send + Sync>(
    a_slice: &[NumType],
    chunk_size: usize,
) -> NumType {
    let partials: Vec<NumType> = a_slice
        .par_chunks(chunk_size)
        .map(|a_chunk| a_chunk.iter().fold(NumType::zero(), |acc, a| acc + *a))
        .collect();
    partials.into_iter().fold(NumType::zero(), |acc, p| acc + p)
}
