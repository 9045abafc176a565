use crate::error::*;
use crate::par_slice;
use crate::util::*;

/// One time level of the 1D domain.
/// The buffer is allocated once and never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    buffer: Vec<f64>,
}

impl Field {
    /// Zero filled field with `num_points` interior values plus two ghost cells.
    pub fn new(num_points: usize) -> StencilResult<Self> {
        if num_points < 1 {
            return Err(StencilError::InvalidPointCount { num_points: 0 });
        }
        let len = num_points.saturating_add(2);
        let mut buffer: Vec<f64> = Vec::new();
        buffer.try_reserve_exact(len).map_err(|source| {
            StencilError::Allocation {
                points: len,
                bytes: len.saturating_mul(std::mem::size_of::<f64>()),
                source,
            }
        })?;
        buffer.resize(len, 0.0);
        Ok(Field { buffer })
    }

    /// Field whose interior is a copy of `values`, ghost cells are zero.
    pub fn from_interior(values: &[f64]) -> StencilResult<Self> {
        let mut result = Field::new(values.len())?;
        result.interior_mut().copy_from_slice(values);
        Ok(result)
    }

    pub fn num_points(&self) -> usize {
        self.buffer.len() - 2
    }

    /// Buffer length including ghost cells, `N + 2`.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn interior_span(&self) -> Span {
        Span::interior(self.num_points())
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    /// Full buffer, ghost cells included.
    /// Callers are trusted to leave the ghost cells at zero.
    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    pub fn interior(&self) -> &[f64] {
        &self.buffer[self.interior_span().range()]
    }

    pub fn interior_mut(&mut self) -> &mut [f64] {
        let range = self.interior_span().range();
        &mut self.buffer[range]
    }

    /// Left and right ghost cell values.
    pub fn ghosts(&self) -> (f64, f64) {
        (self.buffer[0], self.buffer[self.buffer.len() - 1])
    }

    #[track_caller]
    pub fn value(&self, index: usize) -> f64 {
        self.buffer[index]
    }

    /// Set one interior value, ghost cells can't be written this way.
    pub fn set_value(&mut self, index: usize, value: f64) -> StencilResult<()> {
        if !self.interior_span().contains(index) {
            return Err(StencilError::ImpulseOutOfRange {
                index,
                num_points: self.num_points(),
            });
        }
        self.buffer[index] = value;
        Ok(())
    }

    pub fn interior_sum(&self, chunk_size: usize) -> f64 {
        par_slice::sum(self.interior(), chunk_size)
    }

    /// Index and value of the largest interior value,
    /// ties go to the lowest index.
    pub fn max_interior(&self) -> (usize, f64) {
        let mut best = (1, self.buffer[1]);
        for (i, v) in self.interior().iter().enumerate() {
            if *v > best.1 {
                best = (i + 1, *v);
            }
        }
        best
    }
}
