use crate::domain::*;
use crate::error::*;
use crate::par_slice;
use clap::ValueEnum;

/// How the newly computed field becomes the current one after a step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Promotion {
    /// Element wise copy of next's interior into current.
    #[default]
    Copy,
    /// Exchange the roles of the two buffers, nothing is copied.
    Swap,
}

/// The two time levels a run alternates between.
/// `current` holds the latest state between steps,
/// `next` is scratch space for the kernel.
#[derive(Debug, Clone)]
pub struct FieldPair {
    current: Field,
    next: Field,
}

impl FieldPair {
    pub fn new(num_points: usize) -> StencilResult<Self> {
        let current = Field::new(num_points)?;
        let next = Field::new(num_points)?;
        Ok(FieldPair { current, next })
    }

    /// Start from an existing field, next gets a zeroed buffer of equal size.
    pub fn from_current(current: Field) -> StencilResult<Self> {
        let next = Field::new(current.num_points())?;
        Ok(FieldPair { current, next })
    }

    pub fn num_points(&self) -> usize {
        self.current.num_points()
    }

    pub fn current(&self) -> &Field {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Field {
        &mut self.current
    }

    pub fn next(&self) -> &Field {
        &self.next
    }

    /// Read access to current alongside write access to next,
    /// this is the borrow a kernel invocation needs.
    pub fn split_mut(&mut self) -> (&Field, &mut Field) {
        (&self.current, &mut self.next)
    }

    /// Make next the current state.
    /// Ghost cells of current are untouched by either strategy,
    /// afterwards next holds no meaningful data.
    pub fn promote(&mut self, promotion: Promotion, chunk_size: usize) {
        profiling::scope!("field_pair::promote");
        match promotion {
            Promotion::Copy => {
                par_slice::copy_from(
                    self.current.interior_mut(),
                    self.next.interior(),
                    chunk_size,
                );
            }
            Promotion::Swap => {
                std::mem::swap(&mut self.current, &mut self.next);
            }
        }
    }

    pub fn into_current(self) -> Field {
        self.current
    }
}
