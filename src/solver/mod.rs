//! Drivers that march a `FieldPair` forward in time.
//! Steps run strictly one after another, a step's promotion has finished
//! before the next kernel invocation starts.

pub mod direct;
pub mod naive;

pub use direct::*;
pub use naive::*;

use crate::domain::*;
use crate::error::*;

pub trait SolverInterface {
    /// Advance `fields` by `steps` time steps.
    /// Afterwards `fields.current()` holds the state at the final time,
    /// zero steps leaves it untouched.
    fn apply(&mut self, fields: &mut FieldPair, steps: usize) -> StencilResult<()>;

    fn print_report(&self);
}
