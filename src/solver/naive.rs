use crate::domain::*;
use crate::error::*;
use crate::par_stencil;
use crate::solver::SolverInterface;
use crate::stencil::*;

/// Single threaded reference solver, serial kernel and serial copy.
/// Other solvers are checked against this one.
#[derive(Debug, Clone)]
pub struct NaiveSolver {
    coefficients: Coefficients,
}

impl NaiveSolver {
    pub fn new(coefficients: Coefficients) -> Self {
        NaiveSolver { coefficients }
    }
}

impl SolverInterface for NaiveSolver {
    fn apply(&mut self, fields: &mut FieldPair, steps: usize) -> StencilResult<()> {
        for _ in 0..steps {
            let (current, next) = fields.split_mut();
            par_stencil::apply_serial(
                &self.coefficients,
                current.buffer(),
                next.buffer_mut(),
            )?;
            // One chunk, so the copy runs as a single task.
            let n = fields.num_points();
            fields.promote(Promotion::Copy, n);
        }
        Ok(())
    }

    fn print_report(&self) {
        println!("NaiveSolver: coefficients {}", self.coefficients);
    }
}
