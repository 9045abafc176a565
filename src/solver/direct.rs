use crate::domain::*;
use crate::error::*;
use crate::par_stencil;
use crate::solver::SolverInterface;
use crate::stencil::*;

/// How one kernel invocation is split among rayon tasks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Partitioning {
    /// Tasks of a fixed number of points.
    Chunks(usize),
    /// A fixed number of tasks.
    Parts(usize),
}

/// Parallel explicit solver, one kernel invocation plus promotion per step.
#[derive(Debug, Clone)]
pub struct DirectSolver {
    coefficients: Coefficients,
    partitioning: Partitioning,
    promotion: Promotion,
    chunk_size: usize,
}

impl DirectSolver {
    /// `chunk_size` is used both for the kernel and the copy promotion.
    pub fn new(coefficients: Coefficients, chunk_size: usize) -> Self {
        DirectSolver {
            coefficients,
            partitioning: Partitioning::Chunks(chunk_size),
            promotion: Promotion::Copy,
            chunk_size,
        }
    }

    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = promotion;
        self
    }

    pub fn with_partitioning(mut self, partitioning: Partitioning) -> Self {
        self.partitioning = partitioning;
        self
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Kernel from current into next, then promote next.
    pub fn step(&self, fields: &mut FieldPair) -> StencilResult<()> {
        profiling::scope!("direct_solver::step");
        let (current, next) = fields.split_mut();
        match self.partitioning {
            Partitioning::Chunks(chunk_size) => par_stencil::apply(
                &self.coefficients,
                current.buffer(),
                next.buffer_mut(),
                chunk_size,
            )?,
            Partitioning::Parts(parts) => par_stencil::apply_partitioned(
                &self.coefficients,
                current.buffer(),
                next.buffer_mut(),
                parts,
            )?,
        }
        fields.promote(self.promotion, self.chunk_size);
        Ok(())
    }

    fn check(&self) -> StencilResult<()> {
        if self.chunk_size == 0 {
            return Err(StencilError::InvalidChunkSize);
        }
        match self.partitioning {
            Partitioning::Chunks(0) => Err(StencilError::InvalidChunkSize),
            Partitioning::Parts(0) => Err(StencilError::InvalidPartitionCount),
            _ => Ok(()),
        }
    }
}

impl SolverInterface for DirectSolver {
    fn apply(&mut self, fields: &mut FieldPair, steps: usize) -> StencilResult<()> {
        self.check()?;
        tracing::debug!(
            steps,
            num_points = fields.num_points(),
            coefficients = %self.coefficients,
            "direct solver start"
        );
        for t in 0..steps {
            self.step(fields)?;
            tracing::trace!(step = t + 1, "step complete");
        }
        tracing::debug!(steps, "direct solver done");
        Ok(())
    }

    fn print_report(&self) {
        println!(
            "DirectSolver: coefficients {}, {:?}, {:?} promotion",
            self.coefficients, self.partitioning, self.promotion
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::stencil::standard_stencils::*;
    use float_cmp::assert_approx_eq;

    fn impulse_pair(n: usize, index: usize) -> FieldPair {
        let mut pair = FieldPair::new(n).unwrap();
        pair.current_mut().set_value(index, 1.0).unwrap();
        pair
    }

    #[test]
    fn one_step() {
        for promotion in [Promotion::Copy, Promotion::Swap] {
            let mut pair = impulse_pair(5, 3);
            let mut solver =
                DirectSolver::new(averaging(), 2).with_promotion(promotion);
            solver.apply(&mut pair, 1).unwrap();
            assert_eq!(
                pair.current().buffer(),
                &[0.0, 0.0, 0.25, 0.5, 0.25, 0.0, 0.0]
            );
        }
    }

    #[test]
    fn zero_steps() {
        let mut pair = impulse_pair(5, 3);
        let before = pair.current().clone();
        let mut solver = DirectSolver::new(averaging(), 2);
        solver.apply(&mut pair, 0).unwrap();
        assert_eq!(pair.current(), &before);
    }

    #[test]
    fn two_steps() {
        let mut pair = impulse_pair(5, 3);
        let mut solver = DirectSolver::new(averaging(), 1)
            .with_partitioning(Partitioning::Parts(3));
        solver.apply(&mut pair, 2).unwrap();
        let expected = [0.0, 0.0625, 0.25, 0.375, 0.25, 0.0625, 0.0];
        for (a, e) in pair.current().buffer().iter().zip(expected) {
            assert_approx_eq!(f64, *a, e);
        }
    }

    #[test]
    fn shifter() {
        // Pure right shift, values flow out through the right ghost cell
        // and zeros flow in from the left one.
        let shift = Coefficients::new(1.0, 0.0, 0.0);
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let mut pair =
            FieldPair::from_current(Field::from_interior(&values).unwrap())
                .unwrap();
        let mut solver =
            DirectSolver::new(shift, 3).with_promotion(Promotion::Swap);
        solver.apply(&mut pair, 3).unwrap();

        let interior = pair.current().interior();
        for i in 0..3 {
            assert_eq!(interior[i], 0.0);
        }
        for i in 3..10 {
            assert_eq!(interior[i], (i - 2) as f64);
        }
        assert_eq!(pair.current().ghosts(), (0.0, 0.0));
    }

    #[test]
    fn bad_parameters() {
        let mut pair = impulse_pair(5, 3);
        let mut solver = DirectSolver::new(averaging(), 0);
        assert!(matches!(
            solver.apply(&mut pair, 1),
            Err(StencilError::InvalidChunkSize)
        ));

        let mut solver = DirectSolver::new(averaging(), 4)
            .with_partitioning(Partitioning::Parts(0));
        assert!(matches!(
            solver.apply(&mut pair, 1),
            Err(StencilError::InvalidPartitionCount)
        ));
    }
}
