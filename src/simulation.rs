//! One complete run: allocate, initialize, march, report.

use crate::config::*;
use crate::domain::*;
use crate::error::*;
use crate::initial_conditions::*;
use crate::solver::*;
use std::time::{Duration, Instant};

/// Final state of a successful run plus how long the time loop took.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub field: Field,
    pub steps: usize,
    pub elapsed: Duration,
    chunk_size: usize,
}

impl RunReport {
    pub fn interior_sum(&self) -> f64 {
        self.field.interior_sum(self.chunk_size)
    }

    /// Index and value of the largest interior value.
    pub fn peak(&self) -> (usize, f64) {
        self.field.max_interior()
    }

    pub fn print_report(&self, name: &str) {
        let (peak_index, peak_value) = self.peak();
        println!("{{");
        println!("  \"name\": \"{}\",", name);
        println!("  \"num_points\": {},", self.field.num_points());
        println!("  \"num_timesteps\": {},", self.steps);
        println!("  \"elapsed_seconds\": {:.3},", self.elapsed.as_secs_f64());
        println!("  \"interior_sum\": {:e},", self.interior_sum());
        println!("  \"peak_index\": {},", peak_index);
        println!("  \"peak_value\": {:e}", peak_value);
        println!("}}");
    }

    pub fn print_field(&self) {
        for (i, v) in self.field.buffer().iter().enumerate() {
            println!("{i} {v:e}");
        }
    }
}

/// Run on the current rayon pool.
/// Only the time loop is timed, allocation and initialization are not.
pub fn run(params: &RunParameters) -> StencilResult<RunReport> {
    let mut fields = FieldPair::new(params.num_points)?;
    generate_ic(fields.current_mut(), params.ic, params.chunk_size)?;

    let mut solver = DirectSolver::new(params.coefficients, params.chunk_size)
        .with_promotion(params.promotion);

    tracing::info!(
        num_points = params.num_points,
        steps = params.steps,
        coefficients = %params.coefficients,
        threads = rayon::current_num_threads(),
        "running"
    );
    let start = Instant::now();
    solver.apply(&mut fields, params.steps)?;
    let elapsed = start.elapsed();
    tracing::info!(elapsed_seconds = elapsed.as_secs_f64(), "done");

    Ok(RunReport {
        field: fields.into_current(),
        steps: params.steps,
        elapsed,
        chunk_size: params.chunk_size,
    })
}

/// Like `run`, but inside a dedicated pool when a thread count is set.
pub fn run_in_pool(params: &RunParameters) -> StencilResult<RunReport> {
    match params.threads {
        None => run(params),
        Some(0) => Err(StencilError::InvalidThreadCount),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| run(params))
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            num_points: 5,
            num_timesteps: 1,
            chunk_size: 2,
            ..Default::default()
        }
    }

    #[test]
    fn reference_step() {
        // Default impulse of a 5 point field sits at index 2.
        let params = small_config().validate().unwrap();
        let report = run(&params).unwrap();
        assert_eq!(
            report.field.buffer(),
            &[0.0, 0.25, 0.5, 0.25, 0.0, 0.0, 0.0]
        );
        assert_eq!(report.steps, 1);
        assert_eq!(report.peak(), (2, 0.5));
        assert_eq!(report.interior_sum(), 1.0);
    }

    #[test]
    fn pooled_matches_global() {
        let config = SimulationConfig {
            num_points: 101,
            num_timesteps: 20,
            chunk_size: 7,
            ..Default::default()
        };
        let global = run(&config.validate().unwrap()).unwrap();
        let config = SimulationConfig {
            threads: Some(3),
            promotion: Promotion::Swap,
            ..config
        };
        let pooled = run_in_pool(&config.validate().unwrap()).unwrap();
        assert_eq!(global.field, pooled.field);
    }
}
