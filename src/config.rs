//! Run configuration.
//! Everything here is checked before a single buffer is allocated.

use crate::domain::Promotion;
use crate::error::*;
use crate::initial_conditions::*;
use crate::stencil::*;

/// Raw configuration as supplied at process start.
/// Counts are signed so negative input can be reported rather than wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub num_points: i64,
    pub num_timesteps: i64,
    pub coef_left: f64,
    pub coef_center: f64,
    pub coef_right: f64,
    pub ic: ICType,
    pub chunk_size: usize,
    pub threads: Option<usize>,
    pub promotion: Promotion,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_points: 10_000_000,
            num_timesteps: 100,
            coef_left: 0.25,
            coef_center: 0.5,
            coef_right: 0.25,
            ic: ICType::default(),
            chunk_size: 100_000,
            threads: None,
            promotion: Promotion::Copy,
        }
    }
}

/// Checked parameters, ready to drive a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunParameters {
    pub num_points: usize,
    pub steps: usize,
    pub coefficients: Coefficients,
    pub ic: ICType,
    pub chunk_size: usize,
    pub threads: Option<usize>,
    pub promotion: Promotion,
}

impl SimulationConfig {
    pub fn coefficients(&self) -> Coefficients {
        Coefficients::new(self.coef_left, self.coef_center, self.coef_right)
    }

    pub fn validate(&self) -> StencilResult<RunParameters> {
        if self.num_points < 1 {
            return Err(StencilError::InvalidPointCount {
                num_points: self.num_points,
            });
        }
        if self.num_timesteps < 0 {
            return Err(StencilError::InvalidStepCount {
                num_timesteps: self.num_timesteps,
            });
        }
        if self.chunk_size == 0 {
            return Err(StencilError::InvalidChunkSize);
        }
        if self.threads == Some(0) {
            return Err(StencilError::InvalidThreadCount);
        }
        let coefficients = self.coefficients();
        coefficients.validate()?;
        self.ic.validate()?;

        let num_points = usize::try_from(self.num_points).map_err(|_| {
            StencilError::InvalidPointCount {
                num_points: self.num_points,
            }
        })?;
        let steps = usize::try_from(self.num_timesteps).map_err(|_| {
            StencilError::InvalidStepCount {
                num_timesteps: self.num_timesteps,
            }
        })?;

        if let ICType::Impulse {
            index: Some(index), ..
        } = self.ic
        {
            if index < 1 || index > num_points {
                return Err(StencilError::ImpulseOutOfRange { index, num_points });
            }
        }

        Ok(RunParameters {
            num_points,
            steps,
            coefficients,
            ic: self.ic,
            chunk_size: self.chunk_size,
            threads: self.threads,
            promotion: self.promotion,
        })
    }
}
