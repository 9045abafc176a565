mod generate_ic;
pub mod impulse;
pub mod normal_impulse;
pub mod rand;
use crate::error::*;
use clap::ValueEnum;
pub use generate_ic::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ICType {
    Zero,
    /// A single nonzero interior point,
    /// `None` places it at `N / 2` (integer division).
    Impulse { index: Option<usize>, value: f64 },
    /// Gaussian bump centered on the domain, values in [0, 1].
    Normal { variance: f64 },
    /// Uniform integers in `[0, max_val)`.
    Rand { max_val: i32, seed: Option<u64> },
}

impl ICType {
    /// Checks that don't depend on the domain size,
    /// done before any field is allocated.
    pub fn validate(&self) -> StencilResult<()> {
        match *self {
            ICType::Zero => Ok(()),
            ICType::Impulse { value, .. } if !value.is_finite() => {
                Err(StencilError::InvalidInitialCondition {
                    reason: format!("impulse value must be finite, got {value}"),
                })
            }
            ICType::Impulse { .. } => Ok(()),
            ICType::Normal { variance } if !(variance.is_finite() && variance > 0.0) => {
                Err(StencilError::InvalidInitialCondition {
                    reason: format!(
                        "normal variance must be positive, got {variance}"
                    ),
                })
            }
            ICType::Normal { .. } => Ok(()),
            ICType::Rand { max_val, .. } if max_val < 1 => {
                Err(StencilError::InvalidInitialCondition {
                    reason: format!(
                        "random max value must be positive, got {max_val}"
                    ),
                })
            }
            ICType::Rand { .. } => Ok(()),
        }
    }
}

impl Default for ICType {
    fn default() -> Self {
        ICType::Impulse {
            index: None,
            value: 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ClapICType {
    Zero,
    #[default]
    Impulse,
    Normal,
    Rand,
}

impl ClapICType {
    /// `dial` is the impulse value, the normal variance,
    /// or the random maximum depending on the type.
    /// The random maximum has to be a whole number that fits an `i32`.
    pub fn to_ic_type(
        &self,
        dial: f64,
        index: Option<usize>,
        seed: Option<u64>,
    ) -> StencilResult<ICType> {
        let result = match self {
            ClapICType::Zero => ICType::Zero,
            ClapICType::Impulse => ICType::Impulse { index, value: dial },
            ClapICType::Normal => ICType::Normal { variance: dial },
            ClapICType::Rand => {
                if dial.fract() != 0.0
                    || dial < i32::MIN as f64
                    || dial > i32::MAX as f64
                {
                    return Err(StencilError::InvalidInitialCondition {
                        reason: format!(
                            "random max value must be a whole number in i32 range, got {dial}"
                        ),
                    });
                }
                ICType::Rand {
                    max_val: dial as i32,
                    seed,
                }
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn clap_conversion() {
        assert_eq!(
            ClapICType::Zero.to_ic_type(3.0, None, None).unwrap(),
            ICType::Zero
        );
        assert_eq!(
            ClapICType::default().to_ic_type(1.0, None, None).unwrap(),
            ICType::default()
        );
        assert_eq!(
            ClapICType::Impulse.to_ic_type(2.5, Some(4), None).unwrap(),
            ICType::Impulse {
                index: Some(4),
                value: 2.5
            }
        );
        assert_eq!(
            ClapICType::Rand.to_ic_type(10.0, None, Some(7)).unwrap(),
            ICType::Rand {
                max_val: 10,
                seed: Some(7)
            }
        );
    }

    #[test]
    fn rand_dial_not_truncated() {
        for dial in [2.7, 0.5, 1e10, -1e10, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    ClapICType::Rand.to_ic_type(dial, None, None),
                    Err(StencilError::InvalidInitialCondition { .. })
                ),
                "dial {dial}"
            );
        }
    }

    #[test]
    fn validate_test() {
        assert!(ICType::Zero.validate().is_ok());
        assert!(ICType::default().validate().is_ok());
        assert!(ICType::Normal { variance: 4.0 }.validate().is_ok());
        assert!(ICType::Rand {
            max_val: 1,
            seed: None
        }
        .validate()
        .is_ok());

        let bad = [
            ICType::Impulse {
                index: None,
                value: f64::NAN,
            },
            ICType::Normal { variance: 0.0 },
            ICType::Normal { variance: -2.0 },
            ICType::Normal {
                variance: f64::NAN,
            },
            ICType::Rand {
                max_val: 0,
                seed: None,
            },
        ];
        for ic in bad {
            assert!(
                matches!(
                    ic.validate(),
                    Err(StencilError::InvalidInitialCondition { .. })
                ),
                "{ic:?}"
            );
        }
    }
}
