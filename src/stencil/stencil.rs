use crate::error::*;
use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// Weights of the 3 point stencil,
/// applied to the left neighbor, the point itself and the right neighbor.
/// Nothing is normalized, a stencil whose weights do not sum to one
/// grows or decays the field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl Coefficients {
    pub fn new(left: f64, center: f64, right: f64) -> Self {
        Coefficients {
            left,
            center,
            right,
        }
    }

    /// Build coefficients from a linear operation over `[left, center, right]`.
    pub fn from_operation<F: Fn(&[f64; 3]) -> f64>(operation: F) -> Self {
        Self::from_weights(&extract_weights(operation))
    }

    pub fn from_weights(weights: &Values<3>) -> Self {
        Coefficients::new(weights[0], weights[1], weights[2])
    }

    pub fn weights(&self) -> Values<3> {
        Values::from([self.left, self.center, self.right])
    }

    pub fn sum(&self) -> f64 {
        self.left + self.center + self.right
    }

    /// Whether the stencil preserves the interior sum (away from the edges).
    pub fn is_conservative(&self, epsilon: f64) -> bool {
        (self.sum() - 1.0).abs() <= epsilon
    }

    pub fn validate(&self) -> StencilResult<()> {
        for (name, value) in [
            ("coef_left", self.left),
            ("coef_center", self.center),
            ("coef_right", self.right),
        ] {
            if !value.is_finite() {
                return Err(StencilError::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }

    /// The sum is always evaluated as `(a*l + b*c) + c*r`,
    /// so a point's result does not depend on how work was split up.
    #[inline(always)]
    pub fn apply(&self, left: f64, center: f64, right: f64) -> f64 {
        self.left * left + self.center * center + self.right * right
    }
}

impl std::fmt::Display for Coefficients {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "({}, {}, {})", self.left, self.center, self.right)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn extract_weights() {
        {
            let w = super::extract_weights(|args: &[f64; 1]| 2.0 * args[0]);
            assert_approx_eq!(f64, w[0], 2.0);
        }

        {
            let c = Coefficients::from_operation(|args: &[f64; 3]| {
                2.0 * args[0] + 3.0 * args[1] + 5.0 * args[2]
            });
            assert_approx_eq!(f64, c.left, 2.0, ulps = 1);
            assert_approx_eq!(f64, c.center, 3.0, ulps = 1);
            assert_approx_eq!(f64, c.right, 5.0, ulps = 1);
            assert_approx_eq!(f64, c.sum(), 10.0, ulps = 1);
        }
    }

    #[test]
    fn weights_round_trip() {
        let c = Coefficients::new(0.25, 0.5, 0.25);
        assert_eq!(Coefficients::from_weights(&c.weights()), c);
        assert!(c.is_conservative(1e-15));
        assert!(!Coefficients::new(0.3, 0.5, 0.25).is_conservative(1e-15));
    }

    #[test]
    fn apply() {
        let c = Coefficients::new(0.25, 0.5, 0.25);
        assert_eq!(c.apply(0.0, 1.0, 0.0), 0.5);
        assert_eq!(c.apply(1.0, 0.0, 0.0), 0.25);
        assert_eq!(c.apply(4.0, 2.0, 8.0), 4.0);
    }

    #[test]
    fn validate() {
        assert!(Coefficients::new(0.25, 0.5, 0.25).validate().is_ok());
        assert!(matches!(
            Coefficients::new(0.25, f64::NAN, 0.25).validate(),
            Err(StencilError::NonFiniteCoefficient {
                name: "coef_center",
                ..
            })
        ));
        assert!(Coefficients::new(f64::INFINITY, 0.5, 0.25)
            .validate()
            .is_err());
    }
}
