use ndarray::Array1;
use serde::Serialize;

use crate::transform::TransformedPoint;
use crate::{BetError, Result};

/// An ordinary least-squares line `value = slope * pressure_ratio + intercept`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
}

impl RegressionResult {
    /// Coefficient of determination for a straight-line fit
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r_value.powi(2)
    }

    #[must_use]
    pub fn predict(&self, pressure_ratio: f64) -> f64 {
        self.slope.mul_add(pressure_ratio, self.intercept)
    }
}

/// Fit a straight line through `points` by ordinary least squares.
///
/// Sums are taken about the means (two-pass).
///
/// When the values have no spread the correlation coefficient is reported as `0`.
///
/// # Errors
/// - [`BetError::InsufficientWindowData`] if fewer than two points are given
/// - [`BetError::ZeroVariance`] if every point shares the same pressure ratio
pub fn fit(points: &[TransformedPoint]) -> Result<RegressionResult> {
    let n = points.len();
    if n < 2 {
        return Err(BetError::InsufficientWindowData {
            xregmin: points.first().map_or(f64::NAN, |point| point.pressure_ratio),
            xregmax: points.last().map_or(f64::NAN, |point| point.pressure_ratio),
            count: n,
        });
    }

    let x: Array1<f64> = points.iter().map(|point| point.pressure_ratio).collect();
    let y: Array1<f64> = points.iter().map(|point| point.value).collect();
    let (Some(mean_x), Some(mean_y)) = (x.mean(), y.mean()) else {
        return Err(BetError::EmptyDataset {
            operation: "fit a regression line",
        });
    };

    // Identical abscissae can leave a non-zero residue in the centred sums, so test them directly
    if x.iter().all(|&xi| xi == x[0]) {
        return Err(BetError::ZeroVariance {
            pressure_ratio: x[0],
            count: n,
        });
    }

    let dx = &x - mean_x;
    let dy = &y - mean_y;
    let sxx = dx.dot(&dx);
    let sxy = dx.dot(&dy);
    let syy = dy.dot(&dy);

    if sxx.is_nan() || sxx <= 0.0 {
        return Err(BetError::ZeroVariance {
            pressure_ratio: mean_x,
            count: n,
        });
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let r_value = if syy > 0.0 {
        (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    Ok(RegressionResult {
        slope,
        intercept,
        r_value,
    })
}

#[cfg(test)]
mod tests {
    use ndarray_rand::rand::{Rng, SeedableRng};
    use rand_isaac::Isaac64Rng;

    use super::{fit, RegressionResult};
    use crate::transform::TransformedPoint;
    use crate::{BetError, Result};

    fn line(slope: f64, intercept: f64, x: &[f64]) -> Vec<TransformedPoint> {
        x.iter()
            .map(|&pressure_ratio| TransformedPoint {
                pressure_ratio,
                value: slope * pressure_ratio + intercept,
            })
            .collect()
    }

    #[test]
    fn exact_line_is_recovered() -> Result<()> {
        let seed = 40;
        let mut rng = Isaac64Rng::seed_from_u64(seed);

        for _ in 0..20 {
            let slope = rng.gen_range(-50.0..50.0);
            let intercept = rng.gen_range(-1.0..1.0);
            let num_points: u32 = rng.gen_range(2..40);
            let x = (0..num_points)
                .map(|n| 0.05 + 0.25 * f64::from(n) / f64::from(num_points))
                .collect::<Vec<_>>();

            let result = fit(&line(slope, intercept, &x))?;

            approx::assert_relative_eq!(result.slope, slope, max_relative = 1e-9);
            approx::assert_abs_diff_eq!(result.intercept, intercept, epsilon = 1e-9);
            approx::assert_abs_diff_eq!(result.r_value.abs(), 1.0, epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn correlation_has_sign_of_slope() -> Result<()> {
        let x = [0.1, 0.2, 0.3];
        assert!(fit(&line(-3.0, 2.0, &x))?.r_value < 0.0);
        assert!(fit(&line(3.0, 2.0, &x))?.r_value > 0.0);
        Ok(())
    }

    #[test]
    fn noisy_data_has_correlation_below_one() -> Result<()> {
        let points = vec![
            TransformedPoint {
                pressure_ratio: 0.1,
                value: 1.0,
            },
            TransformedPoint {
                pressure_ratio: 0.2,
                value: 2.3,
            },
            TransformedPoint {
                pressure_ratio: 0.3,
                value: 2.9,
            },
            TransformedPoint {
                pressure_ratio: 0.4,
                value: 4.2,
            },
        ];

        let result = fit(&points)?;

        assert!(result.r_squared() < 1.0);
        assert!(result.r_squared() > 0.9);
        Ok(())
    }

    #[test]
    fn flat_values_have_zero_correlation() -> Result<()> {
        let result = fit(&line(0.0, 2.0, &[0.1, 0.2, 0.3]))?;
        assert_eq!(result.slope, 0.0);
        approx::assert_relative_eq!(result.intercept, 2.0);
        assert_eq!(result.r_value, 0.0);
        Ok(())
    }

    #[test]
    fn identical_abscissae_are_degenerate() {
        let points = line(1.0, 0.0, &[0.1, 0.1, 0.1]);
        match fit(&points) {
            Err(error @ BetError::ZeroVariance { count, .. }) => {
                assert_eq!(count, 3);
                assert!(error.is_degenerate_regression());
            }
            other => panic!("expected zero variance, got {other:?}"),
        }
    }

    #[test]
    fn fewer_than_two_points_are_insufficient() {
        assert!(matches!(
            fit(&line(1.0, 0.0, &[0.1])),
            Err(BetError::InsufficientWindowData { count: 1, .. })
        ));
        assert!(matches!(
            fit(&[]),
            Err(BetError::InsufficientWindowData { count: 0, .. })
        ));
    }

    #[test]
    fn prediction_follows_the_line() {
        let result = RegressionResult {
            slope: 2.0,
            intercept: 0.5,
            r_value: 1.0,
        };
        approx::assert_relative_eq!(result.predict(0.0), 0.5);
        approx::assert_relative_eq!(result.predict(1.0), 2.5);
        approx::assert_relative_eq!(result.r_squared(), 1.0);
    }
}
