use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::isotherm::Isotherm;
use crate::regression::RegressionResult;
use crate::transform::rouquerol_value;
use crate::{BetError, Result};

/// The BET constant `C = slope / intercept + 1`.
///
/// # Errors
/// Returns [`BetError::ZeroIntercept`] if the fitted intercept is exactly zero.
pub fn bet_constant(regression: &RegressionResult) -> Result<f64> {
    if regression.intercept == 0.0 {
        return Err(BetError::ZeroIntercept {
            slope: regression.slope,
        });
    }
    Ok(regression.slope / regression.intercept + 1.0)
}

/// The monolayer capacity `n_mono = 1 / (intercept C)`.
///
/// Not finite when `C` is zero; the value is passed on as is.
#[must_use]
pub fn monolayer_capacity(regression: &RegressionResult, c: f64) -> f64 {
    1.0 / (regression.intercept * c)
}

/// `C` must be positive for the fit to be physically meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CPositivity {
    pub c: f64,
    pub passed: bool,
}

impl CPositivity {
    /// # Errors
    /// Returns [`BetError::ZeroIntercept`] if `intercept` is exactly zero.
    pub fn check(slope: f64, intercept: f64) -> Result<Self> {
        let c = bet_constant(&RegressionResult {
            slope,
            intercept,
            r_value: f64::NAN,
        })?;
        Ok(Self::from_constant(c))
    }

    #[must_use]
    pub fn from_constant(c: f64) -> Self {
        Self { c, passed: c > 0.0 }
    }
}

/// The monolayer capacity must not exceed the largest uptake measured inside the fit window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MonolayerBound {
    pub n_mono: f64,
    /// Largest uptake among the windowed points
    pub nmax_window: f64,
    pub passed: bool,
}

impl MonolayerBound {
    #[must_use]
    pub fn check(n_mono: f64, window_points: &Isotherm) -> Self {
        let nmax_window = window_points
            .iter()
            .map(|point| point.uptake())
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            n_mono,
            nmax_window,
            passed: n_mono <= nmax_window,
        }
    }
}

/// `y (1 - x)` must not decrease across the fit window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouquerolMonotonicity {
    pub passed: bool,
    /// Position, within the window, of the first value smaller than its predecessor
    pub violation: Option<usize>,
}

impl RouquerolMonotonicity {
    /// Scan `window_points` in ascending pressure ratio once, stopping at the first decrease.
    #[must_use]
    pub fn check(window_points: &Isotherm) -> Self {
        let violation = window_points
            .iter()
            .map(rouquerol_value)
            .tuple_windows()
            .position(|(previous, current)| current < previous)
            .map(|index| index + 1);
        Self {
            passed: violation.is_none(),
            violation,
        }
    }
}

/// The three consistency criteria. Each one is advisory: a failure is reported, never raised.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValidityReport {
    pub c_positive: CPositivity,
    pub nmono_within_range: MonolayerBound,
    pub rouquerol_increasing: RouquerolMonotonicity,
}

impl ValidityReport {
    #[must_use]
    pub fn evaluate(c: f64, n_mono: f64, window_points: &Isotherm) -> Self {
        let report = Self {
            c_positive: CPositivity::from_constant(c),
            nmono_within_range: MonolayerBound::check(n_mono, window_points),
            rouquerol_increasing: RouquerolMonotonicity::check(window_points),
        };

        if !report.c_positive.passed {
            log::warn!("BET constant C = {c} is not positive");
        }
        if !report.nmono_within_range.passed {
            log::warn!(
                "n_mono = {n_mono} exceeds the largest uptake in the fit window ({})",
                report.nmono_within_range.nmax_window
            );
        }
        if let Some(index) = report.rouquerol_increasing.violation {
            log::warn!("Rouquerol plot decreases at window point {index}");
        }

        report
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.c_positive.passed
            && self.nmono_within_range.passed
            && self.rouquerol_increasing.passed
    }
}

const PASS: &str = "✅";
const FAIL: &str = "🔴";

impl fmt::Display for CPositivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "{PASS} C = {:.2} is positive", self.c)
        } else {
            write!(f, "{FAIL} C = {:.2} should be positive", self.c)
        }
    }
}

impl fmt::Display for MonolayerBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(
                f,
                "{PASS} nmono = {:.2} is within BET range (up to {:.2})",
                self.n_mono, self.nmax_window
            )
        } else {
            write!(
                f,
                "{FAIL} nmono = {:.2} is outside BET range (up to {:.2})",
                self.n_mono, self.nmax_window
            )
        }
    }
}

impl fmt::Display for RouquerolMonotonicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation {
            None => write!(f, "{PASS} Rouquerol plot increasing in fit range"),
            Some(index) => write!(
                f,
                "{FAIL} Rouquerol plot should be increasing in fit range (decreases at window point {index})"
            ),
        }
    }
}

impl fmt::Display for ValidityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.c_positive)?;
        writeln!(f, "{}", self.nmono_within_range)?;
        writeln!(f, "{}", self.rouquerol_increasing)
    }
}
