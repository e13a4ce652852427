use serde::Serialize;

use crate::isotherm::Isotherm;
use crate::{BetError, Result};

/// The pressure-ratio interval used for fitting, and the upper bound of the displayed range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegressionWindow {
    xregmin: f64,
    xregmax: f64,
    xplotmax: f64,
}

impl RegressionWindow {
    /// # Errors
    /// Returns [`BetError::InvalidWindow`] unless `0 <= xregmin < xregmax <= 1` and
    /// `xplotmax >= xregmax`.
    pub fn new(xregmin: f64, xregmax: f64, xplotmax: f64) -> Result<Self> {
        let ordered = 0.0 <= xregmin && xregmin < xregmax && xregmax <= 1.0;
        let plotted = xplotmax >= xregmax;
        if !ordered || !plotted {
            return Err(BetError::InvalidWindow {
                xregmin,
                xregmax,
                xplotmax,
            });
        }
        Ok(Self {
            xregmin,
            xregmax,
            xplotmax,
        })
    }

    #[must_use]
    pub const fn xregmin(&self) -> f64 {
        self.xregmin
    }

    #[must_use]
    pub const fn xregmax(&self) -> f64 {
        self.xregmax
    }

    #[must_use]
    pub const fn xplotmax(&self) -> f64 {
        self.xplotmax
    }

    /// Whether `pressure_ratio` lies inside the window, boundaries included.
    #[must_use]
    pub fn contains(&self, pressure_ratio: f64) -> bool {
        (self.xregmin..=self.xregmax).contains(&pressure_ratio)
    }

    /// The points that fall inside the window.
    ///
    /// # Errors
    /// Returns [`BetError::InsufficientWindowData`] if fewer than two points fall inside.
    pub fn select(&self, isotherm: &Isotherm) -> Result<Isotherm> {
        select(isotherm, self.xregmin, self.xregmax)
    }
}

/// Keep the points with `xregmin <= pressure_ratio <= xregmax`, still ascending in pressure ratio.
///
/// # Errors
/// Returns [`BetError::InsufficientWindowData`] if fewer than two points fall inside, as no line
/// can be fitted through them.
pub fn select(isotherm: &Isotherm, xregmin: f64, xregmax: f64) -> Result<Isotherm> {
    let selected = isotherm
        .iter()
        .filter(|point| (xregmin..=xregmax).contains(&point.pressure_ratio()))
        .copied()
        .collect::<Vec<_>>();

    if selected.len() < 2 {
        return Err(BetError::InsufficientWindowData {
            xregmin,
            xregmax,
            count: selected.len(),
        });
    }
    Isotherm::new(selected)
}
