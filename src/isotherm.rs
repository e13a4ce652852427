use std::cmp::Ordering;
use std::ops::Deref;

use serde::Serialize;

use crate::{BetError, Result};

/// A single adsorption measurement.
///
/// Only [`IsothermPoint::new`] builds one, so every point is finite with non-negative uptake.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IsothermPoint {
    pressure_ratio: f64,
    uptake: f64,
}

impl IsothermPoint {
    /// Build a point, rejecting non-finite values and negative uptake.
    ///
    /// # Errors
    /// Returns [`BetError::InvalidPoint`] if either value is NaN or infinite, or if the uptake is
    /// negative.
    pub fn new(pressure_ratio: f64, uptake: f64) -> Result<Self> {
        if !pressure_ratio.is_finite() || !uptake.is_finite() || uptake < 0.0 {
            return Err(BetError::InvalidPoint {
                pressure_ratio,
                uptake,
            });
        }
        Ok(Self {
            pressure_ratio,
            uptake,
        })
    }

    /// Relative pressure P/P°, conceptually in [0, 1]
    #[must_use]
    pub const fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    /// Quantity adsorbed per unit mass of adsorbent
    #[must_use]
    pub const fn uptake(&self) -> f64 {
        self.uptake
    }

    /// Lexicographic order on `(pressure_ratio, uptake)`.
    ///
    /// Ties in pressure ratio are resolved by uptake, so the order of an isotherm never depends on
    /// the order its rows were read in.
    fn cmp_lexicographic(&self, other: &Self) -> Ordering {
        self.pressure_ratio
            .total_cmp(&other.pressure_ratio)
            .then_with(|| self.uptake.total_cmp(&other.uptake))
    }
}

/// A non-empty sequence of points, ascending in pressure ratio.
///
/// Operations that depend on the ordering take `&Isotherm`; the rest borrow it as a slice of
/// [`IsothermPoint`]. Neither can mutate it.
#[derive(Clone, Debug, PartialEq)]
pub struct Isotherm(Vec<IsothermPoint>);

impl Isotherm {
    /// Sort `points` and wrap them.
    ///
    /// # Errors
    /// Returns [`BetError::EmptyDataset`] if `points` is empty.
    pub fn new(mut points: Vec<IsothermPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(BetError::EmptyDataset {
                operation: "build an isotherm",
            });
        }
        points.sort_by(IsothermPoint::cmp_lexicographic);
        Ok(Self(points))
    }
}

impl Deref for Isotherm {
    type Target = [IsothermPoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
