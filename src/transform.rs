use serde::Serialize;

use crate::isotherm::IsothermPoint;
use crate::{BetError, Result};

/// A point in one of the linearised BET coordinate systems
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransformedPoint {
    pub pressure_ratio: f64,
    pub value: f64,
}

/// The BET linear transform `x / ((1 - x) y)` of a single point.
///
/// Returns `None` when the transform is singular, i.e. at `x = 1` or `y = 0`.
#[must_use]
pub fn bet_value(point: &IsothermPoint) -> Option<f64> {
    let complement = 1.0 - point.pressure_ratio();
    if complement == 0.0 || point.uptake() == 0.0 {
        return None;
    }
    Some(point.pressure_ratio() / (complement * point.uptake()))
}

/// The Rouquerol transform `y (1 - x)` of a single point.
#[must_use]
pub fn rouquerol_value(point: &IsothermPoint) -> f64 {
    point.uptake() * (1.0 - point.pressure_ratio())
}

/// Apply the BET transform to every point with `pressure_ratio <= xplotmax`.
///
/// Points at which the transform is singular are left out of the series.
///
/// # Errors
/// Returns [`BetError::EmptyDataset`] if `points` is empty.
pub fn bet_transform(points: &[IsothermPoint], xplotmax: f64) -> Result<Vec<TransformedPoint>> {
    if points.is_empty() {
        return Err(BetError::EmptyDataset {
            operation: "apply the BET transform",
        });
    }

    Ok(points
        .iter()
        .filter(|point| point.pressure_ratio() <= xplotmax)
        .filter_map(|point| {
            let value = bet_value(point);
            if value.is_none() {
                log::debug!(
                    "excluding singular BET point (P/P° = {}, uptake = {})",
                    point.pressure_ratio(),
                    point.uptake()
                );
            }
            value.map(|value| TransformedPoint {
                pressure_ratio: point.pressure_ratio(),
                value,
            })
        })
        .collect())
}

/// Apply the Rouquerol transform to every point with `pressure_ratio <= xplotmax`.
///
/// # Errors
/// Returns [`BetError::EmptyDataset`] if `points` is empty.
pub fn rouquerol_transform(
    points: &[IsothermPoint],
    xplotmax: f64,
) -> Result<Vec<TransformedPoint>> {
    if points.is_empty() {
        return Err(BetError::EmptyDataset {
            operation: "apply the Rouquerol transform",
        });
    }

    Ok(points
        .iter()
        .filter(|point| point.pressure_ratio() <= xplotmax)
        .map(|point| TransformedPoint {
            pressure_ratio: point.pressure_ratio(),
            value: rouquerol_value(point),
        })
        .collect())
}
