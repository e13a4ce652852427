use std::fmt;

use itertools::Itertools;

use crate::isotherm::Isotherm;
use crate::{BetError, Result};

/// Ranges covered by an isotherm
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub pmin: f64,
    pub pmax: f64,
    pub nmin: f64,
    pub nmax: f64,
}

/// Compute the point count and the extent of pressure ratio and uptake.
///
/// # Errors
/// Returns [`BetError::EmptyDataset`] if `isotherm` has no points.
pub fn summarize(isotherm: &Isotherm) -> Result<SummaryStats> {
    let empty = || BetError::EmptyDataset {
        operation: "summarize an isotherm",
    };

    let (pmin, pmax) = isotherm
        .iter()
        .map(|point| point.pressure_ratio())
        .minmax_by(f64::total_cmp)
        .into_option()
        .ok_or_else(empty)?;
    let (nmin, nmax) = isotherm
        .iter()
        .map(|point| point.uptake())
        .minmax_by(f64::total_cmp)
        .into_option()
        .ok_or_else(empty)?;

    Ok(SummaryStats {
        count: isotherm.len(),
        pmin,
        pmax,
        nmin,
        nmax,
    })
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of data points: {}", self.count)?;
        writeln!(f, "Minimal value of P/P°: {:.4}", self.pmin)?;
        writeln!(f, "Maximal value of P/P°: {:.4}", self.pmax)?;
        writeln!(f, "Minimal value of uptake: {:.1}", self.nmin)?;
        writeln!(f, "Maximal value of uptake: {:.1}", self.nmax)
    }
}
