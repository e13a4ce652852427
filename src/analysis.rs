use std::fmt;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::isotherm::Isotherm;
use crate::plot::BetPlot;
use crate::regression::{fit, RegressionResult};
use crate::summary::SummaryStats;
use crate::transform::bet_transform;
use crate::validity::{bet_constant, monolayer_capacity, ValidityReport};
use crate::{BetError, Result};

/// Fitted BET parameters and the surface area they imply
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BetResult {
    /// BET constant
    pub c: f64,
    /// Monolayer capacity, in the uptake units of the isotherm
    pub n_mono: f64,
    /// Specific surface area in m²/g
    pub surface_area: f64,
    pub r_squared: f64,
}

/// Everything produced by one analysis of one isotherm
#[derive(Clone, Debug, PartialEq)]
pub struct BetAnalysis {
    pub regression: RegressionResult,
    pub validity: ValidityReport,
    pub result: BetResult,
    pub plot: BetPlot,
}

/// Run the BET analysis of `isotherm` over the window described by `config`.
///
/// The regression uses the BET transform of the windowed points; the consistency criteria are
/// evaluated on the same window and never stop the analysis.
///
/// # Errors
/// - [`BetError::InvalidWindow`] if the configured bounds are inconsistent
/// - [`BetError::InsufficientWindowData`] if fewer than two usable points lie in the window
/// - [`BetError::ZeroVariance`] or [`BetError::ZeroIntercept`] if the regression is degenerate
/// - [`BetError::EmptyDataset`] if no point below `xplotmax` survives either transform
pub fn analyze(isotherm: &Isotherm, config: &AnalysisConfig) -> Result<BetAnalysis> {
    let window = config.window()?;
    let window_points = window.select(isotherm)?;

    // Singular points drop out of the transform, so the count is checked again
    let transformed = bet_transform(&window_points, window.xregmax())?;
    if transformed.len() < 2 {
        return Err(BetError::InsufficientWindowData {
            xregmin: window.xregmin(),
            xregmax: window.xregmax(),
            count: transformed.len(),
        });
    }

    let regression = fit(&transformed)?;
    let c = bet_constant(&regression)?;
    let n_mono = monolayer_capacity(&regression, c);
    log::info!(
        "BET fit over [{}, {}]: slope = {}, intercept = {}, C = {c}, n_mono = {n_mono}",
        window.xregmin(),
        window.xregmax(),
        regression.slope,
        regression.intercept
    );

    let validity = ValidityReport::evaluate(c, n_mono, &window_points);
    let result = BetResult {
        c,
        n_mono,
        surface_area: config.adsorbate.surface_area(n_mono),
        r_squared: regression.r_squared(),
    };
    let plot = BetPlot::new(isotherm, window, &regression)?;

    Ok(BetAnalysis {
        regression,
        validity,
        result,
        plot,
    })
}

/// Nitrogen BET analysis with the window given as plain scalars. See [`analyze`].
///
/// # Errors
/// See [`analyze`].
pub fn analyze_bet(
    isotherm: &Isotherm,
    xplotmax: f64,
    xregmin: f64,
    xregmax: f64,
) -> Result<BetAnalysis> {
    analyze(isotherm, &AnalysisConfig::new(xplotmax, xregmin, xregmax))
}

impl fmt::Display for BetAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.validity)?;
        writeln!(f, "R^2 = {:.4}", self.result.r_squared)?;
        writeln!(f)?;
        writeln!(f, "Surface area = {:.3} m^2/g", self.result.surface_area)
    }
}

/// The full text output: isotherm summary followed by the BET analysis
pub struct Report<'a> {
    pub summary: &'a SummaryStats,
    pub analysis: &'a BetAnalysis,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        write!(f, "{}", self.analysis)
    }
}
