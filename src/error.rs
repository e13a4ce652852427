use thiserror::Error;

/// Everything that can go wrong while loading or analysing an isotherm.
///
/// Numeric failures carry the values that produced them, so the message alone is enough to see
/// which window or point needs adjusting.
#[derive(Debug, Error)]
pub enum BetError {
    #[error("cannot {operation}: the dataset contains no points")]
    EmptyDataset { operation: &'static str },

    #[error("invalid isotherm point (P/P° = {pressure_ratio}, uptake = {uptake}): values must be finite and uptake non-negative")]
    InvalidPoint { pressure_ratio: f64, uptake: f64 },

    #[error("invalid regression window [{xregmin}, {xregmax}] with plot bound {xplotmax}: require 0 <= xregmin < xregmax <= 1 and xplotmax >= xregmax")]
    InvalidWindow {
        xregmin: f64,
        xregmax: f64,
        xplotmax: f64,
    },

    #[error("regression window [{xregmin}, {xregmax}] contains {count} usable point(s), at least 2 are required")]
    InsufficientWindowData {
        xregmin: f64,
        xregmax: f64,
        count: usize,
    },

    /// Degenerate regression: every point in the window shares the same pressure ratio.
    #[error("degenerate regression: all {count} window points have P/P° = {pressure_ratio}")]
    ZeroVariance { pressure_ratio: f64, count: usize },

    /// Degenerate regression: `C` and `n_mono` are undefined for a zero intercept.
    #[error("degenerate regression: fitted intercept is exactly zero (slope = {slope})")]
    ZeroIntercept { slope: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl BetError {
    /// Whether the error comes from a regression that cannot yield `C` or `n_mono`.
    #[must_use]
    pub const fn is_degenerate_regression(&self) -> bool {
        matches!(self, Self::ZeroVariance { .. } | Self::ZeroIntercept { .. })
    }
}
