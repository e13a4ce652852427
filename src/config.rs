use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::surface::Adsorbate;
use crate::window::RegressionWindow;
use crate::Result;

/// Caller-chosen parameters of a BET analysis
///
/// ```toml
/// xplotmax = 0.5
/// xregmin = 0.05
/// xregmax = 0.3
///
/// [adsorbate]
/// cross_section = 0.162e-18
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Upper pressure ratio of the transformed series
    pub xplotmax: f64,
    /// Lower bound of the regression window
    pub xregmin: f64,
    /// Upper bound of the regression window
    pub xregmax: f64,
    #[serde(default)]
    pub adsorbate: Adsorbate,
}

impl AnalysisConfig {
    /// A nitrogen analysis with the given window.
    #[must_use]
    pub fn new(xplotmax: f64, xregmin: f64, xregmax: f64) -> Self {
        Self {
            xplotmax,
            xregmin,
            xregmax,
            adsorbate: Adsorbate::nitrogen(),
        }
    }

    /// # Errors
    /// Returns an error if `data` is not valid TOML or lacks a window bound.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or does not describe an analysis.
    pub fn from_file(filepath: &Path) -> Result<Self> {
        let data = fs::read_to_string(filepath)?;
        let config = Self::from_toml_str(&data)?;
        log::info!("read analysis config from {filepath:?}: {config:?}");
        Ok(config)
    }

    /// The validated regression window.
    ///
    /// # Errors
    /// Returns [`crate::BetError::InvalidWindow`] if the bounds are inconsistent.
    pub fn window(&self) -> Result<RegressionWindow> {
        RegressionWindow::new(self.xregmin, self.xregmax, self.xplotmax)
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisConfig;
    use crate::surface::{Adsorbate, NITROGEN_CROSS_SECTION};
    use crate::{BetError, Result};

    #[test]
    fn adsorbate_defaults_to_nitrogen() -> Result<()> {
        let config =
            AnalysisConfig::from_toml_str("xplotmax = 0.5\nxregmin = 0.05\nxregmax = 0.3\n")?;

        assert_eq!(config, AnalysisConfig::new(0.5, 0.05, 0.3));
        assert_eq!(config.adsorbate.cross_section, NITROGEN_CROSS_SECTION);
        Ok(())
    }

    #[test]
    fn custom_cross_section_is_read() -> Result<()> {
        let config = AnalysisConfig::from_toml_str(
            "xplotmax = 0.4\nxregmin = 0.05\nxregmax = 0.2\n\n\
             [adsorbate]\ncross_section = 0.142e-18\n",
        )?;

        assert_eq!(
            config.adsorbate,
            Adsorbate {
                cross_section: 0.142e-18
            }
        );
        Ok(())
    }

    #[test]
    fn missing_bound_is_an_error() {
        assert!(matches!(
            AnalysisConfig::from_toml_str("xplotmax = 0.5\nxregmin = 0.05\n"),
            Err(BetError::TomlDe(_))
        ));
    }

    #[test]
    fn inconsistent_window_is_rejected() {
        let config = AnalysisConfig::new(0.5, 0.3, 0.05);
        assert!(matches!(
            config.window(),
            Err(BetError::InvalidWindow { .. })
        ));
    }
}
