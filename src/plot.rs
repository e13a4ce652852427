//! Plot data for an external renderer.
//!
//! Nothing here draws. [`IsothermPlot`] and [`BetPlot`] gather the series, axis limits and
//! overlay lines of the two standard figures; a [`PlotSink`] decides what to do with them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::isotherm::{Isotherm, IsothermPoint};
use crate::regression::RegressionResult;
use crate::summary::summarize;
use crate::transform::{bet_transform, rouquerol_transform, TransformedPoint};
use crate::window::RegressionWindow;
use crate::{BetError, Result};

/// A straight line between two `(x, y)` points
pub type Segment = [(f64, f64); 2];

/// Presentation settings handed to a sink
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Figure width and height, in inches
    pub figure_size: (f64, f64),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure_size: (12.0, 8.0),
        }
    }
}

/// The raw isotherm, drawn over `P/P°` in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct IsothermPlot {
    pub points: Vec<IsothermPoint>,
    /// Upper limit of the uptake axis, 10% above the largest uptake
    pub ymax: f64,
}

impl IsothermPlot {
    /// # Errors
    /// Returns [`BetError::EmptyDataset`] if `isotherm` has no points.
    pub fn new(isotherm: &Isotherm) -> Result<Self> {
        let stats = summarize(isotherm)?;
        Ok(Self {
            points: isotherm.to_vec(),
            ymax: 1.1 * stats.nmax,
        })
    }
}

/// The BET and Rouquerol plots, sharing the pressure axis `[0, xplotmax]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BetPlot {
    pub window: RegressionWindow,
    pub bet: Vec<TransformedPoint>,
    pub rouquerol: Vec<TransformedPoint>,
    /// Largest value of each series; axes extend to 1.1 times these
    pub bet_max: f64,
    pub rouquerol_max: f64,
    /// The fitted line across the full pressure range, absent when the fit is degenerate
    pub fit_line: Option<Segment>,
}

impl BetPlot {
    /// Transformed series only, for when no usable regression exists.
    ///
    /// # Errors
    /// Returns [`BetError::EmptyDataset`] if either series has no points below `xplotmax`.
    pub fn without_fit(isotherm: &Isotherm, window: RegressionWindow) -> Result<Self> {
        let bet = bet_transform(isotherm, window.xplotmax())?;
        let rouquerol = rouquerol_transform(isotherm, window.xplotmax())?;

        let bet_max = series_max(&bet).ok_or(BetError::EmptyDataset {
            operation: "plot the BET transform",
        })?;
        let rouquerol_max = series_max(&rouquerol).ok_or(BetError::EmptyDataset {
            operation: "plot the Rouquerol transform",
        })?;

        Ok(Self {
            window,
            bet,
            rouquerol,
            bet_max,
            rouquerol_max,
            fit_line: None,
        })
    }

    /// # Errors
    /// See [`BetPlot::without_fit`].
    pub fn new(
        isotherm: &Isotherm,
        window: RegressionWindow,
        regression: &RegressionResult,
    ) -> Result<Self> {
        let mut plot = Self::without_fit(isotherm, window)?;
        plot.fit_line = Some([(0.0, regression.predict(0.0)), (1.0, regression.predict(1.0))]);
        Ok(plot)
    }

    #[must_use]
    pub fn bet_ymax(&self) -> f64 {
        1.1 * self.bet_max
    }

    #[must_use]
    pub fn rouquerol_ymax(&self) -> f64 {
        1.1 * self.rouquerol_max
    }

    /// Vertical markers at the window bounds, reaching twice `series_max`.
    #[must_use]
    pub fn window_lines(&self, series_max: f64) -> [Segment; 2] {
        let top = 2.0 * series_max;
        let (lo, hi) = (self.window.xregmin(), self.window.xregmax());
        [[(lo, 0.0), (lo, top)], [(hi, 0.0), (hi, top)]]
    }
}

fn series_max(series: &[TransformedPoint]) -> Option<f64> {
    series
        .iter()
        .map(|point| point.value)
        .max_by(f64::total_cmp)
}

/// Consumer of plot data
pub trait PlotSink {
    /// # Errors
    /// Implementation defined.
    fn isotherm(&mut self, plot: &IsothermPlot) -> Result<()>;

    /// # Errors
    /// Implementation defined.
    fn bet(&mut self, plot: &BetPlot) -> Result<()>;
}

/// Writes each series to a CSV file and the overlays to a TOML file, for plotting elsewhere.
pub struct CsvPlotSink {
    directory: PathBuf,
    config: PlotConfig,
}

#[derive(Serialize)]
struct IsothermOverlay {
    figure_size: (f64, f64),
    axis: [f64; 4],
}

#[derive(Serialize)]
struct BetOverlay {
    figure_size: (f64, f64),
    xregmin: f64,
    xregmax: f64,
    bet_axis: [f64; 4],
    rouquerol_axis: [f64; 4],
    bet_window_lines: [Segment; 2],
    rouquerol_window_lines: [Segment; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    fit_line: Option<Segment>,
}

impl CsvPlotSink {
    /// # Errors
    /// Returns an error if `directory` cannot be created.
    pub fn new(directory: &Path, config: PlotConfig) -> Result<Self> {
        fs::create_dir_all(directory)?;
        Ok(Self {
            directory: directory.to_path_buf(),
            config,
        })
    }

    fn write_series<T: Serialize>(&self, name: &str, rows: &[T]) -> Result<()> {
        let path = self.directory.join(name);
        log::debug!("writing {} rows to {path:?}", rows.len());
        let mut wtr = csv::Writer::from_path(path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_overlay<T: Serialize>(&self, name: &str, overlay: &T) -> Result<()> {
        fs::write(self.directory.join(name), toml::to_string(overlay)?)?;
        Ok(())
    }
}

impl PlotSink for CsvPlotSink {
    fn isotherm(&mut self, plot: &IsothermPlot) -> Result<()> {
        self.write_series("isotherm.csv", &plot.points)?;
        self.write_overlay(
            "isotherm.toml",
            &IsothermOverlay {
                figure_size: self.config.figure_size,
                axis: [0.0, 1.0, 0.0, plot.ymax],
            },
        )
    }

    fn bet(&mut self, plot: &BetPlot) -> Result<()> {
        self.write_series("bet.csv", &plot.bet)?;
        self.write_series("rouquerol.csv", &plot.rouquerol)?;

        let xplotmax = plot.window.xplotmax();
        self.write_overlay(
            "bet.toml",
            &BetOverlay {
                figure_size: self.config.figure_size,
                xregmin: plot.window.xregmin(),
                xregmax: plot.window.xregmax(),
                bet_axis: [0.0, xplotmax, 0.0, plot.bet_ymax()],
                rouquerol_axis: [0.0, xplotmax, 0.0, plot.rouquerol_ymax()],
                bet_window_lines: plot.window_lines(plot.bet_max),
                rouquerol_window_lines: plot.window_lines(plot.rouquerol_max),
                fit_line: plot.fit_line,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{BetPlot, IsothermPlot, PlotConfig};
    use crate::isotherm::{Isotherm, IsothermPoint};
    use crate::regression::RegressionResult;
    use crate::window::RegressionWindow;
    use crate::{BetError, Result};

    fn points() -> Isotherm {
        let points = [(0.05, 10.0), (0.1, 12.0), (0.2, 14.0), (0.4, 18.0), (0.8, 30.0)]
            .iter()
            .map(|&(x, y)| IsothermPoint::new(x, y).unwrap())
            .collect();
        Isotherm::new(points).unwrap()
    }

    #[test]
    fn isotherm_axis_leaves_headroom() -> Result<()> {
        let plot = IsothermPlot::new(&points())?;
        approx::assert_relative_eq!(plot.ymax, 33.0);
        Ok(())
    }

    #[test]
    fn series_stop_at_plot_bound() -> Result<()> {
        let window = RegressionWindow::new(0.05, 0.2, 0.4)?;
        let plot = BetPlot::without_fit(&points(), window)?;

        assert_eq!(plot.bet.len(), 4);
        assert_eq!(plot.rouquerol.len(), 4);
        assert!(plot.fit_line.is_none());
        approx::assert_relative_eq!(plot.rouquerol_max, 14.0 * (1.0 - 0.2));
        Ok(())
    }

    #[test]
    fn fit_line_spans_unit_interval() -> Result<()> {
        let window = RegressionWindow::new(0.05, 0.2, 0.4)?;
        let regression = RegressionResult {
            slope: 2.0,
            intercept: 0.5,
            r_value: 1.0,
        };

        let plot = BetPlot::new(&points(), window, &regression)?;

        assert_eq!(plot.fit_line, Some([(0.0, 0.5), (1.0, 2.5)]));
        let [lower, upper] = plot.window_lines(plot.bet_max);
        assert_eq!(lower[0], (0.05, 0.0));
        assert_eq!(upper[1], (0.2, 2.0 * plot.bet_max));
        Ok(())
    }

    #[test]
    fn empty_series_cannot_be_plotted() -> Result<()> {
        let window = RegressionWindow::new(0.05, 0.2, 0.4)?;
        let singular = Isotherm::new(vec![
            IsothermPoint::new(0.1, 0.0)?,
            IsothermPoint::new(0.2, 0.0)?,
        ])?;

        assert!(matches!(
            BetPlot::without_fit(&singular, window),
            Err(BetError::EmptyDataset { .. })
        ));
        Ok(())
    }

    #[test]
    fn default_figure_size() {
        assert_eq!(PlotConfig::default().figure_size, (12.0, 8.0));
    }
}
