#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// #![warn(clippy::cargo)]

//! Specific surface area from a single gas adsorption isotherm, by the
//! Brunauer–Emmett–Teller method, with the Rouquerol consistency criteria.
//!
//! ```
//! use bet_surface::{analyze_bet, load_isotherm_from_str, summarize};
//!
//! let data = "P/P0,uptake\n0.05,44.4\n0.10,52.3\n0.15,57.9\n0.20,62.8\n0.25,67.5\n0.30,72.4\n";
//! let isotherm = load_isotherm_from_str(data)?;
//!
//! let summary = summarize(&isotherm)?;
//! assert_eq!(summary.count, 6);
//!
//! let analysis = analyze_bet(&isotherm, 0.3, 0.05, 0.3)?;
//! assert!(analysis.result.surface_area > 0.0);
//! # Ok::<(), bet_surface::BetError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod isotherm;
pub mod loader;
pub mod plot;
pub mod regression;
pub mod summary;
pub mod surface;
pub mod transform;
pub mod validity;
pub mod window;

pub use analysis::{analyze, analyze_bet, BetAnalysis, BetResult, Report};
pub use config::AnalysisConfig;
pub use error::BetError;
pub use isotherm::{Isotherm, IsothermPoint};
pub use loader::{load_isotherm_from_file, load_isotherm_from_reader, load_isotherm_from_str};
pub use summary::{summarize, SummaryStats};

pub type Result<T> = ::std::result::Result<T, BetError>;
