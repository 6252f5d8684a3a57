//! SectorLab TUI — terminal rendering for relative performance figures.
//!
//! Every prompt round produces a `ChartFigure`; once all rounds are done the
//! CLI hands the whole list to `show_figures`, which draws them side by side
//! and blocks until the user closes the screen.

pub mod chart;
pub mod figure;
pub mod theme;
pub mod viewer;

pub use chart::FigureChart;
pub use figure::{ChartFigure, FigureSeries};
pub use theme::Theme;
pub use viewer::{show_figures, ViewerState};
