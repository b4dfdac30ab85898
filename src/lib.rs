//! plot-layout-rs: geometry engine for composite plot widgets.
//!
//! Computes the rectangles of a plot's title, footer, legend, axis scales
//! and canvas within an outer rectangle. Sizes are pulled once per pass
//! through the [`PlotLayoutSource`] measurement boundary, so the solver
//! never holds references into live widgets; callers apply the returned
//! [`LayoutRects`] to their widget tree afterwards.
//!
//! ```
//! use plot_layout_rs::{
//!     AxisSlot, LayoutOptions, PlotLayout, Rect, StaticAxis, StaticLabel, StaticPlot,
//! };
//!
//! let plot = StaticPlot::new()
//!     .with_title(StaticLabel::new(300.0, 20.0))
//!     .with_axis(AxisSlot::Left, StaticAxis::new(40.0))
//!     .with_axis(AxisSlot::Bottom, StaticAxis::new(30.0));
//!
//! let mut layout = PlotLayout::new();
//! let rects = layout
//!     .activate(&plot, Rect::new(0.0, 0.0, 800.0, 600.0), LayoutOptions::new())
//!     .unwrap();
//! assert!(rects.canvas.is_valid());
//! ```

pub mod config;
pub mod core;
mod engine;
pub mod error;
pub mod layout;
pub mod measure;
pub mod telemetry;

pub use config::{LayoutOptions, LegendPosition};
pub use core::{AxisId, AxisSlot, PerSlot, Rect, Size};
pub use error::{LayoutError, LayoutResult};
pub use layout::{LayoutRects, PlotLayout};
pub use measure::{
    AxisMeasure, AxisSizeHint, CanvasMeasure, LabelMeasure, LayoutSnapshot, LegendMeasure,
    PlotLayoutSource, StaticAxis, StaticLabel, StaticLegend, StaticPlot, TextMetric,
};
