pub mod snapshot;
pub mod source;
pub mod static_plot;

pub use snapshot::LayoutSnapshot;
pub use source::{
    AxisMeasure, AxisSizeHint, CanvasMeasure, LabelMeasure, LegendMeasure, PlotLayoutSource,
    TextMetric,
};
pub use static_plot::{StaticAxis, StaticLabel, StaticLegend, StaticPlot};
