//! Measurement boundary between the layout engine and the widgets it lays
//! out.
//!
//! The engine never talks to live widgets while it iterates. Everything
//! size-relevant is pulled through [`PlotLayoutSource`] into plain structs,
//! and late-bound height-for-width queries are captured as [`TextMetric`]
//! closures, so the solver carries no widget lifetimes.

use std::fmt;

use crate::core::{AxisId, AxisSlot, PerSlot, Size};

/// Height-for-width measurement captured once per layout pass.
pub struct TextMetric(Box<dyn Fn(f64) -> f64 + Send + Sync>);

impl TextMetric {
    pub fn new(measure: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Box::new(measure))
    }

    /// Metric that ignores the width and always reports `height`.
    #[must_use]
    pub fn fixed(height: f64) -> Self {
        let height = height.max(0.0);
        Self::new(move |_| height)
    }

    #[must_use]
    pub fn height_for_width(&self, width: f64) -> f64 {
        (self.0)(width).max(0.0)
    }
}

impl fmt::Debug for TextMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextMetric(..)")
    }
}

/// Size-relevant data of one visible axis scale.
#[derive(Debug)]
pub struct AxisMeasure {
    /// Space needed before the tick range to avoid clipping the first label.
    pub border_start: f64,
    /// Space needed after the tick range to avoid clipping the last label.
    pub border_end: f64,
    /// Distance from the scale backbone to the widget edge facing the canvas.
    pub backbone_margin: f64,
    /// Length of the longest tick mark, 0 when ticks are not drawn.
    pub tick_length: f64,
    /// Extent for ticks and labels, excluding the axis title.
    pub dim_without_title: f64,
    /// Title height-for-width query, `None` when the axis has no title.
    pub title: Option<TextMetric>,
}

/// Size-relevant data of the title or footer label.
#[derive(Debug)]
pub struct LabelMeasure {
    pub metric: TextMetric,
    pub frame_width: f64,
}

/// Size-relevant data of the legend widget.
#[derive(Debug)]
pub struct LegendMeasure {
    pub size_hint: Size,
    pub frame_width: f64,
    pub h_scroll_extent: f64,
    pub v_scroll_extent: f64,
    pub height_for_width: TextMetric,
}

/// Size-relevant data of the canvas widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasMeasure {
    /// Frame thickness around the drawable area, per edge.
    pub contents_margins: PerSlot<f64>,
    pub minimum_size: Size,
}

/// Minimum-size data of a slot's innermost axis, used only by the
/// minimum-size-hint estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisSizeHint {
    pub minimum_size: Size,
    pub border_hint_start: f64,
    pub border_hint_end: f64,
    /// Backbone margin plus the longest tick, already combined.
    pub tick_offset: f64,
}

/// Measurement queries the layout engine issues to the embedding plot.
///
/// Absent collaborators are `None`, never an error: a hidden axis, a legend
/// without content or an empty title all contribute zero size. Title/footer
/// sources must return `None` for empty text so the label reserves no space.
pub trait PlotLayoutSource {
    /// Number of axis instances hosted by `slot`, visible or not.
    fn axes_count(&self, slot: AxisSlot) -> usize;

    /// Measurements for one axis instance, `None` when hidden or absent.
    fn axis_measure(&self, axis: AxisId) -> Option<AxisMeasure>;

    /// Minimum-size data for the slot's innermost axis, `None` when hidden.
    fn axis_size_hint(&self, slot: AxisSlot) -> Option<AxisSizeHint>;

    /// Legend measurements, `None` when there is no legend or it is empty.
    fn legend_measure(&self) -> Option<LegendMeasure>;

    fn title_measure(&self) -> Option<LabelMeasure>;

    fn footer_measure(&self) -> Option<LabelMeasure>;

    fn canvas_measure(&self) -> CanvasMeasure;
}

#[cfg(test)]
mod tests {
    use super::TextMetric;

    #[test]
    fn fixed_metric_ignores_width_and_clamps_negative() {
        let metric = TextMetric::fixed(12.5);
        assert_eq!(metric.height_for_width(10.0), 12.5);
        assert_eq!(metric.height_for_width(10_000.0), 12.5);

        let negative = TextMetric::fixed(-3.0);
        assert_eq!(negative.height_for_width(100.0), 0.0);
    }

    #[test]
    fn metric_results_never_go_negative() {
        let metric = TextMetric::new(|width| 10.0 - width);
        assert_eq!(metric.height_for_width(4.0), 6.0);
        assert_eq!(metric.height_for_width(50.0), 0.0);
    }
}
