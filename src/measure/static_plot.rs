//! Deterministic in-memory [`PlotLayoutSource`] used by tests, benches and
//! headless embeddings that want a layout without real widgets.

use crate::core::{AxisId, AxisSlot, PerSlot, Size};
use crate::measure::source::{
    AxisMeasure, AxisSizeHint, CanvasMeasure, LabelMeasure, LegendMeasure, PlotLayoutSource,
    TextMetric,
};

/// Text block that wraps a natural single-line width into `line_height`
/// tall lines. Backend-independent on purpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLabel {
    pub natural_width: f64,
    pub line_height: f64,
    pub frame_width: f64,
}

impl StaticLabel {
    #[must_use]
    pub const fn new(natural_width: f64, line_height: f64) -> Self {
        Self {
            natural_width,
            line_height,
            frame_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_frame_width(mut self, frame_width: f64) -> Self {
        self.frame_width = frame_width;
        self
    }

    fn metric(self) -> TextMetric {
        let natural_width = self.natural_width.max(0.0);
        let line_height = self.line_height.max(0.0);
        TextMetric::new(move |width| {
            let lines = if width >= natural_width {
                1.0
            } else {
                (natural_width / width.max(1.0)).ceil().max(1.0)
            };
            lines * line_height
        })
    }
}

/// One synthetic axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticAxis {
    pub dim_without_title: f64,
    pub border_start: f64,
    pub border_end: f64,
    pub backbone_margin: f64,
    pub tick_length: f64,
    pub title: Option<StaticLabel>,
    pub minimum_size: Size,
    pub border_hint: (f64, f64),
}

impl StaticAxis {
    #[must_use]
    pub const fn new(dim_without_title: f64) -> Self {
        Self {
            dim_without_title,
            border_start: 0.0,
            border_end: 0.0,
            backbone_margin: 0.0,
            tick_length: 0.0,
            title: None,
            minimum_size: Size::new(0.0, 0.0),
            border_hint: (0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn with_border_dist(mut self, start: f64, end: f64) -> Self {
        self.border_start = start;
        self.border_end = end;
        self
    }

    #[must_use]
    pub const fn with_backbone(mut self, margin: f64, tick_length: f64) -> Self {
        self.backbone_margin = margin;
        self.tick_length = tick_length;
        self
    }

    #[must_use]
    pub const fn with_title(mut self, title: StaticLabel) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn with_minimum_size(mut self, minimum_size: Size) -> Self {
        self.minimum_size = minimum_size;
        self
    }

    #[must_use]
    pub const fn with_border_hint(mut self, start: f64, end: f64) -> Self {
        self.border_hint = (start, end);
        self
    }
}

/// Synthetic legend with a fixed natural size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLegend {
    pub size_hint: Size,
    pub frame_width: f64,
    pub h_scroll_extent: f64,
    pub v_scroll_extent: f64,
}

impl StaticLegend {
    #[must_use]
    pub const fn new(size_hint: Size) -> Self {
        Self {
            size_hint,
            frame_width: 0.0,
            h_scroll_extent: 0.0,
            v_scroll_extent: 0.0,
        }
    }

    #[must_use]
    pub const fn with_frame_width(mut self, frame_width: f64) -> Self {
        self.frame_width = frame_width;
        self
    }

    #[must_use]
    pub const fn with_scroll_extents(mut self, horizontal: f64, vertical: f64) -> Self {
        self.h_scroll_extent = horizontal;
        self.v_scroll_extent = vertical;
        self
    }
}

/// In-memory plot description implementing [`PlotLayoutSource`].
///
/// `with_axis` appends a visible instance to a slot, `with_hidden_axis`
/// appends a hidden one, so multi-axis stacking orders are easy to build.
#[derive(Debug, Clone, Default)]
pub struct StaticPlot {
    axes: PerSlot<Vec<Option<StaticAxis>>>,
    title: Option<StaticLabel>,
    footer: Option<StaticLabel>,
    legend: Option<StaticLegend>,
    canvas_margins: PerSlot<f64>,
    canvas_minimum: Size,
}

impl StaticPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, slot: AxisSlot, axis: StaticAxis) -> Self {
        self.axes[slot].push(Some(axis));
        self
    }

    #[must_use]
    pub fn with_hidden_axis(mut self, slot: AxisSlot) -> Self {
        self.axes[slot].push(None);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: StaticLabel) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: StaticLabel) -> Self {
        self.footer = Some(footer);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: StaticLegend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_canvas_margin(mut self, slot: AxisSlot, margin: f64) -> Self {
        self.canvas_margins[slot] = margin;
        self
    }

    #[must_use]
    pub fn with_canvas_minimum(mut self, minimum: Size) -> Self {
        self.canvas_minimum = minimum;
        self
    }
}

impl PlotLayoutSource for StaticPlot {
    fn axes_count(&self, slot: AxisSlot) -> usize {
        self.axes[slot].len()
    }

    fn axis_measure(&self, axis: AxisId) -> Option<AxisMeasure> {
        let scale = self.axes[axis.slot].get(axis.index)?.as_ref()?;
        Some(AxisMeasure {
            border_start: scale.border_start,
            border_end: scale.border_end,
            backbone_margin: scale.backbone_margin,
            tick_length: scale.tick_length,
            dim_without_title: scale.dim_without_title,
            title: scale.title.map(StaticLabel::metric),
        })
    }

    fn axis_size_hint(&self, slot: AxisSlot) -> Option<AxisSizeHint> {
        let scale = self.axes[slot].first()?.as_ref()?;
        Some(AxisSizeHint {
            minimum_size: scale.minimum_size,
            border_hint_start: scale.border_hint.0,
            border_hint_end: scale.border_hint.1,
            tick_offset: scale.backbone_margin + scale.tick_length,
        })
    }

    fn legend_measure(&self) -> Option<LegendMeasure> {
        let legend = self.legend.as_ref()?;
        if legend.size_hint.is_empty() {
            return None;
        }
        let natural_height = legend.size_hint.height;
        Some(LegendMeasure {
            size_hint: legend.size_hint,
            frame_width: legend.frame_width,
            h_scroll_extent: legend.h_scroll_extent,
            v_scroll_extent: legend.v_scroll_extent,
            height_for_width: TextMetric::fixed(natural_height),
        })
    }

    fn title_measure(&self) -> Option<LabelMeasure> {
        self.title.map(|label| LabelMeasure {
            metric: label.metric(),
            frame_width: label.frame_width,
        })
    }

    fn footer_measure(&self) -> Option<LabelMeasure> {
        self.footer.map(|label| LabelMeasure {
            metric: label.metric(),
            frame_width: label.frame_width,
        })
    }

    fn canvas_measure(&self) -> CanvasMeasure {
        CanvasMeasure {
            contents_margins: self.canvas_margins,
            minimum_size: self.canvas_minimum,
        }
    }
}
