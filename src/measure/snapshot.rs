use smallvec::SmallVec;
use tracing::trace;

use crate::core::{AxisId, AxisSlot, PerSlot, Rect, Size};
use crate::measure::source::{AxisMeasure, PlotLayoutSource, TextMetric};

/// Per-instance scale data. A hidden instance is recorded zeroed so it
/// contributes nothing to any dimension sum.
#[derive(Debug)]
pub(crate) struct ScaleData {
    pub(crate) visible: bool,
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) dim_without_title: f64,
    pub(crate) title: Option<TextMetric>,
}

impl ScaleData {
    fn hidden() -> Self {
        Self {
            visible: false,
            start: 0.0,
            end: 0.0,
            dim_without_title: 0.0,
            title: None,
        }
    }

    fn from_measure(measure: AxisMeasure) -> Self {
        Self {
            visible: true,
            start: measure.border_start.max(0.0),
            end: measure.border_end.max(0.0),
            dim_without_title: measure.dim_without_title.max(0.0),
            title: measure.title,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LabelData {
    pub(crate) metric: Option<TextMetric>,
    pub(crate) frame_width: f64,
}

#[derive(Debug)]
pub(crate) struct LegendData {
    pub(crate) h_scroll_extent: f64,
    pub(crate) v_scroll_extent: f64,
    /// Legend extent already clamped against the available rectangle,
    /// widened by the scroll extent when it cannot fit in height.
    pub(crate) hint: Size,
}

type SlotScales = SmallVec<[ScaleData; 2]>;

/// Snapshot of everything size-relevant, captured once per layout pass.
#[derive(Debug)]
pub struct LayoutSnapshot {
    pub(crate) legend: Option<LegendData>,
    pub(crate) title: LabelData,
    pub(crate) footer: LabelData,
    pub(crate) scales: PerSlot<SlotScales>,
    pub(crate) canvas_margins: PerSlot<f64>,
    /// Backbone margin + tick length of each slot's first visible instance.
    pub(crate) tick_offset: PerSlot<f64>,
    pub(crate) visible_count: PerSlot<usize>,
}

impl LayoutSnapshot {
    /// Walks the plot's collaborators exactly once and captures all
    /// measurements relative to `rect`.
    pub fn capture(source: &dyn PlotLayoutSource, rect: Rect) -> Self {
        let legend = source.legend_measure().map(|legend| {
            let mut width = legend.size_hint.width.min(rect.width.floor());
            let mut height = legend.height_for_width.height_for_width(width);
            if height <= 0.0 {
                height = legend.size_hint.height;
            }
            if height > rect.height {
                width += legend.h_scroll_extent;
            }
            LegendData {
                h_scroll_extent: legend.h_scroll_extent,
                v_scroll_extent: legend.v_scroll_extent,
                hint: Size::new(width, height),
            }
        });

        let title = capture_label(source.title_measure());
        let footer = capture_label(source.footer_measure());

        let mut tick_offset = PerSlot::splat(0.0);
        let mut visible_count = PerSlot::splat(0_usize);
        let scales = PerSlot::from_fn(|slot| {
            let count = source.axes_count(slot);
            let mut slot_scales = SlotScales::with_capacity(count);
            for index in 0..count {
                match source.axis_measure(AxisId::new(slot, index)) {
                    Some(measure) => {
                        if visible_count[slot] == 0 {
                            tick_offset[slot] =
                                measure.backbone_margin.max(0.0) + measure.tick_length.max(0.0);
                        }
                        visible_count[slot] += 1;
                        slot_scales.push(ScaleData::from_measure(measure));
                    }
                    None => slot_scales.push(ScaleData::hidden()),
                }
            }
            slot_scales
        });

        let canvas = source.canvas_measure();

        trace!(
            visible_left = visible_count[AxisSlot::Left],
            visible_right = visible_count[AxisSlot::Right],
            visible_bottom = visible_count[AxisSlot::Bottom],
            visible_top = visible_count[AxisSlot::Top],
            has_legend = legend.is_some(),
            "captured layout snapshot"
        );

        Self {
            legend,
            title,
            footer,
            scales,
            canvas_margins: canvas.contents_margins,
            tick_offset,
            visible_count,
        }
    }

    /// True when the left and right slots host equal numbers of visible
    /// axes. Title and footer center over the full width in that case,
    /// over the canvas span otherwise.
    #[must_use]
    pub fn has_symmetric_y_axes(&self) -> bool {
        self.visible_count[AxisSlot::Left] == self.visible_count[AxisSlot::Right]
    }

    pub(crate) fn axes_count(&self, slot: AxisSlot) -> usize {
        self.scales[slot].len()
    }

    pub(crate) fn scale(&self, axis: AxisId) -> &ScaleData {
        &self.scales[axis.slot][axis.index]
    }
}

fn capture_label(measure: Option<crate::measure::source::LabelMeasure>) -> LabelData {
    match measure {
        Some(label) => LabelData {
            metric: Some(label.metric),
            frame_width: label.frame_width.max(0.0),
        },
        None => LabelData {
            metric: None,
            frame_width: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutSnapshot;
    use crate::core::{AxisSlot, Rect, Size};
    use crate::measure::static_plot::{StaticAxis, StaticLegend, StaticPlot};

    #[test]
    fn hidden_instances_are_recorded_zeroed() {
        let plot = StaticPlot::new()
            .with_axis(
                AxisSlot::Bottom,
                StaticAxis::new(30.0).with_border_dist(6.0, 8.0),
            )
            .with_hidden_axis(AxisSlot::Bottom);

        let snapshot = LayoutSnapshot::capture(&plot, Rect::new(0.0, 0.0, 800.0, 600.0));

        assert_eq!(snapshot.axes_count(AxisSlot::Bottom), 2);
        assert_eq!(snapshot.visible_count[AxisSlot::Bottom], 1);

        let hidden = &snapshot.scales[AxisSlot::Bottom][1];
        assert!(!hidden.visible);
        assert_eq!(hidden.start, 0.0);
        assert_eq!(hidden.end, 0.0);
        assert_eq!(hidden.dim_without_title, 0.0);
    }

    #[test]
    fn tick_offset_comes_from_first_visible_instance() {
        let plot = StaticPlot::new()
            .with_hidden_axis(AxisSlot::Left)
            .with_axis(
                AxisSlot::Left,
                StaticAxis::new(40.0).with_backbone(3.0, 5.0),
            )
            .with_axis(
                AxisSlot::Left,
                StaticAxis::new(40.0).with_backbone(9.0, 9.0),
            );

        let snapshot = LayoutSnapshot::capture(&plot, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(snapshot.tick_offset[AxisSlot::Left], 8.0);
    }

    #[test]
    fn symmetric_y_axes_compares_visible_counts() {
        let plot = StaticPlot::new()
            .with_axis(AxisSlot::Left, StaticAxis::new(40.0))
            .with_hidden_axis(AxisSlot::Right);
        let snapshot = LayoutSnapshot::capture(&plot, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(!snapshot.has_symmetric_y_axes());

        let plot = plot.with_axis(AxisSlot::Right, StaticAxis::new(35.0));
        let snapshot = LayoutSnapshot::capture(&plot, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(snapshot.has_symmetric_y_axes());
    }

    #[test]
    fn legend_hint_clamps_width_and_widens_for_scrollbar() {
        let plot = StaticPlot::new().with_legend(
            StaticLegend::new(Size::new(900.0, 700.0)).with_scroll_extents(16.0, 16.0),
        );

        let snapshot = LayoutSnapshot::capture(&plot, Rect::new(0.0, 0.0, 800.0, 600.0));
        let legend = snapshot.legend.as_ref().expect("legend data");

        // Width clamps to the rect, then grows by the scrollbar extent
        // because the natural height exceeds the rect height.
        assert_eq!(legend.hint.width, 816.0);
        assert_eq!(legend.hint.height, 700.0);
    }
}
