use smallvec::{SmallVec, smallvec};
use tracing::{trace, warn};

use crate::config::LayoutOptions;
use crate::core::{AxisId, AxisSlot, PerSlot, Rect};
use crate::engine::LayoutEngine;
use crate::measure::snapshot::{LabelData, LayoutSnapshot};

type SlotDims = SmallVec<[f64; 2]>;

/// Settled extents of every layout region: width for vertical axes, height
/// for horizontal axes, heights for title and footer.
///
/// Values only ever grow while the solver iterates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Dimensions {
    pub(crate) title: f64,
    pub(crate) footer: f64,
    axes: PerSlot<SlotDims>,
}

impl Dimensions {
    fn zeroed(snapshot: &LayoutSnapshot) -> Self {
        Self {
            title: 0.0,
            footer: 0.0,
            axes: PerSlot::from_fn(|slot| smallvec![0.0; snapshot.axes_count(slot)]),
        }
    }

    pub(crate) fn axis(&self, axis: AxisId) -> f64 {
        self.axes[axis.slot].get(axis.index).copied().unwrap_or(0.0)
    }

    fn set_axis(&mut self, axis: AxisId, dim: f64) {
        self.axes[axis.slot][axis.index] = dim;
    }

    pub(crate) fn slot_total(&self, slot: AxisSlot) -> f64 {
        self.axes[slot].iter().sum()
    }

    /// Combined width of all left and right axes.
    pub(crate) fn y_total(&self) -> f64 {
        self.slot_total(AxisSlot::Left) + self.slot_total(AxisSlot::Right)
    }

    /// Combined height of all top and bottom axes.
    pub(crate) fn x_total(&self) -> f64 {
        self.slot_total(AxisSlot::Top) + self.slot_total(AxisSlot::Bottom)
    }

    /// Re-centers a title/footer rectangle over the canvas span.
    pub(crate) fn centered(&self, rect: Rect, label: Rect) -> Rect {
        Rect::new(
            rect.left() + self.slot_total(AxisSlot::Left),
            label.y,
            rect.width - self.y_total(),
            label.height,
        )
    }

    /// The canvas rectangle left after all axis extents are carved off.
    pub(crate) fn inner_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.slot_total(AxisSlot::Left),
            rect.y + self.slot_total(AxisSlot::Top),
            rect.width - self.y_total(),
            rect.height - self.x_total(),
        )
    }
}

fn label_height(
    label: &LabelData,
    symmetric: bool,
    options: LayoutOptions,
    width: f64,
    axes_width: f64,
) -> f64 {
    let Some(metric) = &label.metric else {
        return 0.0;
    };

    let mut w = width;
    if !symmetric {
        // center to the canvas
        w -= axes_width;
    }

    let mut d = metric.height_for_width(w).ceil();
    if !options.ignore_frames {
        d += 2.0 * label.frame_width;
    }
    d
}

/// Fixed-point iteration over the mutually dependent region sizes.
///
/// Expanding a horizontal axis shrinks the length available to the vertical
/// axes, which can wrap their titles and expand them, which shrinks the
/// horizontal axes' length again. Every update is non-decreasing and bounded
/// by `rect`, so the loop settles; the pass cap only guards against a
/// measurement closure that misbehaves.
pub(crate) fn solve_dimensions(
    engine: &LayoutEngine,
    options: LayoutOptions,
    snapshot: &LayoutSnapshot,
    rect: Rect,
) -> Dimensions {
    let mut dims = Dimensions::zeroed(snapshot);
    let backbone = engine.backbone_offsets(options, snapshot);
    let symmetric = snapshot.has_symmetric_y_axes();

    let instance_count: usize = AxisSlot::ALL
        .iter()
        .map(|slot| snapshot.axes_count(*slot))
        .sum();
    let max_passes = 4 * (instance_count + 2);

    let mut passes = 0;
    loop {
        passes += 1;
        let mut done = true;

        if !options.ignore_title {
            let d = label_height(&snapshot.title, symmetric, options, rect.width, dims.y_total());
            if d > dims.title {
                dims.title = d;
                done = false;
            }
        }

        if !options.ignore_footer {
            let d = label_height(
                &snapshot.footer,
                symmetric,
                options,
                rect.width,
                dims.y_total(),
            );
            if d > dims.footer {
                dims.footer = d;
                done = false;
            }
        }

        for slot in AxisSlot::ALL {
            for index in 0..snapshot.axes_count(slot) {
                let axis = AxisId::new(slot, index);
                let scale = snapshot.scale(axis);
                if !scale.visible {
                    continue;
                }

                let length = if slot.is_horizontal() {
                    let mut length = rect.width - dims.y_total() - (scale.start + scale.end);

                    if dims.slot_total(AxisSlot::Right) > 0.0 {
                        length -= 1.0;
                    }

                    // Border distances overlap the opposing axis width;
                    // only the excess consumes length.
                    length += (scale.start - backbone[AxisSlot::Left])
                        .min(dims.slot_total(AxisSlot::Left));
                    length += (scale.end - backbone[AxisSlot::Right])
                        .min(dims.slot_total(AxisSlot::Right));
                    length
                } else {
                    let mut length = rect.height - dims.x_total() - (scale.start + scale.end) - 1.0;

                    if dims.slot_total(AxisSlot::Bottom) <= 0.0 {
                        length -= 1.0;
                    }
                    if dims.slot_total(AxisSlot::Top) <= 0.0 {
                        length -= 1.0;
                    }

                    // The y-axis end labels sit beside the x-axis ticks;
                    // the shared band must not be counted twice.
                    if dims.slot_total(AxisSlot::Bottom) > 0.0 {
                        length += (scale.start - backbone[AxisSlot::Bottom])
                            .min(snapshot.tick_offset[AxisSlot::Bottom]);
                    }
                    if dims.slot_total(AxisSlot::Top) > 0.0 {
                        length += (scale.end - backbone[AxisSlot::Top])
                            .min(snapshot.tick_offset[AxisSlot::Top]);
                    }

                    if dims.title > 0.0 {
                        length -= dims.title + engine.spacing_f64();
                    }
                    length
                };

                let mut d = scale.dim_without_title;
                if let Some(title) = &scale.title {
                    d += title.height_for_width(length.floor());
                }

                if d > dims.axis(axis) {
                    dims.set_axis(axis, d);
                    done = false;
                }
            }
        }

        if done {
            break;
        }
        if passes >= max_passes {
            warn!(passes, "dimension solver hit the pass cap before settling");
            break;
        }
    }

    trace!(
        passes,
        title = dims.title,
        footer = dims.footer,
        "dimension solver settled"
    );
    dims
}

#[cfg(test)]
mod tests {
    use super::solve_dimensions;
    use crate::config::LayoutOptions;
    use crate::core::{AxisId, AxisSlot, Rect};
    use crate::engine::LayoutEngine;
    use crate::measure::snapshot::LayoutSnapshot;
    use crate::measure::static_plot::{StaticAxis, StaticLabel, StaticPlot};

    const OUTER: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn solve(plot: &StaticPlot) -> super::Dimensions {
        let snapshot = LayoutSnapshot::capture(plot, OUTER);
        solve_dimensions(
            &LayoutEngine::default(),
            LayoutOptions::new(),
            &snapshot,
            OUTER,
        )
    }

    #[test]
    fn empty_plot_settles_to_all_zero() {
        let dims = solve(&StaticPlot::new());
        assert_eq!(dims.title, 0.0);
        assert_eq!(dims.footer, 0.0);
        assert_eq!(dims.y_total(), 0.0);
        assert_eq!(dims.x_total(), 0.0);
    }

    #[test]
    fn untitled_axis_settles_to_its_tick_label_extent() {
        let plot = StaticPlot::new().with_axis(AxisSlot::Bottom, StaticAxis::new(30.0));
        let dims = solve(&plot);
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Bottom, 0)), 30.0);
        assert_eq!(dims.y_total(), 0.0);
    }

    // With no y axes and a default 4px canvas margin, a bottom axis gets
    // 800 - 2*4 = 792 of length for its title. A natural title width of
    // exactly 792 stays on one line; one more pixel wraps to two.
    #[test]
    fn horizontal_axis_title_length_accounts_for_backbone_offsets() {
        let single_line = StaticPlot::new().with_axis(
            AxisSlot::Bottom,
            StaticAxis::new(30.0).with_title(StaticLabel::new(792.0, 10.0)),
        );
        let dims = solve(&single_line);
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Bottom, 0)), 40.0);

        let wrapped = StaticPlot::new().with_axis(
            AxisSlot::Bottom,
            StaticAxis::new(30.0).with_title(StaticLabel::new(793.0, 10.0)),
        );
        let dims = solve(&wrapped);
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Bottom, 0)), 50.0);
    }

    #[test]
    fn plot_title_reserves_height_and_shrinks_vertical_axis_length() {
        // 700 <= 800 so the title stays one line high.
        let plot = StaticPlot::new()
            .with_title(StaticLabel::new(700.0, 20.0))
            .with_axis(
                AxisSlot::Left,
                // Vertical length without a title would be 597; the title
                // plus spacing removes another 25.
                StaticAxis::new(40.0).with_title(StaticLabel::new(572.0, 8.0)),
            );
        let snapshot = LayoutSnapshot::capture(&plot, OUTER);
        let dims = solve_dimensions(
            &LayoutEngine::default(),
            LayoutOptions::new(),
            &snapshot,
            OUTER,
        );

        assert_eq!(dims.title, 20.0);
        // 600 - 0 - 1 - 1 - 1 - (20 + 5) = 572 -> single title line.
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Left, 0)), 48.0);
    }

    #[test]
    fn hidden_instances_contribute_nothing() {
        let plot = StaticPlot::new()
            .with_hidden_axis(AxisSlot::Left)
            .with_axis(AxisSlot::Left, StaticAxis::new(45.0));
        let dims = solve(&plot);
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Left, 0)), 0.0);
        assert_eq!(dims.axis(AxisId::new(AxisSlot::Left, 1)), 45.0);
        assert_eq!(dims.slot_total(AxisSlot::Left), 45.0);
    }

    #[test]
    fn ignore_title_option_suppresses_title_height() {
        let plot = StaticPlot::new().with_title(StaticLabel::new(700.0, 20.0));
        let snapshot = LayoutSnapshot::capture(&plot, OUTER);
        let dims = solve_dimensions(
            &LayoutEngine::default(),
            LayoutOptions::new().with_ignore_title(true),
            &snapshot,
            OUTER,
        );
        assert_eq!(dims.title, 0.0);
    }
}
