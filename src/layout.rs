use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{LayoutOptions, LegendPosition};
use crate::core::{AxisId, AxisSlot, PerSlot, Rect, Size};
use crate::engine::{LayoutEngine, align, dimensions, legend};
use crate::error::{LayoutError, LayoutResult};
use crate::measure::snapshot::LayoutSnapshot;
use crate::measure::source::PlotLayoutSource;

/// Rectangles computed by one `activate` pass.
///
/// Each rectangle is exclusively owned here; suppressed or hidden components
/// come out empty. Axis rectangles are keyed by (slot, stacking index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRects {
    pub title: Rect,
    pub footer: Rect,
    pub legend: Rect,
    pub canvas: Rect,
    pub axes: PerSlot<Vec<Rect>>,
}

impl LayoutRects {
    /// All-empty state with one placeholder rect per slot.
    #[must_use]
    pub fn invalidated() -> Self {
        Self {
            title: Rect::default(),
            footer: Rect::default(),
            legend: Rect::default(),
            canvas: Rect::default(),
            axes: PerSlot::from_fn(|_| vec![Rect::default()]),
        }
    }

    /// Rectangle of one axis instance; empty for out-of-range ids.
    #[must_use]
    pub fn axis(&self, axis: AxisId) -> Rect {
        self.axes[axis.slot]
            .get(axis.index)
            .copied()
            .unwrap_or_default()
    }

    fn set_axis(&mut self, axis: AxisId, rect: Rect) {
        if let Some(slot_rect) = self.axes[axis.slot].get_mut(axis.index) {
            *slot_rect = rect;
        }
    }
}

impl Default for LayoutRects {
    fn default() -> Self {
        Self::invalidated()
    }
}

/// Owns the layout configuration and the last computed rectangles.
///
/// `activate` recomputes everything from a [`PlotLayoutSource`] and an outer
/// rectangle; accessors read the cached result until the next
/// `invalidate`/`activate` cycle. Single-threaded by design: one facade per
/// embedding widget.
#[derive(Debug)]
pub struct PlotLayout {
    engine: LayoutEngine,
    rects: LayoutRects,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            rects: LayoutRects::invalidated(),
        }
    }
}

impl PlotLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the margin between the scale ticks and the canvas on every
    /// edge. Values below -1 clamp to -1, which excludes the scale borders.
    pub fn set_canvas_margin(&mut self, margin: i32) {
        for slot in AxisSlot::ALL {
            self.set_canvas_margin_at(slot, margin);
        }
    }

    pub fn set_canvas_margin_at(&mut self, slot: AxisSlot, margin: i32) {
        self.engine.canvas_margin[slot] = margin.max(-1);
    }

    #[must_use]
    pub fn canvas_margin(&self, slot: AxisSlot) -> i32 {
        self.engine.canvas_margin[slot]
    }

    /// The canvas may extend beyond the scale ends to maximize its size, or
    /// align with them; `slot` names the canvas edge being aligned. The
    /// canvas margin for that edge has no effect while alignment is on.
    pub fn set_align_canvas_to_scale(&mut self, slot: AxisSlot, on: bool) {
        self.engine.align_canvas[slot] = on;
    }

    pub fn set_align_canvas_to_scales(&mut self, on: bool) {
        for slot in AxisSlot::ALL {
            self.engine.align_canvas[slot] = on;
        }
    }

    #[must_use]
    pub fn align_canvas_to_scale(&self, slot: AxisSlot) -> bool {
        self.engine.align_canvas[slot]
    }

    /// Distance between neighboring layout regions; negative values clamp
    /// to 0.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.engine.spacing = spacing.max(0) as u32;
    }

    #[must_use]
    pub fn spacing(&self) -> u32 {
        self.engine.spacing
    }

    /// Moves the legend and resets its ratio to the edge default
    /// (0.33 for top/bottom, 0.5 for left/right).
    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.set_legend_position_with_ratio(position, 0.0);
    }

    /// Ratio of the available space the legend may take in the dimension
    /// perpendicular to its edge. Clamped to (0, 1]; values <= 0 reset to
    /// the edge default.
    pub fn set_legend_position_with_ratio(&mut self, position: LegendPosition, ratio: f64) {
        let mut ratio = ratio.min(1.0);
        if ratio <= 0.0 {
            ratio = position.default_ratio();
        }
        self.engine.legend_position = position;
        self.engine.legend_ratio = ratio;
    }

    pub fn set_legend_ratio(&mut self, ratio: f64) {
        self.set_legend_position_with_ratio(self.engine.legend_position, ratio);
    }

    #[must_use]
    pub fn legend_position(&self) -> LegendPosition {
        self.engine.legend_position
    }

    #[must_use]
    pub fn legend_ratio(&self) -> f64 {
        self.engine.legend_ratio
    }

    #[must_use]
    pub fn rects(&self) -> &LayoutRects {
        &self.rects
    }

    #[must_use]
    pub fn title_rect(&self) -> Rect {
        self.rects.title
    }

    #[must_use]
    pub fn footer_rect(&self) -> Rect {
        self.rects.footer
    }

    #[must_use]
    pub fn legend_rect(&self) -> Rect {
        self.rects.legend
    }

    #[must_use]
    pub fn canvas_rect(&self) -> Rect {
        self.rects.canvas
    }

    #[must_use]
    pub fn axis_rect(&self, axis: AxisId) -> Rect {
        self.rects.axis(axis)
    }

    /// Overrides intended for derived layouts wrapping `activate`.
    pub fn set_title_rect(&mut self, rect: Rect) {
        self.rects.title = rect;
    }

    pub fn set_footer_rect(&mut self, rect: Rect) {
        self.rects.footer = rect;
    }

    pub fn set_legend_rect(&mut self, rect: Rect) {
        self.rects.legend = rect;
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.rects.canvas = rect;
    }

    /// No-op for out-of-range axis ids.
    pub fn set_axis_rect(&mut self, axis: AxisId, rect: Rect) {
        self.rects.set_axis(axis, rect);
    }

    /// Resets all rectangles to empty, collapsing multi-axis state back to
    /// one placeholder per slot.
    pub fn invalidate(&mut self) {
        self.rects = LayoutRects::invalidated();
    }

    /// `invalidate` followed by `activate`.
    pub fn update(
        &mut self,
        source: &dyn PlotLayoutSource,
        outer: Rect,
        options: LayoutOptions,
    ) -> LayoutResult<&LayoutRects> {
        self.invalidate();
        self.activate(source, outer, options)
    }

    /// Recomputes the geometry of all components within `outer`.
    ///
    /// The result is cached on the facade and also returned; calling again
    /// with identical inputs yields an identical result.
    pub fn activate(
        &mut self,
        source: &dyn PlotLayoutSource,
        outer: Rect,
        options: LayoutOptions,
    ) -> LayoutResult<&LayoutRects> {
        validate_outer(outer)?;

        let snapshot = LayoutSnapshot::capture(source, outer);
        let spacing = self.engine.spacing_f64();

        // Undistributed rest of the plot rectangle.
        let mut rect = outer;

        let mut rects = LayoutRects {
            title: Rect::default(),
            footer: Rect::default(),
            legend: Rect::default(),
            canvas: Rect::default(),
            axes: PerSlot::from_fn(|slot| vec![Rect::default(); snapshot.axes_count(slot)]),
        };

        if !options.ignore_legend {
            if let Some(legend_data) = &snapshot.legend {
                rects.legend = legend::layout_legend(&self.engine, options, legend_data, rect);

                // Remove the legend strip plus one spacing gap from the
                // working rectangle.
                match self.engine.legend_position {
                    LegendPosition::Left => rect.set_left(rects.legend.right() + spacing),
                    LegendPosition::Right => rect.set_right(rects.legend.left() - spacing),
                    LegendPosition::Top => rect.set_top(rects.legend.bottom() + spacing),
                    LegendPosition::Bottom => rect.set_bottom(rects.legend.top() - spacing),
                }
            }
        }

        // Title, footer and axis extents depend on each other through line
        // breaks; the solver settles them all at once.
        let dims = dimensions::solve_dimensions(&self.engine, options, &snapshot, rect);

        if dims.title > 0.0 {
            let mut label = Rect::new(rect.left(), rect.top(), rect.width, dims.title);
            rect.set_top(label.bottom() + spacing);

            if !snapshot.has_symmetric_y_axes() {
                // One y slot is busier than the other: center the title
                // over the canvas instead of the full width.
                label = dims.centered(rect, label);
            }
            rects.title = label;
        }

        if dims.footer > 0.0 {
            let mut label = Rect::new(
                rect.left(),
                rect.bottom() - dims.footer,
                rect.width,
                dims.footer,
            );
            rect.set_bottom(label.top() - spacing);

            if !snapshot.has_symmetric_y_axes() {
                label = dims.centered(rect, label);
            }
            rects.footer = label;
        }

        rects.canvas = dims.inner_rect(rect);

        for slot in AxisSlot::ALL {
            // Stack instances outward from the canvas edge.
            let mut pos = 0.0;
            for index in 0..rects.axes[slot].len() {
                let dim = dims.axis(AxisId::new(slot, index));
                if dim <= 0.0 {
                    continue;
                }

                let canvas = rects.canvas;
                let placed = match slot {
                    AxisSlot::Left => {
                        Rect::new(canvas.left() - pos - dim, canvas.y, dim, canvas.height)
                    }
                    AxisSlot::Right => Rect::new(canvas.right() + pos, canvas.y, dim, canvas.height),
                    AxisSlot::Bottom => {
                        Rect::new(canvas.x, canvas.bottom() + pos, canvas.width, dim)
                    }
                    AxisSlot::Top => {
                        Rect::new(canvas.x, canvas.top() - pos - dim, canvas.width, dim)
                    }
                };

                // A degenerate working rect flips the extent taken from the
                // canvas; alignment expects normalized rects.
                rects.axes[slot][index] = placed.normalized();
                pos += dim;
            }
        }

        // Use the empty corners to extend the axes so end labels move into
        // them instead of clipping.
        align::align_scales(
            &self.engine,
            options,
            &snapshot,
            &mut rects.canvas,
            &mut rects.axes,
        );

        if let Some(legend_data) = &snapshot.legend {
            if !rects.legend.is_empty() {
                rects.legend = legend::align_legend(
                    self.engine.legend_position,
                    legend_data,
                    rects.canvas,
                    rects.legend,
                );
            }
        }

        debug!(
            canvas_width = rects.canvas.width,
            canvas_height = rects.canvas.height,
            title_height = rects.title.height,
            footer_height = rects.footer.height,
            "layout pass settled"
        );

        self.rects = rects;
        Ok(&self.rects)
    }

    /// Estimates the smallest outer size that avoids label clipping.
    ///
    /// Single pass with shift-based corrections: a deliberately cheap lower
    /// bound, not the pixel-exact answer the iterative solver would give.
    #[must_use]
    pub fn minimum_size_hint(&self, source: &dyn PlotLayoutSource) -> Size {
        #[derive(Debug, Clone, Copy, Default)]
        struct HintData {
            w: f64,
            h: f64,
            min_start: f64,
            min_end: f64,
            tick_offset: f64,
        }

        let canvas = source.canvas_measure();
        let spacing = self.engine.spacing_f64();

        let mut hints = PerSlot::<HintData>::default();
        let mut canvas_border = PerSlot::splat(0.0);
        for slot in AxisSlot::ALL {
            if let Some(hint) = source.axis_size_hint(slot) {
                hints[slot] = HintData {
                    w: hint.minimum_size.width,
                    h: hint.minimum_size.height,
                    min_start: hint.border_hint_start,
                    min_end: hint.border_hint_end,
                    tick_offset: hint.tick_offset,
                };
            }
            canvas_border[slot] = canvas.contents_margins[slot]
                + f64::from(self.engine.canvas_margin[slot])
                + 1.0;
        }

        // End labels overhang into the neighboring axis regions; shift the
        // overlapping share out of this axis's own extent.
        for slot in AxisSlot::ALL {
            let mut sd = hints[slot];

            if slot.is_horizontal() && sd.w > 0.0 {
                if sd.min_start > canvas_border[AxisSlot::Left] && hints[AxisSlot::Left].w > 0.0 {
                    let shift = (sd.min_start - canvas_border[AxisSlot::Left])
                        .min(hints[AxisSlot::Left].w);
                    sd.w -= shift;
                }
                if sd.min_end > canvas_border[AxisSlot::Right] && hints[AxisSlot::Right].w > 0.0 {
                    let shift = (sd.min_end - canvas_border[AxisSlot::Right])
                        .min(hints[AxisSlot::Right].w);
                    sd.w -= shift;
                }
            }

            if slot.is_vertical() && sd.h > 0.0 {
                if sd.min_start > canvas_border[AxisSlot::Bottom]
                    && hints[AxisSlot::Bottom].h > 0.0
                {
                    let shift = (sd.min_start - canvas_border[AxisSlot::Bottom])
                        .min(hints[AxisSlot::Bottom].tick_offset);
                    sd.h -= shift;
                }
                if sd.min_end > canvas_border[AxisSlot::Top] && hints[AxisSlot::Top].h > 0.0 {
                    let shift = (sd.min_end - canvas_border[AxisSlot::Top])
                        .min(hints[AxisSlot::Top].tick_offset);
                    sd.h -= shift;
                }
            }

            hints[slot] = sd;
        }

        let margins = canvas.contents_margins;

        let mut w = hints[AxisSlot::Left].w + hints[AxisSlot::Right].w;
        let cw = hints[AxisSlot::Bottom].w.max(hints[AxisSlot::Top].w)
            + margins[AxisSlot::Left]
            + 1.0
            + margins[AxisSlot::Right]
            + 1.0;
        w += cw.max(canvas.minimum_size.width);

        let mut h = hints[AxisSlot::Bottom].h + hints[AxisSlot::Top].h;
        let ch = hints[AxisSlot::Left].h.max(hints[AxisSlot::Right].h)
            + margins[AxisSlot::Top]
            + 1.0
            + margins[AxisSlot::Bottom]
            + 1.0;
        h += ch.max(canvas.minimum_size.height);

        let center_on_canvas =
            visible_axes(source, AxisSlot::Left) != visible_axes(source, AxisSlot::Right);

        for label in [source.title_measure(), source.footer_measure()]
            .into_iter()
            .flatten()
        {
            let mut label_w = w;
            if center_on_canvas {
                label_w -= hints[AxisSlot::Left].w + hints[AxisSlot::Right].w;
            }

            let mut label_h = label.metric.height_for_width(label_w).ceil();
            if label_h > label_w {
                // Compensate for a long title.
                w = label_h;
                label_w = label_h;
                if center_on_canvas {
                    w += hints[AxisSlot::Left].w + hints[AxisSlot::Right].w;
                }
                label_h = label.metric.height_for_width(label_w).ceil();
            }
            h += label_h + spacing;
        }

        if let Some(legend_data) = source.legend_measure() {
            let ratio = self.engine.legend_ratio;

            if self.engine.legend_position.is_side() {
                let mut legend_w = legend_data.size_hint.width;
                let legend_h = legend_data.height_for_width.height_for_width(legend_w);

                if legend_data.frame_width > 0.0 {
                    w += spacing;
                }
                if legend_h > h {
                    legend_w += legend_data.h_scroll_extent;
                }
                if ratio < 1.0 {
                    legend_w = legend_w.min(w / (1.0 - ratio));
                }
                w += legend_w + spacing;
            } else {
                let legend_w = legend_data.size_hint.width.min(w);
                let mut legend_h = legend_data.height_for_width.height_for_width(legend_w);

                if legend_data.frame_width > 0.0 {
                    h += spacing;
                }
                if ratio < 1.0 {
                    legend_h = legend_h.min(h / (1.0 - ratio));
                }
                h += legend_h + spacing;
            }
        }

        Size::new(w, h)
    }
}

fn visible_axes(source: &dyn PlotLayoutSource, slot: AxisSlot) -> usize {
    (0..source.axes_count(slot))
        .filter(|index| source.axis_measure(AxisId::new(slot, *index)).is_some())
        .count()
}

fn validate_outer(outer: Rect) -> LayoutResult<()> {
    let finite = outer.x.is_finite()
        && outer.y.is_finite()
        && outer.width.is_finite()
        && outer.height.is_finite();
    if !finite || outer.width < 0.0 || outer.height < 0.0 {
        return Err(LayoutError::InvalidRect {
            x: outer.x,
            y: outer.y,
            width: outer.width,
            height: outer.height,
        });
    }
    Ok(())
}
