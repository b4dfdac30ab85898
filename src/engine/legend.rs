use crate::config::{LayoutOptions, LegendPosition};
use crate::core::Rect;
use crate::engine::LayoutEngine;
use crate::measure::snapshot::LegendData;

/// Places the legend flush against its configured edge, clamped to the
/// configured ratio of the available extent.
pub(crate) fn layout_legend(
    engine: &LayoutEngine,
    options: LayoutOptions,
    legend: &LegendData,
    rect: Rect,
) -> Rect {
    let dim = if engine.legend_position.is_side() {
        // Side legends never take more than their ratio of the width.
        let mut dim = legend.hint.width.min(rect.width * engine.legend_ratio);

        if !options.ignore_scrollbars && legend.hint.height > rect.height {
            // The legend needs extra room for its vertical scrollbar.
            dim += legend.h_scroll_extent;
        }
        dim
    } else {
        let dim = legend.hint.height.min(rect.height * engine.legend_ratio);
        dim.max(legend.v_scroll_extent)
    };

    match engine.legend_position {
        LegendPosition::Left => Rect::new(rect.x, rect.y, dim, rect.height),
        LegendPosition::Right => Rect::new(rect.right() - dim, rect.y, dim, rect.height),
        LegendPosition::Top => Rect::new(rect.x, rect.y, rect.width, dim),
        LegendPosition::Bottom => Rect::new(rect.x, rect.bottom() - dim, rect.width, dim),
    }
}

/// Re-aligns the legend against the final canvas rather than the whole
/// plot whenever it is smaller than the canvas in its primary dimension.
pub(crate) fn align_legend(
    position: LegendPosition,
    legend: &LegendData,
    canvas: Rect,
    legend_rect: Rect,
) -> Rect {
    let mut aligned = legend_rect;

    if position.is_side() {
        if legend.hint.height < canvas.height {
            aligned.y = canvas.y;
            aligned.height = canvas.height;
        }
    } else if legend.hint.width < canvas.width {
        aligned.x = canvas.x;
        aligned.width = canvas.width;
    }

    aligned
}
