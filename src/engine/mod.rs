pub(crate) mod align;
pub(crate) mod dimensions;
pub(crate) mod legend;

use crate::config::{LayoutOptions, LegendPosition};
use crate::core::PerSlot;
use crate::measure::snapshot::LayoutSnapshot;

/// Persistent layout configuration shared by the solver and the aligner.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LayoutEngine {
    pub(crate) legend_position: LegendPosition,
    pub(crate) legend_ratio: f64,
    /// Space between scale ticks and the canvas edge; -1 excludes the
    /// scale borders entirely.
    pub(crate) canvas_margin: PerSlot<i32>,
    pub(crate) align_canvas: PerSlot<bool>,
    pub(crate) spacing: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            legend_position: LegendPosition::Bottom,
            legend_ratio: LegendPosition::Bottom.default_ratio(),
            canvas_margin: PerSlot::splat(4),
            align_canvas: PerSlot::splat(false),
            spacing: 5,
        }
    }
}

impl LayoutEngine {
    pub(crate) fn spacing_f64(&self) -> f64 {
        f64::from(self.spacing)
    }

    /// Offset from each canvas edge to the adjacent axis backbone: canvas
    /// contents margin (unless frames are ignored) plus the configured
    /// canvas margin (unless that edge aligns the canvas to the scale).
    pub(crate) fn backbone_offsets(
        &self,
        options: LayoutOptions,
        snapshot: &LayoutSnapshot,
    ) -> PerSlot<f64> {
        PerSlot::from_fn(|slot| {
            let mut offset = 0.0;
            if !options.ignore_frames {
                offset += snapshot.canvas_margins[slot];
            }
            if !self.align_canvas[slot] {
                offset += f64::from(self.canvas_margin[slot]);
            }
            offset
        })
    }
}
