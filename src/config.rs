use serde::{Deserialize, Serialize};

/// Edge of the plot the legend is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl LegendPosition {
    /// Legends on the left/right edges occupy a vertical strip.
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, LegendPosition::Left | LegendPosition::Right)
    }

    /// Fallback ratio applied when a caller passes a ratio <= 0.
    #[must_use]
    pub const fn default_ratio(self) -> f64 {
        if self.is_side() { 0.5 } else { 0.33 }
    }
}

/// Per-pass switches that suppress individual layout contributions.
///
/// Ignored components contribute zero size; they are not removed from the
/// result, their rectangles just come out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub ignore_legend: bool,
    pub ignore_title: bool,
    pub ignore_footer: bool,
    pub ignore_frames: bool,
    pub ignore_scrollbars: bool,
}

impl LayoutOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_legend: false,
            ignore_title: false,
            ignore_footer: false,
            ignore_frames: false,
            ignore_scrollbars: false,
        }
    }

    #[must_use]
    pub const fn with_ignore_legend(mut self, on: bool) -> Self {
        self.ignore_legend = on;
        self
    }

    #[must_use]
    pub const fn with_ignore_title(mut self, on: bool) -> Self {
        self.ignore_title = on;
        self
    }

    #[must_use]
    pub const fn with_ignore_footer(mut self, on: bool) -> Self {
        self.ignore_footer = on;
        self
    }

    #[must_use]
    pub const fn with_ignore_frames(mut self, on: bool) -> Self {
        self.ignore_frames = on;
        self
    }

    #[must_use]
    pub const fn with_ignore_scrollbars(mut self, on: bool) -> Self {
        self.ignore_scrollbars = on;
        self
    }
}
