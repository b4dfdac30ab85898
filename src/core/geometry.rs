use serde::{Deserialize, Serialize};

/// Width/height pair in sub-pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle in sub-pixel units.
///
/// Edge setters keep the opposite edge fixed and adjust the extent, so
/// `set_left` moves the left edge while the right edge stays put. The
/// alignment passes rely on exactly this behavior.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// A rectangle is valid when it has positive extent on both sides.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.is_valid()
    }

    pub fn set_left(&mut self, left: f64) {
        let right = self.right();
        self.x = left;
        self.width = right - left;
    }

    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.x;
    }

    pub fn set_top(&mut self, top: f64) {
        let bottom = self.bottom();
        self.y = top;
        self.height = bottom - top;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.y;
    }

    /// Flips negative extents so width/height come out non-negative.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut rect = self;
        if rect.width < 0.0 {
            rect.x += rect.width;
            rect.width = -rect.width;
        }
        if rect.height < 0.0 {
            rect.y += rect.height;
            rect.height = -rect.height;
        }
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Size};

    #[test]
    fn edge_setters_keep_opposite_edge_fixed() {
        let mut rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        rect.set_left(15.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.width, 95.0);

        rect.set_right(100.0);
        assert_eq!(rect.left(), 15.0);
        assert_eq!(rect.width, 85.0);

        rect.set_top(25.0);
        assert_eq!(rect.bottom(), 70.0);

        rect.set_bottom(60.0);
        assert_eq!(rect.top(), 25.0);
        assert_eq!(rect.height, 35.0);
    }

    #[test]
    fn validity_requires_positive_extents() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 1.0, -1.0).is_valid());
        assert!(Rect::default().is_empty());
        assert!(Size::new(0.0, 5.0).is_empty());
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(rect, Rect::new(6.0, 4.0, 4.0, 6.0));
    }
}
