use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four plot edges that can host axis scales.
///
/// `ALL` iterates Left, Right, Bottom, Top. The scale aligner depends on
/// this order: horizontal axes read y-axis rectangles that were already
/// adjusted earlier in the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSlot {
    Left,
    Right,
    Bottom,
    Top,
}

impl AxisSlot {
    pub const ALL: [AxisSlot; 4] = [
        AxisSlot::Left,
        AxisSlot::Right,
        AxisSlot::Bottom,
        AxisSlot::Top,
    ];

    pub const COUNT: usize = 4;

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, AxisSlot::Top | AxisSlot::Bottom)
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    const fn as_index(self) -> usize {
        match self {
            AxisSlot::Left => 0,
            AxisSlot::Right => 1,
            AxisSlot::Bottom => 2,
            AxisSlot::Top => 3,
        }
    }
}

/// Identifies one axis instance: the hosting slot plus its position in the
/// slot's outward stacking order (0 is closest to the canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisId {
    pub slot: AxisSlot,
    pub index: usize,
}

impl AxisId {
    #[must_use]
    pub const fn new(slot: AxisSlot, index: usize) -> Self {
        Self { slot, index }
    }
}

/// Fixed map with one value per axis slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerSlot<T>([T; AxisSlot::COUNT]);

impl<T> PerSlot<T> {
    pub fn from_fn(mut f: impl FnMut(AxisSlot) -> T) -> Self {
        Self(AxisSlot::ALL.map(&mut f))
    }

    #[must_use]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; AxisSlot::COUNT])
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisSlot, &T)> {
        AxisSlot::ALL.iter().map(|slot| (*slot, &self.0[slot.as_index()]))
    }
}

impl<T: Default> Default for PerSlot<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<AxisSlot> for PerSlot<T> {
    type Output = T;

    fn index(&self, slot: AxisSlot) -> &T {
        &self.0[slot.as_index()]
    }
}

impl<T> IndexMut<AxisSlot> for PerSlot<T> {
    fn index_mut(&mut self, slot: AxisSlot) -> &mut T {
        &mut self.0[slot.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisSlot, PerSlot};

    #[test]
    fn slots_classify_orientation() {
        assert!(AxisSlot::Top.is_horizontal());
        assert!(AxisSlot::Bottom.is_horizontal());
        assert!(AxisSlot::Left.is_vertical());
        assert!(AxisSlot::Right.is_vertical());
    }

    #[test]
    fn per_slot_indexes_by_slot() {
        let mut map = PerSlot::splat(0_i32);
        map[AxisSlot::Right] = 7;
        assert_eq!(map[AxisSlot::Right], 7);
        assert_eq!(map[AxisSlot::Left], 0);

        let filled = PerSlot::from_fn(|slot| slot.is_horizontal());
        assert!(filled[AxisSlot::Top]);
        assert!(!filled[AxisSlot::Left]);
    }
}
