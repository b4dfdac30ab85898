use crate::config::LayoutOptions;
use crate::core::{AxisId, AxisSlot, PerSlot, Rect};
use crate::engine::LayoutEngine;
use crate::measure::snapshot::LayoutSnapshot;

fn first_valid(axis_rects: &PerSlot<Vec<Rect>>, slot: AxisSlot) -> Option<Rect> {
    axis_rects[slot].first().copied().filter(|rect| rect.is_valid())
}

/// Reconciles axis backbones with the canvas edges.
///
/// Pass 1 uses the empty plot corners to extend each axis over its
/// neighbors so end labels are not clipped; when a neighbor cannot yield
/// enough room and that edge aligns the canvas to the scale, the canvas
/// shrinks instead. Pass 2 snaps every axis on an aligned edge exactly to
/// the now-final canvas boundary.
pub(crate) fn align_scales(
    engine: &LayoutEngine,
    options: LayoutOptions,
    snapshot: &LayoutSnapshot,
    canvas: &mut Rect,
    axis_rects: &mut PerSlot<Vec<Rect>>,
) {
    let backbone = engine.backbone_offsets(options, snapshot);

    for slot in AxisSlot::ALL {
        for index in 0..axis_rects[slot].len() {
            let mut axis_rect = axis_rects[slot][index];
            if !axis_rect.is_valid() {
                continue;
            }

            let scale = snapshot.scale(AxisId::new(slot, index));

            if slot.is_horizontal() {
                let left_offset = backbone[AxisSlot::Left] - scale.start;
                match first_valid(axis_rects, AxisSlot::Left) {
                    Some(left_rect) => {
                        let dx = left_offset + left_rect.width;
                        if engine.align_canvas[AxisSlot::Left] && dx < 0.0 {
                            // The axis needs more room than the left scale
                            // width offers.
                            canvas.set_left(canvas.left().max(axis_rect.left() - dx));
                        } else {
                            let left = (axis_rect.left() + left_offset).max(left_rect.left());
                            axis_rect.set_left(left);
                        }
                    }
                    None => {
                        if engine.align_canvas[AxisSlot::Left] && left_offset < 0.0 {
                            canvas.set_left(canvas.left().max(axis_rect.left() - left_offset));
                        } else if left_offset > 0.0 {
                            axis_rect.set_left(axis_rect.left() + left_offset);
                        }
                    }
                }

                let right_offset = backbone[AxisSlot::Right] - scale.end + 1.0;
                match first_valid(axis_rects, AxisSlot::Right) {
                    Some(right_rect) => {
                        let dx = right_offset + right_rect.width;
                        if engine.align_canvas[AxisSlot::Right] && dx < 0.0 {
                            canvas.set_right(canvas.right().min(axis_rect.right() + dx));
                        }

                        // The right edge trims against the neighbor even
                        // when the canvas was just adjusted.
                        let right = (axis_rect.right() - right_offset).min(right_rect.right());
                        axis_rect.set_right(right);
                    }
                    None => {
                        if engine.align_canvas[AxisSlot::Right] && right_offset < 0.0 {
                            canvas.set_right(canvas.right().min(axis_rect.right() + right_offset));
                        } else if right_offset > 0.0 {
                            axis_rect.set_right(axis_rect.right() - right_offset);
                        }
                    }
                }
            } else {
                let bottom_offset = backbone[AxisSlot::Bottom] - scale.end + 1.0;
                match first_valid(axis_rects, AxisSlot::Bottom) {
                    Some(bottom_rect) => {
                        let dy = bottom_offset + bottom_rect.height;
                        if engine.align_canvas[AxisSlot::Bottom] && dy < 0.0 {
                            // The axis needs more room than the bottom
                            // scale height offers.
                            canvas.set_bottom(canvas.bottom().min(axis_rect.bottom() + dy));
                        } else {
                            let max_bottom =
                                bottom_rect.top() + snapshot.tick_offset[AxisSlot::Bottom];
                            let bottom = (axis_rect.bottom() - bottom_offset).min(max_bottom);
                            axis_rect.set_bottom(bottom);
                        }
                    }
                    None => {
                        if engine.align_canvas[AxisSlot::Bottom] && bottom_offset < 0.0 {
                            canvas.set_bottom(canvas.bottom().min(axis_rect.bottom() + bottom_offset));
                        } else if bottom_offset > 0.0 {
                            axis_rect.set_bottom(axis_rect.bottom() - bottom_offset);
                        }
                    }
                }

                let top_offset = backbone[AxisSlot::Top] - scale.start;
                match first_valid(axis_rects, AxisSlot::Top) {
                    Some(top_rect) => {
                        let dy = top_offset + top_rect.height;
                        if engine.align_canvas[AxisSlot::Top] && dy < 0.0 {
                            canvas.set_top(canvas.top().max(axis_rect.top() - dy));
                        } else {
                            let min_top = top_rect.bottom() - snapshot.tick_offset[AxisSlot::Top];
                            let top = (axis_rect.top() + top_offset).max(min_top);
                            axis_rect.set_top(top);
                        }
                    }
                    None => {
                        if engine.align_canvas[AxisSlot::Top] && top_offset < 0.0 {
                            canvas.set_top(canvas.top().max(axis_rect.top() - top_offset));
                        } else if top_offset > 0.0 {
                            axis_rect.set_top(axis_rect.top() + top_offset);
                        }
                    }
                }
            }

            axis_rects[slot][index] = axis_rect;
        }
    }

    // The canvas is now aligned to the scale with the largest border
    // distances; realign the remaining scales against it.

    for slot in AxisSlot::ALL {
        for index in 0..axis_rects[slot].len() {
            let mut axis_rect = axis_rects[slot][index];
            if !axis_rect.is_valid() {
                continue;
            }

            let scale = snapshot.scale(AxisId::new(slot, index));

            if slot.is_horizontal() {
                if engine.align_canvas[AxisSlot::Left] {
                    let mut left = canvas.left() - scale.start;
                    if !options.ignore_frames {
                        left += snapshot.canvas_margins[AxisSlot::Left];
                    }
                    axis_rect.set_left(left);
                }
                if engine.align_canvas[AxisSlot::Right] {
                    let mut right = canvas.right() - 1.0 + scale.end;
                    if !options.ignore_frames {
                        right -= snapshot.canvas_margins[AxisSlot::Right];
                    }
                    axis_rect.set_right(right);
                }

                if engine.align_canvas[slot] {
                    if slot == AxisSlot::Top {
                        axis_rect.set_bottom(canvas.top());
                    } else {
                        axis_rect.set_top(canvas.bottom());
                    }
                }
            } else {
                if engine.align_canvas[AxisSlot::Top] {
                    let mut top = canvas.top() - scale.start;
                    if !options.ignore_frames {
                        top += snapshot.canvas_margins[AxisSlot::Top];
                    }
                    axis_rect.set_top(top);
                }
                if engine.align_canvas[AxisSlot::Bottom] {
                    let mut bottom = canvas.bottom() - 1.0 + scale.end;
                    if !options.ignore_frames {
                        bottom -= snapshot.canvas_margins[AxisSlot::Bottom];
                    }
                    axis_rect.set_bottom(bottom);
                }

                if engine.align_canvas[slot] {
                    if slot == AxisSlot::Left {
                        axis_rect.set_right(canvas.left());
                    } else {
                        axis_rect.set_left(canvas.right());
                    }
                }
            }

            axis_rects[slot][index] = axis_rect;
        }
    }
}
