use plot_layout_rs::{
    AxisId, AxisSlot, LayoutError, LayoutOptions, LegendPosition, PlotLayout, Rect, StaticAxis,
    StaticPlot,
};

#[test]
fn canvas_margin_clamps_below_minus_one() {
    let mut layout = PlotLayout::new();
    assert_eq!(layout.canvas_margin(AxisSlot::Left), 4);

    layout.set_canvas_margin(-5);
    for slot in AxisSlot::ALL {
        assert_eq!(layout.canvas_margin(slot), -1);
    }

    layout.set_canvas_margin_at(AxisSlot::Top, 12);
    assert_eq!(layout.canvas_margin(AxisSlot::Top), 12);
    assert_eq!(layout.canvas_margin(AxisSlot::Bottom), -1);
}

#[test]
fn legend_ratio_clamps_per_edge() {
    let mut layout = PlotLayout::new();
    assert_eq!(layout.legend_position(), LegendPosition::Bottom);
    assert_eq!(layout.legend_ratio(), 0.33);

    layout.set_legend_position_with_ratio(LegendPosition::Left, 2.0);
    assert_eq!(layout.legend_ratio(), 1.0);

    // Non-positive ratios reset to the edge default.
    layout.set_legend_ratio(0.0);
    assert_eq!(layout.legend_ratio(), 0.5);

    layout.set_legend_position(LegendPosition::Top);
    assert_eq!(layout.legend_ratio(), 0.33);
}

#[test]
fn spacing_never_goes_negative() {
    let mut layout = PlotLayout::new();
    assert_eq!(layout.spacing(), 5);

    layout.set_spacing(-1);
    assert_eq!(layout.spacing(), 0);

    layout.set_spacing(9);
    assert_eq!(layout.spacing(), 9);
}

#[test]
fn align_canvas_flags_are_per_edge() {
    let mut layout = PlotLayout::new();
    assert!(!layout.align_canvas_to_scale(AxisSlot::Right));

    layout.set_align_canvas_to_scale(AxisSlot::Right, true);
    assert!(layout.align_canvas_to_scale(AxisSlot::Right));
    assert!(!layout.align_canvas_to_scale(AxisSlot::Left));

    layout.set_align_canvas_to_scales(true);
    for slot in AxisSlot::ALL {
        assert!(layout.align_canvas_to_scale(slot));
    }
}

#[test]
fn manual_rect_overrides_survive_until_the_next_activation() {
    let mut layout = PlotLayout::new();
    let rect = Rect::new(1.0, 2.0, 30.0, 40.0);

    layout.set_canvas_rect(rect);
    layout.set_title_rect(rect);
    layout.set_axis_rect(AxisId::new(AxisSlot::Left, 0), rect);
    assert_eq!(layout.canvas_rect(), rect);
    assert_eq!(layout.title_rect(), rect);
    assert_eq!(layout.axis_rect(AxisId::new(AxisSlot::Left, 0)), rect);

    let plot = StaticPlot::new().with_axis(AxisSlot::Bottom, StaticAxis::new(30.0));
    layout
        .activate(&plot, Rect::new(0.0, 0.0, 800.0, 600.0), LayoutOptions::new())
        .expect("activate");
    assert_ne!(layout.canvas_rect(), rect);
    assert!(layout.title_rect().is_empty());
}

#[test]
fn invalid_outer_rect_reports_its_coordinates() {
    let mut layout = PlotLayout::new();
    let plot = StaticPlot::new();

    let err = layout
        .activate(
            &plot,
            Rect::new(3.0, 4.0, -10.0, 600.0),
            LayoutOptions::new(),
        )
        .expect_err("negative width");

    let LayoutError::InvalidRect { x, y, width, height } = err;
    assert_eq!((x, y, width, height), (3.0, 4.0, -10.0, 600.0));

    // A failed activation leaves the previous rectangles untouched.
    assert!(layout.canvas_rect().is_empty());
}

#[test]
fn zero_sized_outer_rect_is_accepted_and_collapses_everything() {
    let mut layout = PlotLayout::new();
    let plot = StaticPlot::new().with_axis(AxisSlot::Bottom, StaticAxis::new(30.0));

    let rects = layout
        .activate(&plot, Rect::new(0.0, 0.0, 0.0, 0.0), LayoutOptions::new())
        .expect("degenerate rect")
        .clone();

    assert!(rects.canvas.width <= 0.0 || rects.canvas.height <= 0.0);
}

#[test]
fn axis_rects_are_normalized_when_the_canvas_collapses() {
    let mut layout = PlotLayout::new();
    let plot = StaticPlot::new()
        .with_axis(AxisSlot::Left, StaticAxis::new(40.0))
        .with_axis(AxisSlot::Bottom, StaticAxis::new(30.0));

    // A 10px wide outer rect leaves the canvas with a flipped width; the
    // bottom axis takes that span normalized and is then trimmed like any
    // valid rect instead of being skipped with a negative extent.
    let rects = layout
        .activate(
            &plot,
            Rect::new(0.0, 0.0, 10.0, 600.0),
            LayoutOptions::new(),
        )
        .expect("activate")
        .clone();

    let bottom = rects.axis(AxisId::new(AxisSlot::Bottom, 0));
    assert!(bottom.width > 0.0);
    assert_eq!(bottom, Rect::new(14.0, 570.0, 21.0, 30.0));
}
