use plot_layout_rs::{
    AxisSlot, LegendPosition, PlotLayout, Size, StaticAxis, StaticLabel, StaticLegend, StaticPlot,
};

fn axis_with_min(dim: f64, min: Size) -> StaticAxis {
    StaticAxis::new(dim).with_minimum_size(min)
}

#[test]
fn empty_plot_needs_only_the_canvas_frame() {
    let layout = PlotLayout::new();
    let hint = layout.minimum_size_hint(&StaticPlot::new());

    // Two 1px frame concessions per dimension.
    assert_eq!(hint, Size::new(2.0, 2.0));
}

#[test]
fn axis_minimum_sizes_stack_around_the_canvas() {
    let plot = StaticPlot::new()
        .with_axis(AxisSlot::Left, axis_with_min(40.0, Size::new(40.0, 200.0)))
        .with_axis(
            AxisSlot::Bottom,
            axis_with_min(30.0, Size::new(760.0, 30.0)),
        );
    let layout = PlotLayout::new();
    let hint = layout.minimum_size_hint(&plot);

    // Width: 40 (left) + max(760 + 2, 0) = 802.
    // Height: 30 (bottom) + max(200 + 2, 0) = 232.
    assert_eq!(hint, Size::new(802.0, 232.0));
}

#[test]
fn border_hints_shift_into_the_neighboring_axis_width() {
    let plot = StaticPlot::new()
        .with_axis(AxisSlot::Left, axis_with_min(40.0, Size::new(40.0, 200.0)))
        .with_axis(
            AxisSlot::Bottom,
            axis_with_min(30.0, Size::new(760.0, 30.0)).with_border_hint(8.0, 8.0),
        );
    let layout = PlotLayout::new();
    let hint = layout.minimum_size_hint(&plot);

    // The bottom scale's 8px start overhang exceeds the 5px canvas border
    // (0 contents margin + 4 margin + 1), so 3px move into the left axis.
    // The right side has no axis to absorb the matching end overhang.
    assert_eq!(hint.width, 799.0);
    assert_eq!(hint.height, 232.0);
}

#[test]
fn canvas_minimum_size_acts_as_a_floor() {
    let plot = StaticPlot::new()
        .with_canvas_minimum(Size::new(100.0, 50.0))
        .with_title(StaticLabel::new(300.0, 20.0));
    let layout = PlotLayout::new();
    let hint = layout.minimum_size_hint(&plot);

    // 300 wraps into 3 lines at the 100px floor.
    assert_eq!(hint, Size::new(100.0, 115.0));
}

#[test]
fn bottom_legend_adds_its_clamped_height() {
    let plot = StaticPlot::new()
        .with_canvas_minimum(Size::new(400.0, 300.0))
        .with_legend(StaticLegend::new(Size::new(300.0, 80.0)));
    let mut layout = PlotLayout::new();
    layout.set_legend_position(LegendPosition::Bottom);

    let hint = layout.minimum_size_hint(&plot);
    assert_eq!(hint.width, 400.0);
    // 300 + 80 + 5 spacing.
    assert_eq!(hint.height, 385.0);
}

#[test]
fn side_legend_width_is_capped_by_the_ratio() {
    let plot = StaticPlot::new()
        .with_canvas_minimum(Size::new(100.0, 300.0))
        .with_legend(StaticLegend::new(Size::new(900.0, 200.0)));
    let mut layout = PlotLayout::new();
    layout.set_legend_position_with_ratio(LegendPosition::Right, 0.5);

    let hint = layout.minimum_size_hint(&plot);
    // The legend may take at most as much as the rest: w / (1 - 0.5).
    assert_eq!(hint.width, 100.0 + 200.0 + 5.0);
}
