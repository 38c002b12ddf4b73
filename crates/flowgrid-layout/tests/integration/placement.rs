//! Placement pass tests.

use crate::support::*;
use flowgrid_layout::{Alignment, FlowGrid, Point, ProposedSize, Rect, Size};

fn measured_and_arranged(
    alignment: Alignment,
    items: &[Size],
    bounds: Rect,
) -> Vec<flowgrid_layout::Placement> {
    let mut grid = FlowGrid::new().spacing(10.0).alignment(alignment);
    grid.measure(ProposedSize::width(bounds.width), items);
    grid.arrange(bounds, items)
}

#[test]
fn test_empty_input_places_nothing() {
    init_tracing();
    let mut grid = FlowGrid::new();
    let items: Vec<Size> = Vec::new();
    assert!(grid.arrange(Rect::new(0.0, 0.0, 200.0, 100.0), &items).is_empty());
}

#[test]
fn test_alignment_start_positions() {
    init_tracing();
    // Two 25-wide items: row is 60 wide inside [0, 200]
    let items = uniform_items(&[25.0, 25.0], 20.0);
    let bounds = Rect::new(0.0, 0.0, 200.0, 20.0);

    let leading = measured_and_arranged(Alignment::Leading, &items, bounds);
    let center = measured_and_arranged(Alignment::Center, &items, bounds);
    let trailing = measured_and_arranged(Alignment::Trailing, &items, bounds);

    assert_eq!(leading[0].origin.x, 0.0);
    assert_eq!(center[0].origin.x, 70.0);
    assert_eq!(trailing[0].origin.x, 140.0);
}

#[test]
fn test_unknown_alignment_places_like_leading() {
    init_tracing();
    let items = uniform_items(&[25.0, 25.0], 20.0);
    let bounds = Rect::new(12.0, 0.0, 200.0, 20.0);

    let other = measured_and_arranged(Alignment::Other, &items, bounds);
    let leading = measured_and_arranged(Alignment::Leading, &items, bounds);
    assert_eq!(other, leading);
}

#[test]
fn test_order_and_count_conservation() {
    init_tracing();
    let items: Vec<Size> = (0..40)
        .map(|i| Size::new(5.0 + (i * 11 % 60) as f32, 12.0))
        .collect();
    let bounds = Rect::new(0.0, 0.0, 150.0, 1000.0);

    for alignment in [Alignment::Leading, Alignment::Center, Alignment::Trailing] {
        let placements = measured_and_arranged(alignment, &items, bounds);
        assert_eq!(placements.len(), items.len());
        assert_in_input_order(&placements, items.len());
    }
}

#[test]
fn test_rows_stack_with_spacing() {
    init_tracing();
    // W=100, s=10: [30, 30] then [30]; first row is 25 high
    let items = vec![
        Size::new(30.0, 25.0),
        Size::new(30.0, 15.0),
        Size::new(30.0, 15.0),
    ];
    let bounds = Rect::new(10.0, 20.0, 100.0, 50.0);
    let placements = measured_and_arranged(Alignment::Leading, &items, bounds);

    assert_row_count(&placements, 2);
    assert_eq!(placements[0].origin, Point::new(10.0, 20.0));
    assert_eq!(placements[1].origin, Point::new(50.0, 20.0));
    assert_eq!(placements[2].origin, Point::new(10.0, 55.0));
}

#[test]
fn test_rows_stay_within_bounds() {
    init_tracing();
    let items = uniform_items(&[20.0, 35.0, 15.0, 40.0, 10.0, 25.0, 30.0], 10.0);
    let bounds = Rect::new(5.0, 0.0, 120.0, 200.0);

    for alignment in [Alignment::Leading, Alignment::Center, Alignment::Trailing] {
        let placements = measured_and_arranged(alignment, &items, bounds);
        assert_within_horizontal_bounds(&placements, &bounds);
    }
}

#[test]
fn test_oversized_item_placed_alone() {
    init_tracing();
    let items = uniform_items(&[20.0, 150.0, 20.0], 10.0);
    let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
    let placements = measured_and_arranged(Alignment::Leading, &items, bounds);

    assert_row_count(&placements, 3);
    assert_eq!(placements[1].origin, Point::new(0.0, 20.0));
    assert_eq!(placements[1].size, Size::new(150.0, 10.0));
}

#[test]
fn test_arrange_is_deterministic() {
    init_tracing();
    let items = uniform_items(&[20.0, 35.0, 15.0, 40.0, 10.0], 10.0);
    let bounds = Rect::new(0.0, 0.0, 80.0, 100.0);
    let mut grid = FlowGrid::new();

    let first = grid.arrange(bounds, &items);
    let second = grid.arrange(bounds, &items);
    assert_eq!(first, second);
}

#[test]
fn test_measure_then_arrange_reuses_measurements() {
    init_tracing();
    let items = vec![
        TextItem::new(60.0, 20.0),
        TextItem::new(90.0, 20.0),
        TextItem::new(30.0, 20.0),
    ];
    let mut grid = FlowGrid::new();
    let size = grid.measure(ProposedSize::width(120.0), &items);
    let placements = grid.arrange(Rect::from_origin_size(Point::ZERO, size), &items);

    assert_eq!(placements.len(), 3);
    assert!(items.iter().all(|item| item.queries() == 1));
    assert_eq!(grid.cache_stats().hits, 1);
}

#[test]
fn test_arrange_with_sink() {
    init_tracing();
    let items = uniform_items(&[10.0, 10.0, 10.0], 10.0);
    let mut grid = FlowGrid::new();
    let mut frames = Vec::new();

    grid.arrange_with(Rect::new(0.0, 0.0, 100.0, 10.0), &items, |placement| {
        frames.push(placement.rect())
    });

    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|frame| frame.size() == Size::new(10.0, 10.0)));
}

#[test]
fn test_arrange_different_items_same_count_repacks() {
    init_tracing();
    let mut grid = FlowGrid::new().alignment(Alignment::Leading);
    let measured = uniform_items(&[10.0, 10.0], 10.0);
    let arranged = vec![TextItem::new(90.0, 10.0), TextItem::new(90.0, 10.0)];

    grid.measure(ProposedSize::width(100.0), &measured);
    let placements = grid.arrange(Rect::new(0.0, 0.0, 100.0, 100.0), &arranged);

    assert_row_count(&placements, 2);
    assert_eq!(placements[0].origin, Point::new(0.0, 0.0));
    assert_eq!(placements[1].origin, Point::new(0.0, 20.0));
    assert!(arranged.iter().all(|item| item.queries() == 1));
}
