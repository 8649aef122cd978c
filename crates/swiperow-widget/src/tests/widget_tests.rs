use super::*;

use std::cell::Cell;
use std::rc::Rc;

const MILLIS: u64 = 1_000_000;

/// Records which region painted where.
type Canvas = Vec<(&'static str, Rect)>;

fn test_row() -> SwipeRow<Canvas> {
    let mut row = SwipeRow::new(
        50.0,
        |canvas: &mut Canvas, frame| canvas.push(("content", frame)),
        |canvas: &mut Canvas, frame| canvas.push(("left", frame)),
        |canvas: &mut Canvas, frame| canvas.push(("right", frame)),
    );
    row.set_container_width(300.0); // anchor_width 100, threshold 20
    row
}

fn drag(row: &mut SwipeRow<Canvas>, from_x: f32, to_x: f32) {
    row.handle_pointer(PointerEventKind::Down, Point::new(from_x, 10.0));
    row.handle_pointer(PointerEventKind::Move, Point::new(to_x, 10.0));
    row.handle_pointer(PointerEventKind::Up, Point::new(to_x, 10.0));
}

/// Runs the snap animation to completion.
fn settle(row: &mut SwipeRow<Canvas>) {
    let mut now = 0;
    while row.on_frame(now) {
        now += 16 * MILLIS;
        assert!(now < 10_000 * MILLIS, "snap animation never finished");
    }
}

#[test]
fn layout_at_rest_closed() {
    let row = test_row();
    let frames = row.layout();

    assert_eq!(frames.left, Rect::new(-100.0, 0.0, 100.0, 50.0));
    assert_eq!(frames.content, Rect::new(0.0, 0.0, 300.0, 50.0));
    assert_eq!(frames.right, Rect::new(300.0, 0.0, 100.0, 50.0));
}

#[test]
fn drag_past_threshold_reveals_left_panel() {
    let mut row = test_row();

    drag(&mut row, 10.0, 35.0);
    assert_eq!(row.rest_position(), RestPosition::LeftRevealed);
    assert!(row.needs_frame());

    settle(&mut row);
    assert_eq!(row.visual_offset(), 100.0);
    assert!(!row.needs_frame());

    // With the band shifted right, the left panel occupies the row's left
    // edge and the content starts behind it.
    let frames = row.layout();
    assert_eq!(frames.left, Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(frames.content.x, 100.0);
}

#[test]
fn short_drag_snaps_back_closed() {
    let mut row = test_row();

    drag(&mut row, 10.0, 25.0); // 15px, below the 20px threshold
    assert_eq!(row.rest_position(), RestPosition::Closed);

    settle(&mut row);
    assert_eq!(row.visual_offset(), 0.0);
}

#[test]
fn reveal_then_long_reverse_drag_closes() {
    let mut row = test_row();

    drag(&mut row, 10.0, 35.0);
    settle(&mut row);
    assert_eq!(row.rest_position(), RestPosition::LeftRevealed);

    drag(&mut row, 200.0, 110.0); // -90px: offset 10, well below the 80 line
    settle(&mut row);
    assert_eq!(row.rest_position(), RestPosition::Closed);
    assert_eq!(row.visual_offset(), 0.0);
}

#[test]
fn down_outside_the_row_is_ignored() {
    let mut row = test_row();

    row.handle_pointer(PointerEventKind::Down, Point::new(10.0, 120.0));
    row.handle_pointer(PointerEventKind::Move, Point::new(60.0, 120.0));
    row.handle_pointer(PointerEventKind::Up, Point::new(60.0, 120.0));

    assert_eq!(row.rest_position(), RestPosition::Closed);
    assert_eq!(row.visual_offset(), 0.0);
    assert!(!row.needs_frame());
}

#[test]
fn tap_on_a_revealed_row_keeps_it_revealed() {
    let mut row = test_row();

    drag(&mut row, 10.0, 40.0);
    settle(&mut row);
    assert_eq!(row.rest_position(), RestPosition::LeftRevealed);

    row.handle_pointer(PointerEventKind::Down, Point::new(150.0, 10.0));
    row.handle_pointer(PointerEventKind::Up, Point::new(150.0, 10.0));

    assert_eq!(row.rest_position(), RestPosition::LeftRevealed);
    assert_eq!(row.visual_offset(), 100.0);
    assert!(!row.needs_frame());
}

#[test]
fn invalidation_fires_on_drag_updates_and_frames() {
    let count = Rc::new(Cell::new(0usize));
    let observed = Rc::clone(&count);

    let mut row = SwipeRow::new(
        50.0,
        |canvas: &mut Canvas, frame| canvas.push(("content", frame)),
        |canvas: &mut Canvas, frame| canvas.push(("left", frame)),
        |canvas: &mut Canvas, frame| canvas.push(("right", frame)),
    )
    .on_invalidate(move || observed.set(observed.get() + 1));
    row.set_container_width(300.0);

    let after_resize = count.get();
    assert!(after_resize >= 1);

    drag(&mut row, 10.0, 35.0);
    let after_drag = count.get();
    assert!(after_drag > after_resize);

    settle(&mut row);
    assert!(count.get() > after_drag);
}

#[test]
fn new_drag_interrupts_a_running_snap() {
    let mut row = test_row();

    drag(&mut row, 10.0, 35.0);
    row.on_frame(0);
    row.on_frame(16 * MILLIS);
    assert!(row.needs_frame());

    // Grabbing the row mid-snap drops the tween; the finger takes over.
    row.handle_pointer(PointerEventKind::Down, Point::new(150.0, 10.0));
    row.handle_pointer(PointerEventKind::Move, Point::new(140.0, 10.0));
    assert!(!row.needs_frame());
    assert_eq!(row.visual_offset(), row.machine().offset());
}

#[test]
fn paint_covers_all_three_regions() {
    let mut row = test_row();
    let mut canvas = Canvas::new();

    row.paint(&mut canvas);

    let regions: Vec<&str> = canvas.iter().map(|(name, _)| *name).collect();
    assert_eq!(regions, ["content", "left", "right"]);
    assert_eq!(canvas[1].1, row.layout().left);
}

#[test]
fn resize_rescales_the_layout() {
    let mut row = test_row();
    row.set_container_width(600.0);

    let frames = row.layout();
    assert_eq!(frames.left.width, 200.0);
    assert_eq!(frames.content.width, 600.0);
}
