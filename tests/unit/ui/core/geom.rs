use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));
    assert!(!r.contains(Pos::new(9, 20)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn bounds_extent_is_corner_difference() {
    let b = Bounds::from_size(2, 3, 10, 4);
    assert_eq!(b, Bounds::new(2, 3, 12, 7));
    assert_eq!(b.width(), 10);
    assert_eq!(b.height(), 4);
}

#[test]
fn inner_rect_excludes_frame_cells() {
    let screen = Rect::new(0, 0, 80, 24);
    let b = Bounds::new(0, 0, 10, 5);
    assert_eq!(b.outer_rect(screen), Rect::new(0, 0, 11, 6));
    assert_eq!(b.inner_rect(screen), Rect::new(1, 1, 9, 4));
}

#[test]
fn rects_clip_to_screen() {
    let screen = Rect::new(0, 0, 80, 24);
    let b = Bounds::new(-3, 20, 100, 30);
    assert_eq!(b.outer_rect(screen), Rect::new(0, 20, 80, 4));
}

#[test]
fn degenerate_bounds_clip_to_empty() {
    let screen = Rect::new(0, 0, 80, 24);
    assert!(Bounds::new(5, 5, 5, 5).inner_rect(screen).is_empty());
    assert!(Bounds::new(10, 10, 4, 4).outer_rect(screen).is_empty());
    assert!(Bounds::new(90, 0, 95, 5).outer_rect(screen).is_empty());
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
    assert_eq!(
        Rect::new(0, 0, 4, 4).intersect(Rect::new(2, 1, 10, 2)),
        Rect::new(2, 1, 2, 2)
    );
}

#[test]
fn row_out_of_range_is_empty() {
    let r = Rect::new(2, 2, 5, 3);
    assert_eq!(r.row(1), Rect::new(2, 3, 5, 1));
    assert!(r.row(3).is_empty());
}
