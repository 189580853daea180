use super::*;
use proptest::prelude::*;

fn outermost(width: i32, height: i32) -> SplitArea {
    SplitArea {
        x: 0,
        y: 0,
        width,
        height,
        nested: false,
    }
}

#[test]
fn split_without_children_is_empty() {
    assert!(split(outermost(100, 40), Axis::Horizontal, 0).is_empty());
    assert!(split(outermost(0, 0), Axis::Vertical, 0).is_empty());
}

#[test]
fn horizontal_three_way_split_of_100_columns() {
    let bands = split(outermost(100, 40), Axis::Horizontal, 3);
    assert_eq!(
        bands,
        vec![
            Bounds::new(0, 0, 33, 39),
            Bounds::new(34, 0, 67, 39),
            Bounds::new(68, 0, 99, 39),
        ]
    );
}

#[test]
fn vertical_split_reserves_outer_edges() {
    let bands = split(outermost(20, 31), Axis::Vertical, 3);
    // Every band gives up the right edge, not only the last one.
    assert_eq!(
        bands,
        vec![
            Bounds::new(0, 0, 19, 10),
            Bounds::new(0, 11, 19, 21),
            Bounds::new(0, 22, 19, 30),
        ]
    );
}

#[test]
fn nested_split_reaches_the_container_edges() {
    let area = SplitArea {
        x: 34,
        y: 0,
        width: 33,
        height: 39,
        nested: true,
    };
    let bands = split(area, Axis::Vertical, 2);
    assert_eq!(
        bands,
        vec![Bounds::new(34, 0, 67, 19), Bounds::new(34, 20, 67, 39)]
    );
}

#[test]
fn single_child_spans_whole_area() {
    let bands = split(outermost(80, 24), Axis::Horizontal, 1);
    assert_eq!(bands, vec![Bounds::new(0, 0, 79, 23)]);
}

fn long_span(b: &Bounds, axis: Axis) -> (i32, i32) {
    match axis {
        Axis::Horizontal => (b.x0, b.x1),
        Axis::Vertical => (b.y0, b.y1),
    }
}

fn short_span(b: &Bounds, axis: Axis) -> (i32, i32) {
    match axis {
        Axis::Horizontal => (b.y0, b.y1),
        Axis::Vertical => (b.x0, b.x1),
    }
}

fn case_strategy() -> impl Strategy<Value = (usize, i32, i32, i32, bool, bool)> {
    (1usize..8, any::<bool>(), any::<bool>()).prop_flat_map(|(n, vertical, nested)| {
        let min = (n * n) as i32;
        (
            Just(n),
            0i32..50,
            min..400,
            1i32..200,
            Just(vertical),
            Just(nested),
        )
    })
}

proptest! {
    #[test]
    fn bands_tile_the_long_axis_exactly_once(
        (n, origin, total, short, vertical, nested) in case_strategy()
    ) {
        let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
        let area = match axis {
            Axis::Horizontal => SplitArea { x: origin, y: 0, width: total, height: short, nested },
            Axis::Vertical => SplitArea { x: 0, y: origin, width: short, height: total, nested },
        };
        let bands = split(area, axis, n);
        prop_assert_eq!(bands.len(), n);

        // Inclusive spans: each band starts right after the previous band's far edge.
        let mut expected_start = origin;
        for b in &bands {
            let (start, end) = long_span(b, axis);
            prop_assert_eq!(start, expected_start);
            prop_assert!(end >= start);
            expected_start = end + 1;
        }
        let far_edge = if nested { origin + total } else { origin + total - 1 };
        prop_assert_eq!(expected_start - 1, far_edge);
    }

    #[test]
    fn bands_span_the_full_short_axis(
        (n, origin, total, short, vertical, nested) in case_strategy()
    ) {
        let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
        let area = match axis {
            Axis::Horizontal => SplitArea { x: origin, y: 0, width: total, height: short, nested },
            Axis::Vertical => SplitArea { x: 0, y: origin, width: short, height: total, nested },
        };
        let margin = if nested { 0 } else { 1 };
        for b in split(area, axis, n) {
            prop_assert_eq!(short_span(&b, axis), (0, short - margin));
        }
    }

    #[test]
    fn last_band_absorbs_the_remainder(n in 1usize..10, total in 100i32..1000) {
        let bands = split(outermost(total, 10), Axis::Horizontal, n);
        let band = total / n as i32;
        for b in &bands[..n - 1] {
            prop_assert_eq!(b.width(), band);
        }
        let last = bands[n - 1];
        prop_assert_eq!(last.width(), band + total % n as i32 - (n as i32 - 1) - 1);
    }
}
