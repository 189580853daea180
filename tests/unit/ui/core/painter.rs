use super::*;

#[test]
fn painter_collects_commands_in_order_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    let r = Rect::new(0, 0, 3, 3);
    p.fill_rect(r, Style::default());
    p.border(r, Style::default(), BorderKind::Plain);
    p.text_clipped(Pos::new(1, 1), "hi", Style::default(), r);
    p.style_rect(r.row(1), Style::default());
    assert_eq!(p.cmds().len(), 4);
    assert!(matches!(p.cmds()[0], PaintCmd::FillRect { .. }));
    assert!(matches!(p.cmds()[1], PaintCmd::Border { .. }));
    assert!(matches!(&p.cmds()[2], PaintCmd::Text { text, .. } if text == "hi"));

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn glyphs_skip_cells_left_of_clip_and_stop_at_right_edge() {
    let clip = Rect::new(2, 0, 3, 1);
    let cells: Vec<_> = glyphs(Pos::new(0, 0), "abcdefg", clip)
        .map(|(x, g, _)| (x, g))
        .collect();
    assert_eq!(cells, vec![(2, "c"), (3, "d"), (4, "e")]);
}

#[test]
fn glyphs_outside_clip_rows_produce_nothing() {
    let clip = Rect::new(0, 1, 5, 1);
    assert_eq!(glyphs(Pos::new(0, 0), "abc", clip).count(), 0);
    assert_eq!(glyphs(Pos::new(0, 1), "abc", Rect::default()).count(), 0);
}

#[test]
fn wide_glyph_at_edge_ends_the_line() {
    let clip = Rect::new(0, 0, 3, 1);
    let cells: Vec<_> = glyphs(Pos::new(0, 0), "a界b", clip).collect();
    assert_eq!(cells, vec![(0, "a", 1), (1, "界", 2)]);
    let cells: Vec<_> = glyphs(Pos::new(1, 0), "a界b", clip).collect();
    assert_eq!(cells, vec![(1, "a", 1)]);
}

#[test]
fn tiny_rects_have_no_border() {
    assert!(border_cells(Rect::new(0, 0, 1, 5), BorderKind::Plain).is_empty());
    let cells = border_cells(Rect::new(0, 0, 2, 2), BorderKind::Plain);
    assert_eq!(cells.len(), 4);
    assert!(cells.contains(&(1, 1, "┘")));
}
