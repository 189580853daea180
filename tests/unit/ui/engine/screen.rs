use super::*;
use crate::core::KeyCode;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::widgets::WidgetId;

fn render(screen: &Screen) -> TestBackend {
    let area = screen.area();
    let mut backend = TestBackend::new(area.w, area.h);
    let mut painter = Painter::new();
    screen.paint(&mut painter);
    backend.draw(area, painter.cmds());
    backend
}

#[test]
fn set_region_reports_first_allocation_as_unknown() {
    let mut screen = Screen::new(20, 10);
    let first = screen.set_region("a", Bounds::new(0, 0, 5, 5));
    assert!(matches!(first, Err(EngineError::UnknownRegion(ref n)) if n == "a"));
    assert_eq!(screen.set_region("a", Bounds::new(1, 1, 6, 6)), Ok(()));
    assert_eq!(screen.region("a").unwrap().bounds(), Bounds::new(1, 1, 6, 6));
    assert_eq!(screen.region_names(), vec!["a".to_string()]);
}

#[test]
fn operations_on_missing_regions_fail() {
    let mut screen = Screen::new(20, 10);
    assert!(screen.write("nope", "x").is_err());
    assert!(screen.clear("nope").is_err());
    assert!(screen.set_current(Some("nope")).is_err());
    assert!(screen.delete_region("nope").is_err());
}

#[test]
fn write_accumulates_and_clear_resets() {
    let mut screen = Screen::new(20, 10);
    let _ = screen.set_region("a", Bounds::new(0, 0, 10, 5));
    screen.write("a", "one\n").unwrap();
    screen.write("a", "two\n").unwrap();
    assert_eq!(screen.region("a").unwrap().lines(), vec!["one", "two"]);
    screen.clear("a").unwrap();
    assert_eq!(screen.region("a").unwrap().text(), "");
}

#[test]
fn delete_region_drops_current_and_scoped_bindings() {
    let mut screen = Screen::new(20, 10);
    let _ = screen.set_region("a", Bounds::new(0, 0, 10, 5));
    let id = WidgetId::default();
    screen
        .bind(Some("a"), Key::simple(KeyCode::Char(' ')), Command::Toggle(id))
        .unwrap();
    screen.set_current(Some("a")).unwrap();
    assert_eq!(
        screen.resolve(Key::simple(KeyCode::Char(' '))),
        Some(Command::Toggle(id))
    );

    screen.delete_region("a").unwrap();
    assert_eq!(screen.current(), None);
    assert_eq!(screen.resolve(Key::simple(KeyCode::Char(' '))), None);
}

#[test]
fn scoped_bindings_win_over_global_ones_only_in_current_region() {
    let mut screen = Screen::new(20, 10);
    let _ = screen.set_region("a", Bounds::new(0, 0, 10, 5));
    let _ = screen.set_region("b", Bounds::new(11, 0, 19, 5));
    let tab = Key::simple(KeyCode::Tab);
    let id = WidgetId::default();
    screen.bind(None, tab, Command::FocusNext).unwrap();
    screen.bind(Some("a"), tab, Command::CursorDown(id)).unwrap();

    assert_eq!(screen.resolve(tab), Some(Command::FocusNext));
    screen.set_current(Some("a")).unwrap();
    assert_eq!(screen.resolve(tab), Some(Command::CursorDown(id)));
    screen.set_current(Some("b")).unwrap();
    assert_eq!(screen.resolve(tab), Some(Command::FocusNext));
}

#[test]
fn rebinding_a_key_replaces_the_command() {
    let mut screen = Screen::new(20, 10);
    let key = Key::ctrl(KeyCode::Char('c'));
    screen.bind(None, key, Command::FocusNext).unwrap();
    screen.bind(None, key, Command::Quit).unwrap();
    assert_eq!(screen.resolve(key), Some(Command::Quit));
    screen.unbind(None, key);
    assert_eq!(screen.resolve(key), None);
}

#[test]
fn paint_draws_frame_title_and_text_inside_the_border() {
    let mut screen = Screen::new(12, 5);
    let _ = screen.set_region("a", Bounds::new(0, 0, 11, 4));
    screen.set_frame("a", true, Some("T")).unwrap();
    screen.write("a", "hello\nworld\n").unwrap();

    let backend = render(&screen);
    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "┌");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, "T");
    assert_eq!(buf.cell(11, 4).unwrap().symbol, "┘");
    assert_eq!(buf.row_text(1), "│hello     │");
    assert_eq!(buf.row_text(2), "│world     │");
}

#[test]
fn paint_highlights_cursor_row_when_enabled() {
    let mut screen = Screen::new(10, 5);
    let _ = screen.set_region("a", Bounds::new(0, 0, 9, 4));
    screen.write("a", "a\nb\nc\n").unwrap();
    screen.set_cursor("a", 0, 1).unwrap();
    screen.set_highlight("a", true).unwrap();

    let backend = render(&screen);
    let buf = backend.buffer();
    let highlight = Palette::default().highlight;
    assert_eq!(buf.cell(1, 2).unwrap().style, highlight);
    assert_ne!(buf.cell(1, 1).unwrap().style, highlight);
}

#[test]
fn autoscroll_shows_the_tail_of_the_buffer() {
    let mut screen = Screen::new(10, 4);
    let _ = screen.set_region("a", Bounds::new(0, 0, 9, 3));
    screen.set_autoscroll("a", true).unwrap();
    screen.write("a", "1\n2\n3\n4\n5\n").unwrap();

    let backend = render(&screen);
    // Two visible rows inside the frame corners.
    assert_eq!(backend.buffer().row_text(1).trim(), "4");
    assert_eq!(backend.buffer().row_text(2).trim(), "5");
}

#[test]
fn later_regions_paint_over_earlier_ones() {
    let mut screen = Screen::new(10, 5);
    let _ = screen.set_region("base", Bounds::new(0, 0, 9, 4));
    screen.write("base", "xxxxxxxx\nxxxxxxxx\nxxxxxxxx\n").unwrap();
    let _ = screen.set_region("top", Bounds::new(2, 1, 7, 3));
    screen.set_frame("top", true, None).unwrap();

    let backend = render(&screen);
    assert_eq!(backend.buffer().cell(2, 1).unwrap().symbol, "┌");
    assert_eq!(backend.buffer().cell(4, 2).unwrap().symbol, " ");
    assert_eq!(backend.buffer().cell(1, 2).unwrap().symbol, "x");
}

#[test]
fn set_on_top_moves_region_to_the_end_of_the_stack() {
    let mut screen = Screen::new(10, 5);
    let _ = screen.set_region("a", Bounds::new(0, 0, 4, 4));
    let _ = screen.set_region("b", Bounds::new(5, 0, 9, 4));
    screen.set_on_top("a").unwrap();
    assert_eq!(screen.region_names(), vec!["b".to_string(), "a".to_string()]);
    assert!(screen.set_on_top("zz").is_err());
}
