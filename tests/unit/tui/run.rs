use super::*;
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};

fn started() -> Ui<Screen> {
    let mut ui = Ui::headless(40, 10);
    let root = ui.add_horizontal();
    let a = ui.add_check_list(["one"]);
    let b = ui.add_radio_list(["A"]);
    ui.add_child(root, a);
    ui.add_child(root, b);
    ui.set_root(root);
    ui.start().unwrap();
    ui.layout().unwrap();
    ui
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

#[test]
fn resize_updates_screen_and_schedules_frame() {
    let mut ui = started();
    assert!(!ui.needs_redraw());
    dispatch(&mut ui, InputEvent::Resize(80, 24));
    assert_eq!(ui.engine().area().w, 80);
    assert_eq!(ui.engine().area().h, 24);
    assert!(ui.needs_redraw());
}

#[test]
fn tab_press_moves_focus() {
    let mut ui = started();
    let before = ui.focused();
    dispatch(&mut ui, press(KeyCode::Tab, KeyModifiers::NONE));
    assert_ne!(ui.focused(), before);
}

#[test]
fn shift_tab_from_the_terminal_moves_focus_back() {
    let mut ui = started();
    let chain = ui.focus_chain().to_vec();
    ui.focus(chain[0]);

    let shift_tab = crate::tui::crossterm::into_key_event(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::BackTab,
        crossterm::event::KeyModifiers::SHIFT,
    ));
    dispatch(&mut ui, InputEvent::Key(shift_tab));
    assert_eq!(ui.focused(), Some(chain[1]));

    dispatch(&mut ui, InputEvent::Key(shift_tab));
    assert_eq!(ui.focused(), Some(chain[0]));
}

#[test]
fn key_release_is_ignored() {
    let mut ui = started();
    let mut event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    event.kind = KeyEventKind::Release;
    dispatch(&mut ui, InputEvent::Key(event));
    assert!(!ui.quit_requested());

    dispatch(&mut ui, press(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(ui.quit_requested());
}

#[test]
fn paste_does_nothing() {
    let mut ui = started();
    dispatch(&mut ui, InputEvent::Paste("x".into()));
    assert!(!ui.needs_redraw());
    assert!(!ui.quit_requested());
}

#[test]
fn exit_codes_follow_the_signal() {
    assert_eq!(Exit::Quit.code(), 0);
    assert_eq!(Exit::Signal(TerminationSignal::SigInt).code(), 130);
    assert_eq!(Exit::Signal(TerminationSignal::SigTerm).code(), 143);
}
