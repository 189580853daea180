use super::*;
use crate::core::Key;

fn key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Key {
    into_key_event(crossterm::event::KeyEvent::new(code, mods)).into()
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn ctrl_c_matches_quit_binding_key() {
    assert_eq!(
        key(
            crossterm::event::KeyCode::Char('c'),
            crossterm::event::KeyModifiers::CONTROL
        ),
        Key::ctrl(KeyCode::Char('c'))
    );
}

#[test]
fn alt_tab_and_back_tab_convert() {
    assert_eq!(
        key(
            crossterm::event::KeyCode::Tab,
            crossterm::event::KeyModifiers::ALT
        ),
        Key::alt(KeyCode::Tab)
    );
    assert_eq!(
        key(
            crossterm::event::KeyCode::BackTab,
            crossterm::event::KeyModifiers::SHIFT
        ),
        Key::simple(KeyCode::BackTab)
    );
}

#[test]
fn mouse_events_are_dropped() {
    let mouse = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Moved,
        column: 1,
        row: 1,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });
    assert_eq!(into_input_event(mouse), None);
    assert_eq!(
        into_input_event(crossterm::event::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
