use super::*;

#[test]
fn uppercase_char_normalizes_to_shift() {
    let key = Key::simple(KeyCode::Char('Q'));
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    assert_eq!(key, Key::new(KeyCode::Char('q'), KeyModifiers::SHIFT));
}

#[test]
fn key_from_event_keeps_modifiers() {
    let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::ALT);
    let key: Key = event.into();
    assert_eq!(key, Key::alt(KeyCode::Tab));
    assert_ne!(key, Key::simple(KeyCode::Tab));
}

#[test]
fn back_tab_ignores_shift() {
    let from_terminal: Key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT).into();
    assert_eq!(from_terminal, Key::simple(KeyCode::BackTab));
    assert_eq!(
        Key::new(KeyCode::BackTab, KeyModifiers::SHIFT | KeyModifiers::ALT),
        Key::alt(KeyCode::BackTab)
    );
}

#[test]
fn modifiers_combine() {
    let mods = KeyModifiers::CONTROL | KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::ALT));
    assert!(!mods.contains(KeyModifiers::SHIFT));
    assert!(KeyModifiers::NONE.is_empty());
    assert_eq!(mods.without(KeyModifiers::ALT), KeyModifiers::CONTROL);
}

#[test]
fn input_event_accessors() {
    let ev = InputEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert!(ev.is_key());
    assert_eq!(ev.as_key().map(|k| k.code), Some(KeyCode::Enter));
    assert!(InputEvent::Resize(10, 10).as_key().is_none());
}
