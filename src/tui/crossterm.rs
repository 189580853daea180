use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Converts a crossterm event. Mouse events carry nothing the widget tree uses.
pub fn into_input_event(event: crossterm::event::Event) -> Option<InputEvent> {
    match event {
        crossterm::event::Event::Key(key) => Some(InputEvent::Key(into_key_event(key))),
        crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        crossterm::event::Event::FocusGained => Some(InputEvent::FocusGained),
        crossterm::event::Event::FocusLost => Some(InputEvent::FocusLost),
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::Mouse(_) => None,
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    KeyEvent {
        code,
        modifiers,
        kind: match event.kind {
            crossterm::event::KeyEventKind::Press => KeyEventKind::Press,
            crossterm::event::KeyEventKind::Release => KeyEventKind::Release,
            crossterm::event::KeyEventKind::Repeat => KeyEventKind::Repeat,
        },
    }
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    use crossterm::event::KeyModifiers as M;

    [
        (M::SHIFT, KeyModifiers::SHIFT),
        (M::CONTROL, KeyModifiers::CONTROL),
        (M::ALT, KeyModifiers::ALT),
        (M::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> KeyCode {
    use crossterm::event::KeyCode as C;

    match code {
        C::Char(ch) => KeyCode::Char(ch),
        C::Enter => KeyCode::Enter,
        C::Tab => KeyCode::Tab,
        C::BackTab => KeyCode::BackTab,
        C::Esc => KeyCode::Esc,
        C::Backspace => KeyCode::Backspace,
        C::Delete => KeyCode::Delete,
        C::Up => KeyCode::Up,
        C::Down => KeyCode::Down,
        C::Left => KeyCode::Left,
        C::Right => KeyCode::Right,
        C::Home => KeyCode::Home,
        C::End => KeyCode::End,
        C::PageUp => KeyCode::PageUp,
        C::PageDown => KeyCode::PageDown,
        C::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl+Space as NUL.
        C::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
