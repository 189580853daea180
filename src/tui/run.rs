//! Terminal main loop.

use super::crossterm::into_input_event;
use super::terminal_guard::{TerminalGuard, TerminationSignal};
use crate::core::event::{InputEvent, KeyEventKind};
use crate::settings::Settings;
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::core::painter::Painter;
use crate::ui::{Screen, Ui, UiError};
use std::sync::mpsc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Longest wait for input before queued handle tasks are applied.
    pub tick: Duration,
    /// How long a termination signal may wait for the loop before the process exits anyway.
    pub shutdown_grace: Duration,
    /// Applied right after the default bindings are installed.
    pub settings: Option<Settings>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            shutdown_grace: Duration::from_secs(2),
            settings: None,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Signal(TerminationSignal),
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Quit => 0,
            Exit::Signal(signal) => signal.exit_code(),
        }
    }
}

/// Takes over the terminal and drives `ui` until it quits or a termination signal arrives.
///
/// Frame errors are logged and the loop keeps going; only terminal I/O failures end it early.
pub fn run(ui: &mut Ui<Screen>, options: RunOptions) -> Result<Exit, UiError> {
    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signal_thread = {
        let handle = ui.handle();
        super::terminal_guard::install_termination_signals(
            guard.restorer(),
            options.shutdown_grace,
            move |signal| {
                let _ = signal_tx.send(signal);
                handle.quit();
            },
        )?
    };
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(std::io::stdout())?;
    let (width, height) = terminal.size()?;
    ui.engine_mut().resize(width, height);
    ui.start()?;
    if let Some(settings) = &options.settings {
        settings.apply(ui)?;
    }
    tracing::debug!(width, height, "terminal size");

    let mut painter = Painter::new();
    let exit = loop {
        ui.drain_tasks();
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            break Exit::Signal(signal);
        }
        if ui.quit_requested() {
            break Exit::Quit;
        }

        if ui.take_redraw() {
            if let Err(err) = ui.layout() {
                tracing::warn!(error = %err, "frame failed");
            }
            painter.clear();
            ui.engine().paint(&mut painter);
            terminal.draw(|backend, area| {
                backend.draw(area, painter.cmds());
                backend.set_cursor(None);
            })?;
        }

        if crossterm::event::poll(options.tick)? {
            if let Some(event) = into_input_event(crossterm::event::read()?) {
                dispatch(ui, event);
            }
        }
    };

    drop(terminal);
    guard.restorer().restore()?;
    tracing::info!(code = exit.code(), "ui stopped");
    Ok(exit)
}

/// Applies one terminal event to the session.
pub fn dispatch(ui: &mut Ui<Screen>, event: InputEvent) {
    match event {
        InputEvent::Key(key) if key.kind != KeyEventKind::Release => {
            ui.handle_key(key.into());
        }
        InputEvent::Resize(width, height) => {
            ui.engine_mut().resize(width, height);
            ui.request_redraw();
        }
        InputEvent::FocusGained => ui.request_redraw(),
        InputEvent::Key(_) | InputEvent::FocusLost | InputEvent::Paste(_) => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/run.rs"]
mod tests;
