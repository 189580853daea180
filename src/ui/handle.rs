use super::session::Ui;
use super::engine::{Engine, Screen};
use std::sync::mpsc;

pub(crate) type Task<E> = Box<dyn FnOnce(&mut Ui<E>) + Send>;

/// Cross-thread access to a session.
///
/// Nothing here touches widget state directly: every call enqueues work that the loop thread
/// applies between frames. Calls return `false` once the session is gone.
pub struct UiHandle<E: Engine = Screen> {
    tx: mpsc::Sender<Task<E>>,
}

impl<E: Engine> Clone for UiHandle<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Engine> UiHandle<E> {
    pub(crate) fn new(tx: mpsc::Sender<Task<E>>) -> Self {
        Self { tx }
    }

    /// Runs `f` on the loop thread, then schedules a redraw.
    pub fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut Ui<E>) + Send + 'static,
    {
        self.send(Box::new(move |ui: &mut Ui<E>| {
            f(ui);
            ui.request_redraw();
        }))
    }

    pub fn redraw(&self) -> bool {
        self.send(Box::new(|ui: &mut Ui<E>| ui.request_redraw()))
    }

    /// Asks the loop to stop after the current iteration.
    pub fn quit(&self) -> bool {
        self.send(Box::new(|ui: &mut Ui<E>| ui.quit()))
    }

    fn send(&self, task: Task<E>) -> bool {
        self.tx.send(task).is_ok()
    }
}

impl<E: Engine> std::fmt::Debug for UiHandle<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle").finish_non_exhaustive()
    }
}
