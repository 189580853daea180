use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raw mode and alternate screen switching, abstracted so tests can observe it.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Run every step; report the first failure.
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        raw.and(screen)
    }
}

/// Puts the terminal back exactly once, from whichever of drop, signal thread or explicit call
/// gets there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }

    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    fn from_raw(sig: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match sig {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Spawns a thread that reports SIGINT/SIGTERM to `on_signal`.
///
/// When the process is still alive `grace` later, the terminal is restored from the signal
/// thread and the process exits with the signal's code.
#[cfg(unix)]
pub fn install_termination_signals<F>(
    restorer: TerminalRestorer,
    grace: std::time::Duration,
    on_signal: F,
) -> io::Result<std::thread::JoinHandle<()>>
where
    F: Fn(TerminationSignal) + Send + 'static,
{
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) {
            on_signal(signal);
            std::thread::sleep(grace);
            tracing::warn!(?signal, "loop did not stop in time, exiting");
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
