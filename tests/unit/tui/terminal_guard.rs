use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
    fail_restore: bool,
}

impl RecordingOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        if self.fail_restore {
            return Err(io::Error::new(io::ErrorKind::Other, "gone"));
        }
        Ok(())
    }
}

#[test]
fn dropping_the_guard_restores_once() {
    let ops = Arc::new(RecordingOps::default());
    let restorer = {
        let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        let restorer = guard.restorer();
        assert!(!restorer.is_restored());
        restorer
    };

    assert!(restorer.is_restored());
    assert_eq!(ops.calls(), ["setup", "restore"]);
}

#[test]
fn explicit_restore_wins_over_drop() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(ops.calls(), ["setup", "restore"]);
}

#[test]
fn failed_setup_yields_no_guard() {
    let ops = Arc::new(RecordingOps {
        fail_setup: true,
        ..RecordingOps::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(ops.calls(), ["setup"]);
}

#[test]
fn restore_error_is_reported_only_to_the_first_caller() {
    let ops = Arc::new(RecordingOps {
        fail_restore: true,
        ..RecordingOps::default()
    });
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    assert!(restorer.restore().is_err());
    assert!(restorer.restore().is_ok());
    drop(guard);
    assert_eq!(ops.calls(), ["setup", "restore"]);
}

#[cfg(unix)]
#[test]
fn raw_signal_numbers_map_to_exit_codes() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    assert_eq!(
        TerminationSignal::from_raw(SIGINT).map(TerminationSignal::exit_code),
        Some(130)
    );
    assert_eq!(
        TerminationSignal::from_raw(SIGTERM).map(TerminationSignal::exit_code),
        Some(143)
    );
    assert_eq!(TerminationSignal::from_raw(SIGHUP), None);
}
