//! Tracing setup: a daily log file, optionally teed into a bounded in-app tail.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "tuitree.log";
const DEFAULT_FILTER: &str = "tuitree=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    tail: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &std::path::Path {
        &self.log_dir
    }

    /// The tail receiver, when installed with [`init_with_tail`].
    pub fn take_tail(&mut self) -> Option<Receiver<String>> {
        self.tail.take()
    }
}

/// Buffers one formatted event and hands its lines to the tail on drop. Lines that do not fit
/// in the channel are dropped.
struct TailWriter {
    buf: Vec<u8>,
    tx: SyncSender<String>,
}

impl TailWriter {
    fn new(tx: SyncSender<String>) -> Self {
        Self {
            buf: Vec::with_capacity(256),
            tx,
        }
    }
}

impl Write for TailWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for TailWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        for line in text.lines() {
            match self.tx.try_send(line.to_string()) {
                Ok(()) => {}
                Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => break,
            }
        }
    }
}

#[derive(Clone)]
struct LogMakeWriter {
    file: NonBlocking,
    tail: Option<SyncSender<String>>,
}

struct LogWriter {
    file: NonBlocking,
    tail: Option<TailWriter>,
}

impl<'a> MakeWriter<'a> for LogMakeWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.make_writer(),
            tail: self.tail.clone().map(TailWriter::new),
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        if let Some(tail) = &mut self.tail {
            let _ = tail.write_all(&buf[..n]);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Installs the global subscriber writing to a daily file in `dir` (default
/// `$TMP/tuitree/logs`). Returns `None` when the directory cannot be created or a subscriber is
/// already set.
pub fn init(dir: Option<PathBuf>) -> Option<LoggingGuard> {
    install(dir, None)
}

/// Like [`init`], and also keeps up to `capacity` unread lines for [`LoggingGuard::take_tail`].
/// Newer lines are dropped while the tail is full.
pub fn init_with_tail(dir: Option<PathBuf>, capacity: usize) -> Option<LoggingGuard> {
    install(dir, Some(mpsc::sync_channel(capacity.max(1))))
}

fn install(
    dir: Option<PathBuf>,
    tail: Option<(SyncSender<String>, Receiver<String>)>,
) -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir(dir.unwrap_or_else(default_log_dir)).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let (tail_tx, tail_rx) = tail.unzip();
    let writer = LogMakeWriter {
        file: non_blocking,
        tail: tail_tx,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        tail: tail_rx,
    })
}

pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("tuitree").join("logs")
}

fn ensure_log_dir(dir: PathBuf) -> io::Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
