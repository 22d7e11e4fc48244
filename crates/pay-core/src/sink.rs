//! # Log Sinks
//!
//! Line-oriented destinations for transaction log lines. Loggers receive a
//! sink at construction instead of writing to the process console.
//!
//! Sinks never fail: write errors are dropped and poisoned locks are
//! recovered.

use chrono::NaiveTime;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// A destination for complete log lines (without trailing newline)
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Shared handle to a sink
pub type SharedSink = Arc<dyn LogSink>;

/// Writes to standard output, one `writeln!` per line under the stdout lock
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn shared() -> SharedSink {
        Arc::new(Self)
    }
}

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{line}");
    }
}

/// Any `Write` behind a mutex (files, buffered writers, sockets)
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = lock(&self.writer);
        let _ = writeln!(writer, "{line}");
        let _ = writer.flush();
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.lines).is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        lock(&self.lines).push(line.to_string());
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// ANSI foreground colors a gateway may paint its lines with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    Cyan,
    Magenta,
}

impl TermColor {
    fn ansi_code(&self) -> &'static str {
        match self {
            TermColor::Cyan => "\x1b[36m",
            TermColor::Magenta => "\x1b[35m",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Render `[Tag] HH:MM:SS - message`, optionally wrapped in a color
pub fn render_log_line(
    tag: &str,
    time: NaiveTime,
    message: &str,
    color: Option<TermColor>,
) -> String {
    let line = format!("[{}] {} - {}", tag, time.format("%H:%M:%S"), message);
    match color {
        Some(color) => format!("{}{}{}", color.ansi_code(), line, ANSI_RESET),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 5, 9).unwrap()
    }

    #[test]
    fn test_render_plain_line() {
        let line = render_log_line("PagSeguro", noon(), "hello", None);
        assert_eq!(line, "[PagSeguro] 12:05:09 - hello");
    }

    #[test]
    fn test_render_colored_line() {
        let line = render_log_line("Stripe", noon(), "hi", Some(TermColor::Magenta));
        assert_eq!(line, "\x1b[35m[Stripe] 12:05:09 - hi\x1b[0m");

        let line = render_log_line("MercadoPago", noon(), "", Some(TermColor::Cyan));
        assert_eq!(line, "\x1b[36m[MercadoPago] 12:05:09 - \x1b[0m");
    }

    #[test]
    fn test_memory_sink_captures_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line("one");
        sink.write_line("Mensagem em português");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines()[1], "Mensagem em português");
    }

    #[test]
    fn test_writer_sink_appends_newlines() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("a");
        sink.write_line("b");

        let bytes = sink.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "a\nb\n");
    }
}
