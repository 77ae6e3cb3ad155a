use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Mutex;

/// Shows a press message to the user
pub trait Notifier: Send + Sync {
    /// Deliver `message`
    fn notify(&self, message: &str);
}

/// Writes messages to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Writes each message as an alert line to a writer
pub struct AlertNotifier<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> AlertNotifier<W> {
    /// Alert to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl AlertNotifier<io::Stderr> {
    /// Alert to stderr
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Notifier for AlertNotifier<W> {
    fn notify(&self, message: &str) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "[!] {message}").and_then(|_| writer.flush()) {
            log::warn!("failed to show alert: {e}");
        }
    }
}

/// Which notifier the default press handler uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    /// Interactive alert on stderr
    Alert,
    /// `log` facade
    #[default]
    Log,
}

impl NotifierKind {
    /// Construct the selected notifier
    pub fn build(self) -> Box<dyn Notifier> {
        match self {
            NotifierKind::Alert => Box::new(AlertNotifier::stderr()),
            NotifierKind::Log => Box::new(LogNotifier),
        }
    }
}
