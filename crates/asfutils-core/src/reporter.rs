//! Out-of-band error reporting.
//!
//! Failures caught at the dispatch boundary are queued here instead of being
//! logged from inside the failing call path. A single drain task logs them in
//! submission order.

use tokio::sync::mpsc;
use tracing::error;

/// One queued failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Where the failure was caught, e.g. the command name.
    pub origin: String,
    pub message: String,
}

/// Cheap, cloneable sending half. Never blocks and never logs inline.
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    sender: mpsc::UnboundedSender<ErrorReport>,
}

/// Receiving half; run it once on the runtime.
#[derive(Debug)]
pub struct ReportDrain {
    receiver: mpsc::UnboundedReceiver<ErrorReport>,
}

impl ErrorReporter {
    /// Create a reporter and the drain that logs its reports.
    pub fn channel() -> (Self, ReportDrain) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, ReportDrain { receiver })
    }

    /// Queue a report. Dropped silently once the drain is gone.
    pub fn report(&self, origin: impl Into<String>, message: impl Into<String>) {
        let _ = self.sender.send(ErrorReport {
            origin: origin.into(),
            message: message.into(),
        });
    }
}

impl ReportDrain {
    /// Log reports until every reporter is dropped. Returns how many were logged.
    pub async fn run(mut self) -> usize {
        let mut logged = 0;
        while let Some(report) = self.receiver.recv().await {
            error!(origin = %report.origin, "{}", report.message);
            logged += 1;
        }
        logged
    }

    /// Take the next queued report without logging it.
    pub async fn next(&mut self) -> Option<ErrorReport> {
        self.receiver.recv().await
    }
}

/// Render an error with its whole `source()` chain.
pub fn diagnostic(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
