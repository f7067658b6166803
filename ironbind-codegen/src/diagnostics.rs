//! Diagnostics collection for a generator run.
//!
//! The collector is the only state that spans classes within one
//! invocation: it is created at run start and drained at run end. Appends
//! go through a mutex so callers may emit classes from a thread pool of
//! their choice; all other emission state is per-class.

use parking_lot::Mutex;
use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Emission continues; reported for human review.
    Warning,
    /// The current class's emission was aborted. The run continues with
    /// the next class, but the overall exit status reflects failure.
    Fatal,
}

/// One diagnostic raised during emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Class being emitted when the diagnostic was raised, if any.
    pub class_name: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Warning => "warning",
            Severity::Fatal => "error",
        };
        match &self.class_name {
            Some(class) => write!(f, "{prefix}: class '{class}': {}", self.message),
            None => write!(f, "{prefix}: {}", self.message),
        }
    }
}

/// Thread-safe accumulator for warnings and fatal errors.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn warning(&self, class_name: Option<&str>, message: impl Into<String>) {
        self.push(Severity::Warning, class_name, message);
    }

    /// Records a fatal error.
    pub fn fatal(&self, class_name: Option<&str>, message: impl Into<String>) {
        self.push(Severity::Fatal, class_name, message);
    }

    fn push(&self, severity: Severity, class_name: Option<&str>, message: impl Into<String>) {
        self.entries.lock().push(Diagnostic {
            severity,
            class_name: class_name.map(str::to_string),
            message: message.into(),
        });
    }

    /// Returns true if any fatal error has been recorded.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|d| d.severity == Severity::Fatal)
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if no diagnostics have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns a copy of all recorded diagnostics in append order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }
}
