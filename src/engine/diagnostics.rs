//! Side channel for engine diagnostic output.
//!
//! Engines write free-form diagnostic lines here instead of printing them.
//! The adapter decides where they go: dropped, logged, or captured.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Destination for diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl DiagnosticSink for DiscardSink {
    fn emit(&self, _line: &str) {}
}

/// Forwards lines to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::debug!(target: "graphql_http::engine", "{}", line);
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CaptureSink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Cheaply cloneable handle passed to the engine for each execution.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn discard() -> Self {
        Self::new(Arc::new(DiscardSink))
    }

    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    pub fn emit(&self, line: impl fmt::Display) {
        self.sink.emit(&line.to_string());
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::discard()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
