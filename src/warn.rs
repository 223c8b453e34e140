//! # Warning Sinks
//!
//! Pluggable destination for non-fatal diagnostics emitted during KV-form
//! decoding and explicit string coercion.
//!
//! The sink travels as an explicit `&mut dyn WarningSink` argument rather
//! than process-wide state, so substituting a sink is just passing a
//! different argument and nothing needs restoring afterward. The codecs only
//! ever call [`WarningSink::warn`] and proceed deterministically regardless
//! of what the sink does with the message.
//!
//! Closures work directly as sinks:
//! ```rust
//! use authwire::kvform;
//!
//! let mut seen = Vec::new();
//! let pairs = kvform::decode("\n", &mut |msg: &str| seen.push(msg.to_string()));
//! assert!(pairs.is_empty());
//! assert_eq!(seen.len(), 1);
//! ```

/// Receiver for human-readable diagnostic messages.
///
/// Implementations must not panic under normal conditions; the codecs do not
/// guard against a panicking sink.
pub trait WarningSink {
    /// Accept one diagnostic message. The return value is ignored.
    fn warn(&mut self, message: &str);
}

impl<F: FnMut(&str)> WarningSink for F {
    fn warn(&mut self, message: &str) {
        self(message);
    }
}

/// Default sink: forwards every diagnostic to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "authwire", "{message}");
    }
}

/// Counts diagnostics and discards the messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    /// Number of warnings received so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reset the counter to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

impl WarningSink for CountingSink {
    fn warn(&mut self, _message: &str) {
        self.count += 1;
    }
}

/// Stores every diagnostic message in order of emission.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    messages: Vec<String>,
}

impl CollectingSink {
    /// The messages received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Remove and return the stored messages.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl WarningSink for CollectingSink {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
