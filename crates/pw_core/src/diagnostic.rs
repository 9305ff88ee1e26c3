//! Verbosity-gated diagnostic sink.
//!
//! Grounded in `original_source/code/logger.hpp`'s `LOGGER` class, which
//! replaces `std::cout` and only prints when a static `verboseMode` flag is
//! set. Per the specification's design notes we thread a sink through the
//! call chain instead of relying on a process-global, so callers (and
//! tests) control capture independently.

/// Receives human-readable progress/diagnostic messages.
///
/// Row and binding-position references in messages are 1-based, per the
/// specification; this trait does not interpret message content, it only
/// decides whether/where a message is recorded.
pub trait Diagnostic {
    fn emit(&mut self, message: &str);
}

/// Discards every message. The default sink when verbosity is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnostic;

impl Diagnostic for NullDiagnostic {
    fn emit(&mut self, _message: &str) {}
}

/// Buffers messages in order, for test capture.
#[derive(Clone, Debug, Default)]
pub struct CollectingDiagnostic {
    pub messages: Vec<String>,
}

impl Diagnostic for CollectingDiagnostic {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl CollectingDiagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

/// Writes every message to stderr, prefixed with a fixed tag. Intended for
/// `--verbose` CLI use; `pw_cli` selects between this and [`NullDiagnostic`]
/// based on the `-v`/`--verbose` flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrDiagnostic;

impl Diagnostic for StderrDiagnostic {
    fn emit(&mut self, message: &str) {
        eprintln!("pw: {message}");
    }
}
