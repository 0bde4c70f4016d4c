//! Transport and executor seams.
//!
//! # Design
//! The crate ships no network code. [`Transport`] describes one HTTP round
//! trip as "take a request, call me back with a reply", so any HTTP client
//! can be wired in (the integration tests use ureq on a background thread;
//! unit tests use an in-memory transport with canned replies).
//!
//! A call is constructed first and started separately: [`Transport::call`]
//! returns a [`TransportHandle`] and performs no I/O until
//! [`TransportHandle::start`]. The fetcher starts it immediately unless the
//! caller opted out.

use crate::http::{HttpRequest, TransportReply};

/// Continuation invoked exactly once when the round trip finishes, on
/// whichever thread the transport completes on.
pub type TransportCallback = Box<dyn FnOnce(TransportReply) + Send + 'static>;

/// One-shot HTTP round trip provider.
pub trait Transport {
    /// Prepare a call. No I/O happens until the returned handle is started.
    fn call(&self, request: HttpRequest, completion: TransportCallback) -> Box<dyn TransportHandle>;
}

/// Control over a prepared transport call.
pub trait TransportHandle: Send {
    /// Begin network I/O. Starting an already-started or cancelled call is
    /// a no-op, so the completion can never fire twice.
    fn start(&mut self);

    /// Discard a call that has not started yet; its completion will never
    /// fire. Cancelling after start is transport-specific and may be a
    /// no-op.
    fn cancel(&mut self);
}

/// Where completion callbacks run.
///
/// The fetcher routes every completion through its executor regardless of
/// which thread the transport finished on, so callers can pin delivery to a
/// designated context (a UI event loop, a test channel, ...).
pub trait Executor: Send + Sync {
    fn execute(&self, job: Box<dyn FnOnce() + Send>);
}

/// Default executor: runs the completion immediately on the thread the
/// transport completed on.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    fn execute(&self, job: Box<dyn FnOnce() + Send>) {
        job();
    }
}
