//! The fetch pipeline: request out, typed value (or one error) back.
//!
//! # Design
//! `JsonFetcher` holds only a transport and an executor and carries no state
//! between calls. The decode work is a pure function over the transport's
//! reply ([`decode_reply`]), run inside the transport completion and then
//! marshalled through the executor, so the whole pipeline is testable
//! without any network.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::http::{HttpRequest, TransportReply};
use crate::keypath::Keypath;
use crate::transport::{Executor, InlineExecutor, Transport, TransportHandle};

/// Per-call knobs: accepted status set, keypath, auto-start.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    accepted: Option<Vec<u16>>,
    keypath: Option<Keypath>,
    auto_start: bool,
}

impl Default for FetchOptions {
    /// Accept 2xx, decode the whole body, start immediately.
    fn default() -> Self {
        Self {
            accepted: Some((200..300).collect()),
            keypath: None,
            auto_start: true,
        }
    }
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted status set.
    pub fn accept(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.accepted = Some(statuses.into_iter().collect());
        self
    }

    /// Skip status validation entirely.
    pub fn accept_any_status(mut self) -> Self {
        self.accepted = None;
        self
    }

    /// Decode only the sub-value at `path` instead of the whole body.
    pub fn keypath(mut self, path: impl Into<Keypath>) -> Self {
        self.keypath = Some(path.into());
        self
    }

    /// Build the call without starting it; start later via
    /// [`FetchHandle::start`].
    pub fn manual_start(mut self) -> Self {
        self.auto_start = false;
        self
    }
}

/// Handle to a prepared or in-flight fetch. Dropping it does not cancel the
/// call.
pub struct FetchHandle {
    inner: Box<dyn TransportHandle>,
}

impl FetchHandle {
    /// Start a fetch built with [`FetchOptions::manual_start`]. No-op if
    /// already started.
    pub fn start(&mut self) {
        self.inner.start();
    }

    /// Discard a not-yet-started fetch; its completion will never fire.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}

/// Stateless fetch-and-decode front end over an injected transport.
pub struct JsonFetcher<T> {
    transport: T,
    executor: Arc<dyn Executor>,
}

impl<T: Transport> JsonFetcher<T> {
    /// Fetcher delivering completions inline on the transport's thread.
    pub fn new(transport: T) -> Self {
        Self::with_executor(transport, Arc::new(InlineExecutor))
    }

    /// Fetcher delivering every completion through `executor`, regardless
    /// of which thread the transport finishes on.
    pub fn with_executor(transport: T, executor: Arc<dyn Executor>) -> Self {
        Self { transport, executor }
    }

    /// Issue `request` and decode the response into `D` per `options`,
    /// reporting exactly one `Result` to `completion`.
    ///
    /// A bare `&str` address works as the request and means "GET as JSON".
    pub fn fetch<D, F>(
        &self,
        request: impl Into<HttpRequest>,
        options: FetchOptions,
        completion: F,
    ) -> FetchHandle
    where
        D: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<D, FetchError>) + Send + 'static,
    {
        let FetchOptions { accepted, keypath, auto_start } = options;
        let executor = Arc::clone(&self.executor);
        let callback = Box::new(move |reply: TransportReply| {
            let result = decode_reply::<D>(reply, accepted.as_deref(), keypath.as_ref());
            executor.execute(Box::new(move || completion(result)));
        });

        let mut inner = self.transport.call(request.into(), callback);
        if auto_start {
            inner.start();
        }
        FetchHandle { inner }
    }
}

/// Run the decode pipeline over a completed transport reply.
///
/// Check order is fixed: transport failure first, then status validation
/// (before any body processing), then body presence, then parse / keypath
/// traversal / typed decode. Exactly one `Ok` or one error comes out.
pub fn decode_reply<D: DeserializeOwned>(
    reply: TransportReply,
    accepted: Option<&[u16]>,
    keypath: Option<&Keypath>,
) -> Result<D, FetchError> {
    if let Some(failure) = reply.failure {
        return Err(FetchError::Transport(failure));
    }

    // An empty accepted set means "validate nothing", same as an absent one.
    if let (Some(status), Some(accepted)) = (reply.status, accepted.filter(|a| !a.is_empty())) {
        if !accepted.contains(&status) {
            return Err(FetchError::Status {
                status,
                accepted: accepted.to_vec(),
                body: reply.body,
                transport: None,
            });
        }
    }

    let body = match reply.body {
        Some(body) if !body.is_empty() => body,
        _ => return Err(FetchError::EmptyBody),
    };

    let Some(keypath) = keypath else {
        return serde_json::from_slice(&body).map_err(|e| FetchError::Decoding(e.to_string()));
    };

    let root: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| FetchError::JsonParse(e.to_string()))?;

    let Some(sub) = keypath.extract(&root) else {
        return Err(FetchError::Keypath(keypath.as_str().to_string()));
    };

    // Serializing a plain `Value` back to bytes cannot realistically fail;
    // the error arm only keeps the pipeline free of panics.
    let sub_bytes = serde_json::to_vec(sub).map_err(|e| FetchError::JsonParse(e.to_string()))?;
    serde_json::from_slice(&sub_bytes).map_err(|e| FetchError::Decoding(e.to_string()))
}
