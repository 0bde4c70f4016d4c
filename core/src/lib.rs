//! Typed JSON-over-HTTP fetch helper.
//!
//! # Overview
//! Issues an HTTP request through an injected [`Transport`], validates the
//! response status against an accepted set (2xx by default), optionally
//! narrows the JSON body to a dot-delimited [`Keypath`], and decodes the
//! result into a caller-chosen `serde` type, delivering exactly one
//! success-or-error outcome through a completion callback.
//!
//! # Design
//! - The crate ships no network code: [`Transport`] describes the round
//!   trip and the host wires in any HTTP client. Integration tests run a
//!   thread-backed ureq transport against a local axum fixture server.
//! - Decoding rides on serde: any `DeserializeOwned` type is a valid
//!   target, and `serde_json` provides the generic tree used for keypath
//!   traversal and re-serialization of extracted sub-values.
//! - Completions are marshalled through an [`Executor`] so callers can pin
//!   delivery to a designated thread; the default runs inline on the
//!   transport's completion thread.
//! - All failures land in the closed [`FetchError`] enum; nothing is
//!   retried internally.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod keypath;
pub mod transport;

pub use error::FetchError;
pub use fetcher::{decode_reply, FetchHandle, FetchOptions, JsonFetcher};
pub use http::{HttpMethod, HttpRequest, TransportReply};
pub use keypath::Keypath;
pub use transport::{Executor, InlineExecutor, Transport, TransportCallback, TransportHandle};
