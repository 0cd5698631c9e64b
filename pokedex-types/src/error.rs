use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pokedex workspace.
///
/// Upstream failures are classified by retryability: only `UpstreamUnavailable`
/// is transient. The remaining variants describe caller input, broken
/// references inside upstream documents, and request deadlines.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PokedexError {
    /// The upstream could not be reached or answered with a server-side failure.
    #[error("upstream unavailable: {url}: {msg}")]
    UpstreamUnavailable {
        /// Resource URL that was requested.
        url: String,
        /// Human-readable cause (transport error or status line).
        msg: String,
    },

    /// The upstream answered with a 4xx-class status for the resource.
    #[error("upstream resource not found: {url}")]
    UpstreamNotFound {
        /// Resource URL that was requested.
        url: String,
    },

    /// The upstream body could not be parsed or decoded into the expected shape.
    #[error("malformed upstream document: {url}: {msg}")]
    UpstreamMalformed {
        /// Resource URL that was requested.
        url: String,
        /// Parser or decoder message.
        msg: String,
    },

    /// A reference URL is missing, empty, or does not end in a numeric id.
    #[error("invalid reference {reference:?}: {reason}")]
    InvalidReference {
        /// The offending reference as found in the upstream document.
        reference: String,
        /// Why the reference was rejected.
        reason: String,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Operation label for which the request timed out (e.g. "page").
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl PokedexError {
    /// Helper: build an `UpstreamUnavailable` error.
    pub fn unavailable(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `UpstreamNotFound` error for a resource URL.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::UpstreamNotFound { url: url.into() }
    }

    /// Helper: build an `UpstreamMalformed` error.
    pub fn malformed(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::UpstreamMalformed {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidReference` error.
    pub fn invalid_reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if a retry of the same upstream call may succeed.
    ///
    /// Only transport failures and 5xx-class answers qualify; not-found and
    /// malformed documents are deterministic.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }

    /// Returns true if this error originated from the upstream data source.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. }
                | Self::UpstreamNotFound { .. }
                | Self::UpstreamMalformed { .. }
        )
    }
}
