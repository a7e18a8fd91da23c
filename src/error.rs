//! Normalized API errors surfaced to views and the auth bootstrap.
//!
//! DESIGN
//! ======
//! Every failure of a GraphQL call lands in one of two shapes: an application
//! error reported by the server inside a response body, or a network error
//! where no usable response arrived. Both carry the originating operation name
//! so log lines can be correlated with the call that produced them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use crate::net::graphql::{ErrorLocation, PathSegment};

/// Why a request produced no usable GraphQL response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// DNS, TLS, CORS or connection failure.
    Unreachable,
    /// The request was aborted after the configured timeout.
    Timeout,
    /// Non-success HTTP status without a GraphQL error body.
    Http(u16),
    /// The request could not be serialized.
    Encode,
    /// The response body was not a GraphQL response of the expected shape.
    Decode,
    /// No browser transport is available (native builds and tests).
    Unavailable,
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => f.write_str("unreachable"),
            Self::Timeout => f.write_str("timeout"),
            Self::Http(status) => write!(f, "http {status}"),
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("[GraphQL error] {operation}: {message}")]
    Graphql {
        operation: String,
        message: String,
        locations: Vec<ErrorLocation>,
        path: Vec<PathSegment>,
    },
    #[error("[Network error] {operation} ({kind}): {message}")]
    Network {
        operation: String,
        kind: NetworkErrorKind,
        message: String,
    },
}

impl ApiError {
    pub fn network(operation: &str, kind: NetworkErrorKind, message: impl Into<String>) -> Self {
        Self::Network {
            operation: operation.to_owned(),
            kind,
            message: message.into(),
        }
    }

    /// Name of the operation that triggered the error.
    pub fn operation(&self) -> &str {
        match self {
            Self::Graphql { operation, .. } | Self::Network { operation, .. } => operation,
        }
    }

    /// Human-readable message without the classification prefix, suitable for
    /// inline alerts.
    pub fn message(&self) -> &str {
        match self {
            Self::Graphql { message, .. } | Self::Network { message, .. } => message,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Network {
                kind: NetworkErrorKind::Timeout,
                ..
            }
        )
    }

    /// Write the error to the log with its operation context.
    pub(crate) fn log(&self) {
        match self {
            Self::Graphql {
                operation,
                message,
                locations,
                path,
            } => log::error!(
                "[GraphQL error]: operation={operation} message={message} locations={locations:?} path={path:?}"
            ),
            Self::Network {
                operation,
                kind,
                message,
            } => log::error!("[Network error]: operation={operation} kind={kind} message={message}"),
        }
    }
}
