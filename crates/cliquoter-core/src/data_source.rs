//! Quote source trait and request/error types.
//!
//! A quote source answers exactly one question: given a resolved symbol,
//! what raw field record describes that security right now. The record's
//! key set is provider-defined and deliberately unmodeled — see
//! [`QuoteRecord`](crate::QuoteRecord).

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{QuoteRecord, Symbol};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    Internal,
}

/// Structured source error surfaced to the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Request payload for an info lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRequest {
    pub symbol: Symbol,
}

impl InfoRequest {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

/// Source adapter contract.
///
/// Implementations must be `Send + Sync`; the future is boxed so the trait
/// stays object-safe and the CLI can hold a `&dyn QuoteSource`.
pub trait QuoteSource: Send + Sync {
    /// Fetches the raw field record describing a security.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the upstream call fails or the response
    /// cannot be parsed. No retry is attempted at any layer.
    fn info<'a>(
        &'a self,
        req: InfoRequest,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteRecord, SourceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_appends_stable_code() {
        let error = SourceError::unavailable("yahoo upstream returned status 502");
        assert_eq!(
            error.to_string(),
            "yahoo upstream returned status 502 (source.unavailable)"
        );
        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    }

    #[test]
    fn each_kind_maps_to_a_distinct_code() {
        assert_eq!(SourceError::unavailable("x").code(), "source.unavailable");
        assert_eq!(
            SourceError::invalid_request("x").code(),
            "source.invalid_request"
        );
        assert_eq!(SourceError::internal("x").code(), "source.internal");
    }
}
