//! IC-ID Translation Error Types
//!
//! Error hierarchy for protocol translation failures.

use thiserror::Error;

/// Root error type for IC-ID protocol translation.
#[derive(Error, Debug)]
pub enum IcidError {
    #[error("Malformed URL: {0}")]
    MalformedUrl(#[from] MalformedUrlError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Identifier parse error: {0}")]
    IdentifierParse(#[from] IdentifierParseError),
}

impl IcidError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedUrl(_) => "ICID_URL",
            Self::Validation(_) => "ICID_VALIDATION",
            Self::IdentifierParse(_) => "ICID_IDENTIFIER",
        }
    }
}

/// A redirect URI that does not parse as an absolute URL.
#[derive(Error, Debug)]
#[error("not a valid absolute URL: {uri}")]
pub struct MalformedUrlError {
    /// The text that failed to parse.
    pub uri: String,
    /// Underlying parser failure.
    #[source]
    pub source: url::ParseError,
}

impl MalformedUrlError {
    /// Create from the offending text and the parser error.
    pub fn new(uri: impl Into<String>, source: url::ParseError) -> Self {
        Self {
            uri: uri.into(),
            source,
        }
    }
}

/// Bearer token or message shape validation error.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("publicKey must be a string")]
    PublicKeyNotString,

    #[error("delegations required")]
    DelegationsRequired,

    #[error("invalid hex encoding: {message}")]
    InvalidHex { message: String },

    #[error("token bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid token JSON: {message}")]
    InvalidJson { message: String },

    #[error("malformed delegation list: {message}")]
    MalformedDelegations { message: String },

    #[error("delegation chain is not JSON-serializable: {message}")]
    NotSerializable { message: String },

    #[error("missing required field: {field}")]
    MissingField { field: String },
}

/// A scope segment that is not a valid principal text.
///
/// Produced by [`PrincipalCodec`](crate::core::PrincipalCodec)
/// implementations and propagated unchanged through scope decoding.
#[derive(Error, Debug)]
#[error("invalid principal text {text:?}: {message}")]
pub struct IdentifierParseError {
    /// The text that failed to parse.
    pub text: String,
    /// Codec-supplied failure detail.
    pub message: String,
}

impl IdentifierParseError {
    /// Create from the offending text and a failure message.
    pub fn new(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            message: message.into(),
        }
    }
}

/// Result type for IC-ID translation operations.
pub type IcidResult<T> = Result<T, IcidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = IcidError::Validation(ValidationError::DelegationsRequired);
        assert_eq!(error.error_code(), "ICID_VALIDATION");

        let error = IcidError::IdentifierParse(IdentifierParseError::new("abc", "bad"));
        assert_eq!(error.error_code(), "ICID_IDENTIFIER");
    }

    #[test]
    fn test_validation_messages_are_stable() {
        assert_eq!(
            ValidationError::PublicKeyNotString.to_string(),
            "publicKey must be a string"
        );
        assert_eq!(
            ValidationError::DelegationsRequired.to_string(),
            "delegations required"
        );
    }

    #[test]
    fn test_malformed_url_display_carries_input() {
        let source = url::Url::parse("not-an-absolute-url").unwrap_err();
        let error = MalformedUrlError::new("not-an-absolute-url", source);
        assert!(error.to_string().contains("not-an-absolute-url"));
    }
}
