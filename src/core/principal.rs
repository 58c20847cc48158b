//! Principal Text Codec
//!
//! Seam for the external ledger identifier codec.

use std::collections::HashSet;

use crate::error::IdentifierParseError;

/// Principal text codec interface (for dependency injection).
///
/// Principals are opaque to this crate. Construction, canonical text rules,
/// and validation all belong to the ledger-side identifier subsystem; this
/// trait only carries text in and canonical text out.
pub trait PrincipalCodec: Send + Sync {
    /// Opaque identifier type.
    type Principal: Clone + PartialEq + std::fmt::Debug;

    /// Parse canonical text into an identifier.
    ///
    /// Fails with [`IdentifierParseError`] on malformed text.
    fn parse(&self, text: &str) -> Result<Self::Principal, IdentifierParseError>;

    /// Canonical text form of an identifier.
    fn to_text(&self, principal: &Self::Principal) -> String;
}

/// Mock principal codec for testing.
///
/// Parses exactly the texts registered up front; everything else fails.
#[derive(Clone, Debug, Default)]
pub struct MockPrincipalCodec {
    known: HashSet<String>,
}

impl MockPrincipalCodec {
    /// Create an empty mock codec (every parse fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock codec that accepts the given texts.
    pub fn with_principals<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Register another text that parses successfully.
    pub fn add_principal(&mut self, text: impl Into<String>) -> &mut Self {
        self.known.insert(text.into());
        self
    }
}

/// Principal type produced by [`MockPrincipalCodec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockPrincipal(String);

impl MockPrincipal {
    /// Canonical text of the mock principal.
    pub fn as_text(&self) -> &str {
        &self.0
    }
}

impl PrincipalCodec for MockPrincipalCodec {
    type Principal = MockPrincipal;

    fn parse(&self, text: &str) -> Result<MockPrincipal, IdentifierParseError> {
        if self.known.contains(text) {
            Ok(MockPrincipal(text.to_string()))
        } else {
            Err(IdentifierParseError::new(text, "unknown principal text"))
        }
    }

    fn to_text(&self, principal: &MockPrincipal) -> String {
        principal.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_parse_known_text() {
        let codec = MockPrincipalCodec::with_principals(["rdmx6-jaaaa-aaaaa-aaadq-cai"]);
        let principal = codec.parse("rdmx6-jaaaa-aaaaa-aaadq-cai").unwrap();
        assert_eq!(principal.as_text(), "rdmx6-jaaaa-aaaaa-aaadq-cai");
        assert_eq!(codec.to_text(&principal), "rdmx6-jaaaa-aaaaa-aaadq-cai");
    }

    #[test]
    fn test_mock_parse_unknown_text_fails() {
        let codec = MockPrincipalCodec::new();
        let error = codec.parse("not-a-principal").unwrap_err();
        assert_eq!(error.text, "not-a-principal");
    }

    #[test]
    fn test_add_principal() {
        let mut codec = MockPrincipalCodec::new();
        codec.add_principal("aaaa");
        assert!(codec.parse("aaaa").is_ok());
    }
}
