//! Response Types
//!
//! The protocol-native authentication response and its OAuth2 wire shape.

use serde::{Deserialize, Serialize};

/// Token type literal.
///
/// Only `bearer` exists in this protocol; a missing wire `token_type`
/// decodes to it as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Bearer token.
    #[default]
    Bearer,
}

impl TokenType {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
        }
    }
}

/// Authentication response issued by an identity provider.
///
/// `access_token` carries the hex-encoded delegation chain produced by the
/// bearer token codec.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationResponse {
    /// Encoded bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: TokenType,
    /// Advisory lifetime in seconds.
    pub expires_in: u64,
    /// Opaque CSRF state, mirrored from the request.
    pub state: Option<String>,
    /// Granted scope, when the provider echoes it.
    pub scope: Option<String>,
}

impl std::fmt::Debug for AuthenticationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("state", &self.state)
            .field("scope", &self.scope)
            .finish()
    }
}

/// OAuth2 access token response wire shape.
///
/// Field names are the exact query-string keys; `expires_in` travels as a
/// decimal integer string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2AccessTokenResponse {
    /// Encoded bearer token.
    pub access_token: String,
    /// Token type, absent when the provider omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    pub expires_in: u64,
    /// Granted scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Opaque CSRF state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
