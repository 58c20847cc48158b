//! Request Types
//!
//! The protocol-native authentication request and its OAuth2 wire shape.

use serde::{Deserialize, Serialize};

/// Session identity reference carried in an authentication request.
///
/// Wraps the hex encoding of the session public key. Travels on the wire as
/// the OAuth2 `login_hint` parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Hex-encoded session public key.
    pub hex: String,
}

impl SessionIdentity {
    /// Create from a hex-encoded session public key.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }
}

/// Authentication request built by a relying party.
///
/// Immutable once built; `redirect_uri` always holds the normalized,
/// fully-parsed URL string, never raw input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticationRequest {
    /// Session identity the delegation will be issued to.
    pub session_identity: SessionIdentity,
    /// Normalized absolute redirect URL.
    pub redirect_uri: String,
    /// Opaque CSRF state, carried untouched.
    pub state: Option<String>,
    /// Space-delimited canister principal list (may be empty).
    pub scope: String,
}

/// OAuth2 authorization request wire shape.
///
/// Field names are the exact query-string keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2AuthorizationRequest {
    /// Always `token` in this profile.
    pub response_type: String,
    /// Hex-encoded session public key.
    pub login_hint: String,
    /// Redirect URL for the response leg.
    pub redirect_uri: String,
    /// Requested scope, absent when the request carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Opaque CSRF state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
