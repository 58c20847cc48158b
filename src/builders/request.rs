//! Request Builder
//!
//! Fluent builder for authentication requests.

use crate::codec::oauth2::normalize_redirect_uri;
use crate::error::{IcidResult, ValidationError};
use crate::types::{AuthenticationRequest, SessionIdentity};

/// Authentication request builder.
///
/// Validates required fields and normalizes the redirect URI at build time,
/// so every [`AuthenticationRequest`] it produces is well-formed.
#[derive(Clone, Debug, Default)]
pub struct AuthenticationRequestBuilder {
    session_public_key_hex: Option<String>,
    redirect_uri: Option<String>,
    state: Option<String>,
    scopes: Vec<String>,
}

impl AuthenticationRequestBuilder {
    /// Create new request builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hex-encoded session public key (becomes `login_hint`).
    pub fn session_public_key_hex(mut self, hex: impl Into<String>) -> Self {
        self.session_public_key_hex = Some(hex.into());
        self
    }

    /// Set the redirect URI; validated and normalized at build time.
    pub fn redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }

    /// Set the opaque CSRF state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Append one canister principal text to the scope.
    pub fn add_scope(mut self, principal_text: impl Into<String>) -> Self {
        self.scopes.push(principal_text.into());
        self
    }

    /// Build the request.
    pub fn build(self) -> IcidResult<AuthenticationRequest> {
        let hex = self.session_public_key_hex.ok_or_else(|| {
            ValidationError::MissingField {
                field: "session_public_key_hex".to_string(),
            }
        })?;
        let raw_uri = self.redirect_uri.ok_or_else(|| ValidationError::MissingField {
            field: "redirect_uri".to_string(),
        })?;
        let redirect_uri = normalize_redirect_uri(&raw_uri)?;

        Ok(AuthenticationRequest {
            session_identity: SessionIdentity::from_hex(hex),
            redirect_uri,
            state: self.state,
            scope: self.scopes.join(" "),
        })
    }
}

/// Create a new authentication request builder.
pub fn authentication_request() -> AuthenticationRequestBuilder {
    AuthenticationRequestBuilder::new()
}
