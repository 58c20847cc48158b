//! Protocol Messages
//!
//! Tagged union of the two message kinds sharing the redirect channel.

use crate::types::{AuthenticationRequest, AuthenticationResponse};

/// A classified protocol message decoded from a redirect query string.
///
/// Classification lives in [`codec::query`](crate::codec::query); an
/// unrecognizable query string yields `None` there rather than a variant
/// here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolMessage {
    /// RP-to-IdP authentication request.
    Request(AuthenticationRequest),
    /// IdP-to-RP authentication response.
    Response(AuthenticationResponse),
}

impl ProtocolMessage {
    /// Message kind label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "authentication_request",
            Self::Response(_) => "authentication_response",
        }
    }
}
