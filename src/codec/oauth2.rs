//! OAuth2 Field Mapping
//!
//! Lossless renaming translation between protocol-native messages and
//! OAuth2 wire shapes, with explicit default-filling.

use url::Url;

use crate::error::MalformedUrlError;
use crate::types::{
    AuthenticationRequest, AuthenticationResponse, OAuth2AccessTokenResponse,
    OAuth2AuthorizationRequest, SessionIdentity, TokenType,
};

/// `response_type` carried by every authorization request in this profile.
pub const RESPONSE_TYPE_TOKEN: &str = "token";

/// Translate a native response into its wire shape.
///
/// Pure rename; `state` and `scope` pass through, including when absent.
pub fn to_oauth2(response: &AuthenticationResponse) -> OAuth2AccessTokenResponse {
    OAuth2AccessTokenResponse {
        access_token: response.access_token.clone(),
        token_type: Some(response.token_type.as_str().to_string()),
        expires_in: response.expires_in,
        scope: response.scope.clone(),
        state: response.state.clone(),
    }
}

/// Translate a wire response into its native shape.
///
/// A missing or empty `token_type` defaults to `bearer`. Any other value is
/// coerced to `bearer` as well, since no other token type exists in this
/// protocol; the coercion is logged.
pub fn from_oauth2_response(response: OAuth2AccessTokenResponse) -> AuthenticationResponse {
    match response.token_type.as_deref() {
        None | Some("") | Some("bearer") => {}
        Some(other) => {
            tracing::debug!(token_type = other, "coercing non-bearer token_type");
        }
    }

    AuthenticationResponse {
        access_token: response.access_token,
        token_type: TokenType::Bearer,
        expires_in: response.expires_in,
        state: response.state,
        scope: response.scope,
    }
}

/// Translate a native request into its wire shape.
///
/// `redirect_uri` is already normalized on the native side and passes
/// through verbatim.
pub fn to_oauth2_request(request: &AuthenticationRequest) -> OAuth2AuthorizationRequest {
    OAuth2AuthorizationRequest {
        response_type: RESPONSE_TYPE_TOKEN.to_string(),
        login_hint: request.session_identity.hex.clone(),
        redirect_uri: request.redirect_uri.clone(),
        scope: Some(request.scope.clone()),
        state: request.state.clone(),
    }
}

/// Translate a wire request into its native shape.
///
/// `redirect_uri` must parse as an absolute URL and is stored re-serialized.
/// A missing `scope` becomes the empty string.
pub fn from_oauth2_request(
    request: OAuth2AuthorizationRequest,
) -> Result<AuthenticationRequest, MalformedUrlError> {
    let redirect_uri = normalize_redirect_uri(&request.redirect_uri)?;

    Ok(AuthenticationRequest {
        session_identity: SessionIdentity::from_hex(request.login_hint),
        redirect_uri,
        state: request.state,
        scope: request.scope.unwrap_or_default(),
    })
}

/// Parse a redirect URI as an absolute URL and re-serialize it.
pub fn normalize_redirect_uri(uri: &str) -> Result<String, MalformedUrlError> {
    let parsed = Url::parse(uri).map_err(|source| MalformedUrlError::new(uri, source))?;
    Ok(parsed.to_string())
}
