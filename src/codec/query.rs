//! Query String Classification
//!
//! Disambiguates the two message kinds sharing one redirect channel using
//! only field presence, then decodes into protocol-native form.

use url::Url;

use crate::codec::oauth2;
use crate::error::{IcidResult, MalformedUrlError};
use crate::types::{
    OAuth2AccessTokenResponse, OAuth2AuthorizationRequest, ProtocolMessage,
};

/// Known wire keys collected from a redirect query string.
///
/// Unknown keys are ignored; repeated keys keep the last value.
#[derive(Clone, Debug, Default)]
struct RawQueryParams {
    response_type: Option<String>,
    login_hint: Option<String>,
    redirect_uri: Option<String>,
    scope: Option<String>,
    state: Option<String>,
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<String>,
}

impl RawQueryParams {
    fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();

        for (key, value) in pairs {
            match key.as_ref() {
                "response_type" => raw.response_type = Some(value.into()),
                "login_hint" => raw.login_hint = Some(value.into()),
                "redirect_uri" => raw.redirect_uri = Some(value.into()),
                "scope" => raw.scope = Some(value.into()),
                "state" => raw.state = Some(value.into()),
                "access_token" => raw.access_token = Some(value.into()),
                "token_type" => raw.token_type = Some(value.into()),
                "expires_in" => raw.expires_in = Some(value.into()),
                _ => {}
            }
        }

        raw
    }
}

/// Decode the query string of a redirect URL.
pub fn decode_redirect_url(url: &Url) -> IcidResult<Option<ProtocolMessage>> {
    decode_query_pairs(url.query_pairs())
}

/// Decode the query string of a redirect URL given as text.
pub fn decode_redirect_url_str(url_str: &str) -> IcidResult<Option<ProtocolMessage>> {
    let url =
        Url::parse(url_str).map_err(|source| MalformedUrlError::new(url_str, source))?;
    decode_redirect_url(&url)
}

/// Classify raw query parameters as a protocol message.
///
/// `access_token` presence alone decides that the message is a response;
/// request fields on the same query string are ignored in that case. A
/// request needs both `login_hint` and `redirect_uri` present. Anything
/// else is unrecognized and yields `None`.
pub fn decode_query_pairs<I, K, V>(pairs: I) -> IcidResult<Option<ProtocolMessage>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let message = match RawQueryParams::from_pairs(pairs) {
        RawQueryParams {
            access_token: Some(access_token),
            token_type,
            expires_in,
            scope,
            state,
            ..
        } => {
            let response = OAuth2AccessTokenResponse {
                access_token,
                token_type,
                expires_in: parse_expires_in(expires_in.as_deref()),
                scope,
                state,
            };
            ProtocolMessage::Response(oauth2::from_oauth2_response(response))
        }
        RawQueryParams {
            login_hint: Some(login_hint),
            redirect_uri: Some(redirect_uri),
            response_type,
            scope,
            state,
            ..
        } => {
            let request = OAuth2AuthorizationRequest {
                response_type: response_type
                    .unwrap_or_else(|| oauth2::RESPONSE_TYPE_TOKEN.to_string()),
                login_hint,
                redirect_uri,
                scope,
                state,
            };
            ProtocolMessage::Request(oauth2::from_oauth2_request(request)?)
        }
        _ => return Ok(None),
    };

    tracing::debug!(kind = message.kind(), "classified redirect query string");
    Ok(Some(message))
}

/// `expires_in` travels as a decimal integer string; absent or unparseable
/// values decode to zero.
fn parse_expires_in(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}
