//! Redirect URL Building
//!
//! Serializes protocol messages onto redirect URLs as query parameters.

use url::Url;

use crate::codec::oauth2;
use crate::types::{AuthenticationRequest, AuthenticationResponse};

/// Build the IdP-bound authorization URL for a request.
///
/// Starts from a copy of the identity provider URL and sets each wire field
/// as a query parameter. An absent field is omitted entirely; it is never
/// written as placeholder text.
pub fn build_authentication_request_url(
    identity_provider_url: &Url,
    request: &AuthenticationRequest,
) -> Url {
    let wire = oauth2::to_oauth2_request(request);
    let mut url = identity_provider_url.clone();

    set_query_param(&mut url, "response_type", Some(&wire.response_type));
    set_query_param(&mut url, "login_hint", Some(&wire.login_hint));
    set_query_param(&mut url, "redirect_uri", Some(&wire.redirect_uri));
    set_query_param(&mut url, "scope", wire.scope.as_deref());
    set_query_param(&mut url, "state", wire.state.as_deref());

    url
}

/// Build the RP-bound redirect URL for a response.
///
/// Starts from the request's redirect URI; query parameters already on it
/// survive. Each wire field is set when present and removed when absent.
pub fn build_response_redirect_url(
    response: &AuthenticationResponse,
    request_redirect_uri: &Url,
) -> Url {
    let wire = oauth2::to_oauth2(response);
    let mut url = request_redirect_uri.clone();
    let expires_in = wire.expires_in.to_string();

    set_query_param(&mut url, "access_token", Some(&wire.access_token));
    set_query_param(&mut url, "token_type", wire.token_type.as_deref());
    set_query_param(&mut url, "expires_in", Some(&expires_in));
    set_query_param(&mut url, "scope", wire.scope.as_deref());
    set_query_param(&mut url, "state", wire.state.as_deref());

    url
}

/// Set or remove a single query parameter, leaving all others in place.
fn set_query_param(url: &mut Url, key: &str, value: Option<&str>) {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SessionIdentity, TokenType};
    use std::collections::HashMap;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_request_url_carries_all_wire_fields() {
        let request = AuthenticationRequest {
            session_identity: SessionIdentity::from_hex("deadbeef"),
            redirect_uri: "https://rp.example/cb".to_string(),
            state: Some("xyz".to_string()),
            scope: "aaaa bbbb".to_string(),
        };
        let idp = Url::parse("https://idp.example/authorize").unwrap();

        let url = build_authentication_request_url(&idp, &request);
        let params = query_map(&url);

        assert_eq!(params.get("response_type").map(String::as_str), Some("token"));
        assert_eq!(params.get("login_hint").map(String::as_str), Some("deadbeef"));
        assert_eq!(
            params.get("redirect_uri").map(String::as_str),
            Some("https://rp.example/cb")
        );
        assert_eq!(params.get("scope").map(String::as_str), Some("aaaa bbbb"));
        assert_eq!(params.get("state").map(String::as_str), Some("xyz"));
    }

    #[test]
    fn test_request_url_omits_absent_state() {
        let request = AuthenticationRequest {
            session_identity: SessionIdentity::from_hex("deadbeef"),
            redirect_uri: "https://rp.example/cb".to_string(),
            state: None,
            scope: String::new(),
        };
        let idp = Url::parse("https://idp.example/authorize").unwrap();

        let url = build_authentication_request_url(&idp, &request);
        let params = query_map(&url);

        assert!(!params.contains_key("state"));
        assert!(!url.as_str().contains("undefined"));
    }

    #[test]
    fn test_request_url_overwrites_existing_params() {
        let request = AuthenticationRequest {
            session_identity: SessionIdentity::from_hex("deadbeef"),
            redirect_uri: "https://rp.example/cb".to_string(),
            state: None,
            scope: String::new(),
        };
        let idp = Url::parse("https://idp.example/authorize?login_hint=stale&keep=1").unwrap();

        let url = build_authentication_request_url(&idp, &request);
        let params = query_map(&url);

        assert_eq!(params.get("login_hint").map(String::as_str), Some("deadbeef"));
        assert_eq!(params.get("keep").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_response_url_keeps_existing_params_and_drops_absent_fields() {
        let response = AuthenticationResponse {
            access_token: "ab12".to_string(),
            token_type: TokenType::Bearer,
            expires_in: 3600,
            state: None,
            scope: None,
        };
        let redirect = Url::parse("https://rp.example/cb?foo=1").unwrap();

        let url = build_response_redirect_url(&response, &redirect);
        let params = query_map(&url);

        assert_eq!(params.get("foo").map(String::as_str), Some("1"));
        assert_eq!(params.get("access_token").map(String::as_str), Some("ab12"));
        assert_eq!(params.get("expires_in").map(String::as_str), Some("3600"));
        assert_eq!(params.get("token_type").map(String::as_str), Some("bearer"));
        assert!(!params.contains_key("state"));
        assert!(!params.contains_key("scope"));
    }

    #[test]
    fn test_response_url_removes_stale_params() {
        // A state param already on the redirect URI is removed when the
        // response carries no state.
        let response = AuthenticationResponse {
            access_token: "ab12".to_string(),
            token_type: TokenType::Bearer,
            expires_in: 60,
            state: None,
            scope: None,
        };
        let redirect = Url::parse("https://rp.example/cb?state=stale&foo=1").unwrap();

        let url = build_response_redirect_url(&response, &redirect);
        let params = query_map(&url);

        assert!(!params.contains_key("state"));
        assert_eq!(params.get("foo").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_set_query_param_clears_empty_query() {
        let mut url = Url::parse("https://rp.example/cb?only=1").unwrap();
        set_query_param(&mut url, "only", None);
        assert_eq!(url.query(), None);
        assert_eq!(url.as_str(), "https://rp.example/cb");
    }
}
