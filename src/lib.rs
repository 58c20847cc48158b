//! IC-ID OAuth2 Translation Module
//!
//! Bidirectional translation between the IC-ID identity-delegation protocol
//! and an OAuth2 wire format carried over HTTP redirect query strings.
//!
//! # Features
//!
//! - Authorization request / access token response field mapping
//! - Query string classification (request vs. response vs. unrecognized)
//! - Bearer token codec (delegation chain as hex-encoded JSON)
//! - Scope codec (space-delimited ledger principal list)
//! - Redirect URL building with absent-field elision
//!
//! # Example
//!
//! ```rust,ignore
//! use icid_oauth2::{authentication_request, build_authentication_request_url};
//! use icid_oauth2::{decode_redirect_url, ProtocolMessage};
//! use url::Url;
//!
//! // Relying party: build the IdP-bound authorization URL.
//! let request = authentication_request()
//!     .session_public_key_hex("deadbeef")
//!     .redirect_uri("https://rp.example/cb")
//!     .state("csrf-123")
//!     .add_scope("rdmx6-jaaaa-aaaaa-aaadq-cai")
//!     .build()?;
//!
//! let idp = Url::parse("https://idp.example/authorize")?;
//! let url = build_authentication_request_url(&idp, &request);
//!
//! // Identity provider: reconstruct the request from the redirect.
//! match decode_redirect_url(&url)? {
//!     Some(ProtocolMessage::Request(request)) => { /* issue a delegation */ }
//!     Some(ProtocolMessage::Response(_)) | None => { /* not for us */ }
//! }
//! ```
//!
//! # Architecture
//!
//! The module is organized into several sub-modules:
//!
//! - `types`: protocol-native and OAuth2 wire shape declarations
//! - `error`: error hierarchy for translation failures
//! - `core`: seam to the external principal identifier codec
//! - `codec`: the OAuth2 field mapper, query classifier, bearer token and
//!   scope codecs
//! - `redirect`: redirect URL building
//! - `builders`: fluent builder for authentication requests
//!
//! Every operation is a pure function from inputs to an output or a typed
//! failure; there is no I/O, no shared state, and nothing to retry.

pub mod builders;
pub mod codec;
pub mod core;
pub mod error;
pub mod redirect;
pub mod types;

// Re-export builders
pub use builders::{authentication_request, AuthenticationRequestBuilder};

// Re-export codecs
pub use codec::query::{decode_query_pairs, decode_redirect_url, decode_redirect_url_str};
pub use codec::scope::ScopeCodec;
pub use codec::{bearer, oauth2};

// Re-export errors
pub use error::{
    IcidError, IcidResult, IdentifierParseError, MalformedUrlError, ValidationError,
};

// Re-export the principal seam
pub use crate::core::principal::{MockPrincipal, MockPrincipalCodec, PrincipalCodec};

// Re-export redirect building
pub use redirect::{build_authentication_request_url, build_response_redirect_url};

// Re-export types
pub use types::{
    AuthenticationRequest, AuthenticationResponse, CanisterScope, Delegation,
    OAuth2AccessTokenResponse, OAuth2AuthorizationRequest, ParsedBearerToken, ParsedScopeString,
    ProtocolMessage, SessionIdentity, SignedDelegation, TokenType,
};
