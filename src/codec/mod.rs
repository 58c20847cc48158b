//! Protocol Codecs
//!
//! Translation between protocol-native and wire representations.

pub mod bearer;
pub mod oauth2;
pub mod query;
pub mod scope;

pub use query::{decode_query_pairs, decode_redirect_url, decode_redirect_url_str};
pub use scope::ScopeCodec;
