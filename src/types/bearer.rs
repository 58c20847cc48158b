//! Bearer Token Shapes
//!
//! Decoded structure of the delegation-chain bearer token.

use serde::{Deserialize, Serialize};

/// Validated shape of a decoded bearer token.
///
/// JSON field names are camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBearerToken {
    /// Hex-encoded public key the chain is rooted at.
    pub public_key: String,
    /// Delegation links, outermost first.
    pub delegations: Vec<SignedDelegation>,
}

/// One signed link of a delegation chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedDelegation {
    /// Delegation payload.
    pub delegation: Delegation,
    /// Hex-encoded signature over the payload.
    pub signature: String,
}

/// Delegation payload: which key is delegated to, and until when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    /// Expiration timestamp, hex-encoded.
    pub expiration: String,
    /// Hex-encoded delegated-to public key.
    pub pubkey: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_wire_field_names() {
        let token = ParsedBearerToken {
            public_key: "aabb".to_string(),
            delegations: vec![SignedDelegation {
                delegation: Delegation {
                    expiration: "16725225600000000".to_string(),
                    pubkey: "ccdd".to_string(),
                },
                signature: "eeff".to_string(),
            }],
        };

        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains(r#""publicKey":"aabb""#));
        assert!(json.contains(r#""pubkey":"ccdd""#));
        assert!(json.contains(r#""expiration":"16725225600000000""#));
    }
}
