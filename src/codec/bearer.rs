//! Bearer Token Codec
//!
//! Serializes a delegation chain through a JSON/UTF-8/hex pipeline and
//! validates the decoded shape.

use serde::Serialize;
use serde_json::Value;

use crate::error::{IcidResult, ValidationError};
use crate::types::ParsedBearerToken;

/// Encode a delegation chain as a bearer token.
///
/// The chain is opaque: anything JSON-serializable is accepted. The JSON
/// text is taken as UTF-8 bytes and hex-encoded.
pub fn encode<T: Serialize + ?Sized>(delegation_chain: &T) -> IcidResult<String> {
    let json = serde_json::to_string(delegation_chain).map_err(|e| {
        ValidationError::NotSerializable {
            message: e.to_string(),
        }
    })?;

    Ok(hex::encode(json.as_bytes()))
}

/// Decode and validate a bearer token.
///
/// Reverses the hex/UTF-8/JSON pipeline, then checks that `publicKey` is a
/// string and `delegations` is present. Returns the validated, narrowed
/// [`ParsedBearerToken`], never the raw parse.
pub fn decode(token: &str) -> IcidResult<ParsedBearerToken> {
    let bytes = hex::decode(token).map_err(|e| ValidationError::InvalidHex {
        message: e.to_string(),
    })?;

    let json = String::from_utf8(bytes).map_err(|_| ValidationError::InvalidUtf8)?;

    let value: Value = serde_json::from_str(&json).map_err(|e| ValidationError::InvalidJson {
        message: e.to_string(),
    })?;

    match value.get("publicKey") {
        Some(Value::String(_)) => {}
        _ => return Err(ValidationError::PublicKeyNotString.into()),
    }
    match value.get("delegations") {
        None | Some(Value::Null) => return Err(ValidationError::DelegationsRequired.into()),
        Some(_) => {}
    }

    let parsed =
        serde_json::from_value(value).map_err(|e| ValidationError::MalformedDelegations {
            message: e.to_string(),
        })?;

    Ok(parsed)
}
