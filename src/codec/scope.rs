//! Scope Codec
//!
//! Packs an ordered list of canister principals into the single
//! space-delimited OAuth2 `scope` field and back.

use crate::core::PrincipalCodec;
use crate::error::IcidResult;
use crate::types::{CanisterScope, ParsedScopeString};

/// Scope string codec over an injected principal codec.
pub struct ScopeCodec<C: PrincipalCodec> {
    principals: C,
}

impl<C: PrincipalCodec> ScopeCodec<C> {
    /// Create a codec backed by the given principal codec.
    pub fn new(principals: C) -> Self {
        Self { principals }
    }

    /// Join canonical principal texts with single spaces, order preserved.
    pub fn encode(&self, scope: &ParsedScopeString<C::Principal>) -> String {
        scope
            .canisters
            .iter()
            .map(|canister| self.principals.to_text(&canister.principal))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Split on whitespace and parse each segment.
    ///
    /// Empty segments are dropped. A segment that fails to parse is logged
    /// and the failure propagated unchanged; invalid segments are never
    /// silently skipped. Segment count is unbounded.
    pub fn decode(&self, scope: &str) -> IcidResult<ParsedScopeString<C::Principal>> {
        let mut canisters = Vec::new();

        for segment in scope.split_whitespace() {
            let principal = self.principals.parse(segment).map_err(|e| {
                tracing::warn!(segment, "scope segment is not a valid principal");
                e
            })?;
            canisters.push(CanisterScope { principal });
        }

        Ok(ParsedScopeString { canisters })
    }
}
