//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Number of hex characters kept from the generating UUID.
const TOKEN_LEN: usize = 8;

/// Identifier of a product record.
///
/// Minted as the first eight hex characters of a v4 UUID. Identifiers read
/// back from storage are accepted verbatim (historic files may carry ids of
/// any shape), so the inner value is an opaque string, not a parsed UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Mint a new identifier.
    ///
    /// Prefer passing ids explicitly in tests for determinism.
    pub fn new() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(TOKEN_LEN);
        Self(token)
    }

    /// Wrap an identifier loaded from storage without validation.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ProductId cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}
