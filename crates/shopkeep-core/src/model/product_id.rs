// ── Product identity ──
//
// The server hands out plain string ids; the client reserves the
// sentinel value "create" for records that have not been persisted yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a product record.
///
/// Wraps the server's string id. [`ProductId::placeholder`] produces the
/// not-yet-persisted sentinel used by the creation flow; the server
/// never returns it for a stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Sentinel id for a record that has not been persisted yet.
const PLACEHOLDER: &str = "create";

impl ProductId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The `"create"` sentinel for an unpersisted record.
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER.to_owned())
    }

    /// `true` for the `"create"` sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
