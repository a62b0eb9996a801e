//! User model as returned by the data source.

use serde::{Deserialize, Serialize};

/// User identity, projected down to the fields the report needs.
///
/// The remote record carries address, company, phone etc. Those are
/// dropped during deserialization and never leave the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID (unique within one fetch)
    pub id: u64,
    /// Display name
    pub name: String,
}
