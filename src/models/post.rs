// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Post model and the user-id selector used to filter posts.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A post as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Owning user. Not guaranteed to resolve to a fetched user.
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Post body; only its length is measured
    pub body: String,
}

impl Post {
    /// Body length in characters (Unicode scalar values, not bytes).
    pub fn body_len(&self) -> usize {
        self.body.chars().count()
    }
}

/// Which users' posts to keep: a single id or a collection of ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIds {
    One(u64),
    Many(Vec<u64>),
}

impl UserIds {
    /// Normalize to a lookup set; a single id becomes a one-element set.
    pub fn into_set(self) -> HashSet<u64> {
        match self {
            UserIds::One(id) => HashSet::from([id]),
            UserIds::Many(ids) => ids.into_iter().collect(),
        }
    }
}

impl From<u64> for UserIds {
    fn from(id: u64) -> Self {
        UserIds::One(id)
    }
}

impl From<Vec<u64>> for UserIds {
    fn from(ids: Vec<u64>) -> Self {
        UserIds::Many(ids)
    }
}

impl From<&[u64]> for UserIds {
    fn from(ids: &[u64]) -> Self {
        UserIds::Many(ids.to_vec())
    }
}

/// Accepts an integer or an array of integers. Anything else is a caller
/// bug and is rejected rather than treated as "no posts".
impl TryFrom<&Value> for UserIds {
    type Error = AppError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let invalid = || {
            AppError::InvalidArgument(format!(
                "user ids must be an integer or an array of integers, got {}",
                value
            ))
        };

        match value {
            Value::Number(n) => n.as_u64().map(UserIds::One).ok_or_else(invalid),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()
                .map(UserIds::Many),
            _ => Err(invalid()),
        }
    }
}
