// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Groups posts by author and computes per-user post statistics.

use crate::models::stats::PostTotals;
use crate::models::{Post, UserStat};
use std::collections::BTreeMap;

/// Compute post count and mean body length for every user that has posts.
///
/// Single pass over `posts`. The result is ordered by user id, though
/// callers should not depend on that.
pub fn aggregate(posts: &[Post]) -> Vec<UserStat> {
    let mut totals: BTreeMap<u64, PostTotals> = BTreeMap::new();

    for post in posts {
        totals.entry(post.user_id).or_default().add(post.body_len());
    }

    totals
        .into_iter()
        .map(|(user_id, t)| t.into_stat(user_id))
        .collect()
}
