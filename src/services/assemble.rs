// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Joins per-user statistics with user names to build report rows.

use crate::models::{ReportRow, User, UserStat};
use std::collections::HashMap;

/// Name shown for posts whose author is not in the fetched user list.
pub const NAME_NOT_FOUND: &str = "Name not found";

/// Build one report row per stat, in the order of `stats`.
pub fn assemble(stats: &[UserStat], users: &[User]) -> Vec<ReportRow> {
    // Ids are unique within a fetch; on a duplicate the first entry wins.
    let mut names: HashMap<u64, &str> = HashMap::with_capacity(users.len());
    for user in users {
        names.entry(user.id).or_insert(user.name.as_str());
    }

    stats
        .iter()
        .map(|stat| ReportRow {
            user_id: stat.user_id,
            name: names
                .get(&stat.user_id)
                .copied()
                .unwrap_or(NAME_NOT_FOUND)
                .to_string(),
            post_count: stat.post_count,
            mean_post_size: stat.mean_post_size,
        })
        .collect()
}
