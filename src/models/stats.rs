//! Per-user post statistics.

use serde::{Deserialize, Serialize};

/// Post count and mean body length for one user.
///
/// Only users with at least one post get a `UserStat`, so `post_count`
/// is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStat {
    pub user_id: u64,
    pub post_count: u32,
    /// Mean body length in characters, unrounded
    pub mean_post_size: f64,
}

/// Running totals for one user while scanning posts.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PostTotals {
    pub total_chars: u64,
    pub post_count: u32,
}

impl PostTotals {
    pub fn add(&mut self, chars: usize) {
        self.total_chars += chars as u64;
        self.post_count += 1;
    }

    pub fn into_stat(self, user_id: u64) -> UserStat {
        UserStat {
            user_id,
            post_count: self.post_count,
            mean_post_size: self.total_chars as f64 / self.post_count as f64,
        }
    }
}
