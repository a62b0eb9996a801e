// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the remote users/posts source.
//!
//! Handles:
//! - Fetching users, projected to `{id, name}`
//! - Fetching posts and filtering them to a set of user ids
//! - Bounding every request with the configured timeout
//!
//! A failing source is not fatal for a report: both fetches log the
//! failure and return an empty list.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Post, User, UserIds};
use serde::Deserialize;
use std::time::Duration;

/// Client for the users/posts source.
#[derive(Clone)]
pub struct SourceClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SourceClient {
    /// Create a client against `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source_base_url.clone(), config.request_timeout)
    }

    /// Fetch every user. Returns an empty list if the source fails.
    pub async fn fetch_users(&self) -> Vec<User> {
        let url = format!("{}/users", self.base_url);

        match self.get_json::<Vec<User>>(&url).await {
            Ok(users) => {
                tracing::debug!(count = users.len(), "Fetched users");
                users
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch users, continuing with none");
                Vec::new()
            }
        }
    }

    /// Fetch the posts written by `user_ids`.
    ///
    /// The source has no server-side filter, so all posts are fetched and
    /// filtered here. Returns an empty list if the source fails.
    pub async fn fetch_posts(&self, user_ids: impl Into<UserIds>) -> Vec<Post> {
        let wanted = user_ids.into().into_set();
        let url = format!("{}/posts", self.base_url);

        match self.get_json::<Vec<Post>>(&url).await {
            Ok(posts) => {
                let total = posts.len();
                let posts: Vec<Post> = posts
                    .into_iter()
                    .filter(|p| wanted.contains(&p.user_id))
                    .collect();
                tracing::debug!(total, kept = posts.len(), "Fetched posts");
                posts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch posts, continuing with none");
                Vec::new()
            }
        }
    }

    /// Like [`fetch_posts`](Self::fetch_posts), for ids that arrive as
    /// untyped JSON. Malformed ids are rejected before any request is made.
    pub async fn fetch_posts_json(
        &self,
        user_ids: &serde_json::Value,
    ) -> Result<Vec<Post>, AppError> {
        let ids = UserIds::try_from(user_ids)?;
        Ok(self.fetch_posts(ids).await)
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("GET {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::SourceUnavailable(format!(
                "GET {}: HTTP {}",
                url, status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("JSON parse error: {}", e)))
    }
}
