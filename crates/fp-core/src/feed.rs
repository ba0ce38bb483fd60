//! # Feed ingestion
//!
//! The single boundary where wire-format posts become `Post`s. Identifier
//! coercion happens here and only here.

use chrono::Utc;
use log::warn;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{FeedPost, Post, PostId};

/// Largest base count accepted at ingestion. Leaves headroom for the +1 of
/// an optimistic like and the doubled views estimate.
pub const MAX_COUNT: i64 = i64::MAX / 4;

/// Normalizes one wire post.
pub fn ingest(raw: FeedPost) -> Result<Post> {
    let id = PostId::try_from(raw.id)?;

    for (field, value) in [("likes", raw.likes), ("comments", raw.comments), ("shares", raw.shares)] {
        if value < 0 {
            return Err(AppError::ValidationError(format!(
                "post {id}: {field} must not be negative (got {value})"
            )));
        }
        if value > MAX_COUNT {
            return Err(AppError::ValidationError(format!(
                "post {id}: {field} exceeds {MAX_COUNT} (got {value})"
            )));
        }
    }

    Ok(Post {
        id,
        username: raw.username,
        user_image: raw.user_image,
        content: raw.content,
        image: non_empty(raw.image),
        video: non_empty(raw.video),
        likes: raw.likes,
        comments: raw.comments,
        shares: raw.shares,
        is_liked: raw.is_liked,
        is_bookmarked: raw.is_bookmarked,
        categories: raw.categories,
        is_sponsored: raw.is_sponsored.unwrap_or(false),
        is_premium: raw.is_premium.unwrap_or(false),
        is_verified: raw.is_verified.unwrap_or(false),
        timestamp: raw.timestamp.unwrap_or_else(Utc::now),
    })
}

/// Parses a JSON array of posts. The first bad entry fails the whole feed.
pub fn parse_feed(json: &str) -> Result<Vec<Post>> {
    decode(json)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| ingest_entry(entry).map_err(|e| at_index(index, e)))
        .collect()
}

/// Parses a JSON array of posts, skipping entries that fail ingestion.
///
/// Only a malformed document is an error. Entries with a bad field or a
/// rejected value are logged and handed back alongside the accepted posts.
pub fn parse_feed_lenient(json: &str) -> Result<(Vec<Post>, Vec<AppError>)> {
    let mut posts = Vec::new();
    let mut rejected = Vec::new();

    for (index, entry) in decode(json)?.into_iter().enumerate() {
        match ingest_entry(entry) {
            Ok(post) => posts.push(post),
            Err(e) => {
                let e = at_index(index, e);
                warn!("skipping feed entry: {e}");
                rejected.push(e);
            }
        }
    }

    Ok((posts, rejected))
}

// Only the array shape is checked here; each entry is typed on its own so
// one bad field cannot sink its neighbours.
fn decode(json: &str) -> Result<Vec<Value>> {
    serde_json::from_str(json).map_err(|e| AppError::ValidationError(format!("malformed feed: {e}")))
}

fn ingest_entry(entry: Value) -> Result<Post> {
    let raw: FeedPost = serde_json::from_value(entry).map_err(|e| AppError::ValidationError(e.to_string()))?;
    ingest(raw)
}

fn at_index(index: usize, err: AppError) -> AppError {
    AppError::ValidationError(format!("entry {index}: {err}"))
}

// The feed uses "" for "no media".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
