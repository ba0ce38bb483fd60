//! # Dialog view models
//!
//! Read-only reshapings of a post plus its interaction overlay, in the exact
//! field sets the comment and share dialogs consume. They are rebuilt on
//! every projection and never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Comment, PostId};

/// Everything the comment dialog is given about a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogViewModel {
    pub id: PostId,
    pub username: String,
    pub avatar: String,
    pub verified: bool,
    pub is_premium: bool,
    /// Image, else video, else empty
    pub image: String,
    pub caption: String,
    pub timestamp: DateTime<Utc>,
    pub likes: i64,
    /// Synthetic estimate, twice the current like count
    pub views: String,
    pub comments: CommentThread,
}

/// Server-side comment count plus the comments added locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub base_count: i64,
    pub entries: Vec<Comment>,
}

impl CommentThread {
    pub fn total(&self) -> i64 {
        self.base_count + self.entries.len() as i64
    }
}

/// The share sheet only needs enough to build a link and a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareViewModel {
    pub id: PostId,
    pub username: String,
    pub caption: String,
}

/// What the card needs to redraw its engagement controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub like_count: i64,
    pub liked: bool,
    pub bookmarked: bool,
    pub comment_total: i64,
    pub share_count: i64,
}
