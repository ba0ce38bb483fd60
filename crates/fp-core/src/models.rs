//! # Domain Models
//!
//! These structs represent a feed post and the session-local state layered
//! on top of it. Identifiers are normalized to `PostId` at ingestion, so
//! nothing downstream ever sees a textual id.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Canonical post identifier shared by the feed and both dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = AppError;

    /// Strict base-10 parse. Surrounding whitespace, decimals and trailing
    /// garbage are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(PostId)
            .map_err(|_| AppError::InvalidPostId(s.to_string()))
    }
}

/// Identifier as it arrives on the wire: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPostId {
    Number(i64),
    Text(String),
}

impl TryFrom<RawPostId> for PostId {
    type Error = AppError;

    fn try_from(raw: RawPostId) -> Result<Self, Self::Error> {
        match raw {
            RawPostId::Number(n) => Ok(PostId(n)),
            RawPostId::Text(s) => s.parse(),
        }
    }
}

/// A post exactly as the feed supplies it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: RawPostId,
    pub username: String,
    pub user_image: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub is_sponsored: Option<bool>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    /// RFC 3339; ingestion substitutes "now" when absent
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// An ingested post. Externally owned and never mutated by the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub username: String,
    /// Avatar reference
    pub user_image: String,
    pub content: String,
    pub image: Option<String>,
    pub video: Option<String>,
    /// Base counts as supplied by the server
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
    pub categories: Vec<String>,
    pub is_sponsored: bool,
    pub is_premium: bool,
    pub is_verified: bool,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Image reference, falling back to the video reference.
    pub fn media(&self) -> Option<&str> {
        self.image.as_deref().or(self.video.as_deref())
    }
}

/// A comment appended during this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Dense, 1-based and local to one controller. Not globally unique.
    pub id: u64,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: i64,
    pub is_premium: bool,
}

/// Optimistic overlay owned by a single post instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    pub liked: bool,
    pub like_count: i64,
    pub bookmarked: bool,
    pub local_comments: Vec<Comment>,
}

impl InteractionState {
    /// Seeds the overlay from the post's initial flags and counts.
    pub fn from_post(post: &Post) -> Self {
        Self {
            liked: post.is_liked,
            like_count: post.likes,
            bookmarked: post.is_bookmarked,
            local_comments: Vec::new(),
        }
    }
}
