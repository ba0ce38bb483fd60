//! # Post interaction controller
//!
//! Owns one post and its optimistic overlay. Every mutation is a single
//! synchronous transition; there is nothing to await and nothing can fail.

use chrono::Utc;
use log::debug;

use crate::models::{Comment, InteractionState, Post};
use crate::view::{CommentThread, Controls, DialogViewModel, ShareViewModel};

#[derive(Debug, Clone)]
pub struct PostController {
    post: Post,
    state: InteractionState,
}

impl PostController {
    pub fn new(post: Post) -> Self {
        let state = InteractionState::from_post(&post);
        Self { post, state }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Flips the like flag and moves the count by one in the same direction.
    /// Ingestion caps base counts at `MAX_COUNT`, so the step never saturates
    /// for ingested posts.
    pub fn toggle_like(&mut self) {
        let state = &mut self.state;
        state.like_count = state.like_count.saturating_add(if state.liked { -1 } else { 1 });
        state.liked = !state.liked;
        debug!("post {}: liked={} like_count={}", self.post.id, state.liked, state.like_count);
    }

    /// Flips the bookmark flag. Counts are untouched.
    pub fn toggle_bookmark(&mut self) {
        self.state.bookmarked = !self.state.bookmarked;
        debug!("post {}: bookmarked={}", self.post.id, self.state.bookmarked);
    }

    /// Appends a comment from `author`. The text is taken verbatim; empty
    /// comments are accepted.
    pub fn add_comment(&mut self, author: impl Into<String>, text: impl Into<String>) -> &Comment {
        let comments = &mut self.state.local_comments;
        comments.push(Comment {
            id: comments.len() as u64 + 1,
            username: author.into(),
            content: text.into(),
            timestamp: Utc::now(),
            likes: 0,
            is_premium: false,
        });
        debug!("post {}: local comments={}", self.post.id, comments.len());

        &comments[comments.len() - 1]
    }

    /// Server count plus the local overlay. The base count is never mutated.
    pub fn comment_total(&self) -> i64 {
        self.post.comments.saturating_add(self.state.local_comments.len() as i64)
    }

    pub fn controls(&self) -> Controls {
        Controls {
            like_count: self.state.like_count,
            liked: self.state.liked,
            bookmarked: self.state.bookmarked,
            comment_total: self.comment_total(),
            share_count: self.post.shares,
        }
    }

    pub fn project_view_model(&self) -> DialogViewModel {
        let post = &self.post;
        let like_count = self.state.like_count;

        DialogViewModel {
            id: post.id,
            username: post.username.clone(),
            avatar: post.user_image.clone(),
            verified: post.is_verified,
            is_premium: post.is_premium,
            image: post.media().unwrap_or_default().to_string(),
            caption: post.content.clone(),
            timestamp: post.timestamp,
            likes: like_count,
            views: (i128::from(like_count) * 2).to_string(),
            comments: CommentThread {
                base_count: post.comments,
                entries: self.state.local_comments.clone(),
            },
        }
    }

    pub fn project_share_view(&self) -> ShareViewModel {
        ShareViewModel {
            id: self.post.id,
            username: self.post.username.clone(),
            caption: self.post.content.clone(),
        }
    }
}
