//! # fp-ui
//!
//! Render layer for a feed post: the card, its two dialogs, and the
//! visibility flags that decide which dialog is showing. User gestures come
//! in as `PostEvent`s and are applied to the post's controller one at a time.

use std::sync::Arc;

use askama::Template;
use fp_core::error::{AppError, Result};
use fp_core::models::Post;
use fp_core::traits::IdentityProvider;
use fp_core::view::{Controls, DialogViewModel, ShareViewModel};
use fp_core::PostController;
use log::debug;

/// A discrete user gesture on one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    LikeClicked,
    BookmarkClicked,
    OpenComments,
    CloseComments,
    OpenShare,
    CloseShare,
    SubmitComment(String),
}

/// Comment dialog adapter.
#[derive(Template)]
#[template(path = "comment_dialog.html")]
pub struct CommentDialog {
    pub is_open: bool,
    pub post: DialogViewModel,
}

impl CommentDialog {
    /// One event per submitted comment. The dialog never touches counts.
    pub fn submit(&self, text: impl Into<String>) -> PostEvent {
        PostEvent::SubmitComment(text.into())
    }

    pub fn close(&self) -> PostEvent {
        PostEvent::CloseComments
    }
}

/// Share dialog adapter. Read-only: it can only ask to be closed.
#[derive(Template)]
#[template(path = "share_dialog.html")]
pub struct ShareDialog {
    pub is_open: bool,
    pub post: ShareViewModel,
}

impl ShareDialog {
    pub fn close(&self) -> PostEvent {
        PostEvent::CloseShare
    }
}

#[derive(Template)]
#[template(path = "post_card.html")]
pub struct PostCardTemplate<'a> {
    pub post: &'a Post,
    pub controls: Controls,
    pub avatar_fallback: String,
    pub comment_dialog: CommentDialog,
    pub share_dialog: ShareDialog,
}

#[derive(Template)]
#[template(path = "feed.html")]
pub struct FeedTemplate<'a> {
    pub title: &'a str,
    pub cards: Vec<String>,
}

/// One mounted post: its controller plus the dialog visibility flags.
pub struct PostCard {
    controller: PostController,
    show_comments: bool,
    show_share: bool,
    identity: Arc<dyn IdentityProvider>,
}

impl PostCard {
    pub fn new(post: Post, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            controller: PostController::new(post),
            show_comments: false,
            show_share: false,
            identity,
        }
    }

    pub fn controller(&self) -> &PostController {
        &self.controller
    }

    pub fn is_comments_open(&self) -> bool {
        self.show_comments
    }

    pub fn is_share_open(&self) -> bool {
        self.show_share
    }

    /// Applies one gesture to completion.
    pub fn dispatch(&mut self, event: PostEvent) {
        debug!("post {}: {:?}", self.controller.post().id, event);

        match event {
            PostEvent::LikeClicked => self.controller.toggle_like(),
            PostEvent::BookmarkClicked => self.controller.toggle_bookmark(),
            PostEvent::OpenComments => self.show_comments = true,
            PostEvent::CloseComments => self.show_comments = false,
            PostEvent::OpenShare => self.show_share = true,
            PostEvent::CloseShare => self.show_share = false,
            PostEvent::SubmitComment(text) => {
                let author = self.identity.current_username();
                self.controller.add_comment(author, text);
            }
        }
    }

    pub fn comment_dialog(&self) -> CommentDialog {
        CommentDialog {
            is_open: self.show_comments,
            post: self.controller.project_view_model(),
        }
    }

    pub fn share_dialog(&self) -> ShareDialog {
        ShareDialog {
            is_open: self.show_share,
            post: self.controller.project_share_view(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let post = self.controller.post();
        PostCardTemplate {
            post,
            controls: self.controller.controls(),
            avatar_fallback: post.username.chars().take(1).collect(),
            comment_dialog: self.comment_dialog(),
            share_dialog: self.share_dialog(),
        }
        .render()
        .map_err(template_error)
    }
}

/// Renders every card into one page.
pub fn render_feed(title: &str, cards: &[PostCard]) -> Result<String> {
    let cards = cards.iter().map(PostCard::render).collect::<Result<Vec<_>>>()?;
    FeedTemplate { title, cards }.render().map_err(template_error)
}

fn template_error(e: askama::Error) -> AppError {
    AppError::Template(e.to_string())
}
