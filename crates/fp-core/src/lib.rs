//! feedpost/crates/fp-core/src/lib.rs
//!
//! The central domain logic and interface definitions for feedpost: one
//! post's optimistic interaction state and the view models derived from it.

pub mod controller;
pub mod error;
pub mod feed;
pub mod models;
pub mod traits;
pub mod view;

// Re-exporting for easier access in other crates
pub use controller::*;
pub use error::*;
pub use feed::*;
pub use models::*;
pub use traits::*;
pub use view::*;

/// Author shown on comments when no identity collaborator says otherwise.
pub const DEFAULT_COMMENT_AUTHOR: &str = "You";
