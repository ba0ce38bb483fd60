//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

/// Identity contract: who is acting in this session.
#[cfg_attr(feature = "testing", mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Display name attached to comments submitted by the current viewer.
    fn current_username(&self) -> String;
}

/// Message log persistence. Unrelated to posts; only its bootstrap
/// lifecycle is defined.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Creates the message table if it does not exist yet. Safe to repeat.
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Closes the underlying connection. Failures are surfaced, not retried.
    async fn close(&self) -> anyhow::Result<()>;
}
