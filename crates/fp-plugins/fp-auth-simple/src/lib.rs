//! # fp-auth-simple
//!
//! Fixed-name implementation of `IdentityProvider`.
//! There is no login flow: every comment in the session is attributed to
//! one configured display name.

use fp_core::traits::IdentityProvider;
use fp_core::DEFAULT_COMMENT_AUTHOR;

pub struct SimpleIdentityProvider {
    display_name: String,
}

impl SimpleIdentityProvider {
    /// Accepts a display name (e.g., from an environment variable).
    /// Blank names fall back to the default author.
    pub fn new(display_name: &str) -> Self {
        let trimmed = display_name.trim();
        Self {
            display_name: if trimmed.is_empty() {
                DEFAULT_COMMENT_AUTHOR.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }
}

impl Default for SimpleIdentityProvider {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_AUTHOR)
    }
}

impl IdentityProvider for SimpleIdentityProvider {
    fn current_username(&self) -> String {
        self.display_name.clone()
    }
}
