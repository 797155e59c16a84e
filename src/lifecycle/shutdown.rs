//! Cancellation coordination.

use tokio_util::sync::CancellationToken;

/// Owner of the root cancellation token.
///
/// Every read gets a child token; triggering the root cancels all of them,
/// while cancelling a child leaves its siblings untouched.
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    /// Create a new coordinator.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Token for one invocation.
    pub fn child(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Cancel every outstanding invocation.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
