//! Request lifetimes bound to the view that issued them.
//!
//! A page opens a [`ViewScope`] and hands a [`ScopeToken`] to every request
//! it spawns. Leaving the page cancels (or drops) the scope, and any result
//! that arrives afterwards is thrown away instead of landing on a view that
//! is no longer on screen.

use std::future::Future;
use tokio::sync::watch;

#[derive(Debug)]
pub struct ViewScope {
    cancelled: watch::Sender<bool>,
}

impl ViewScope {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self { cancelled }
    }

    pub fn token(&self) -> ScopeToken {
        ScopeToken {
            cancelled: self.cancelled.subscribe(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone)]
pub struct ScopeToken {
    cancelled: watch::Receiver<bool>,
}

impl ScopeToken {
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Resolves once the owning scope is cancelled or gone
    pub async fn cancelled(&mut self) {
        loop {
            if *self.cancelled.borrow_and_update() {
                return;
            }
            if self.cancelled.changed().await.is_err() {
                return;
            }
        }
    }

    /// Drive `fut` unless the scope goes away first. `None` means the
    /// result, if any, was discarded.
    pub async fn run<F>(mut self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => {
                tracing::debug!("View closed, dropping in-flight request");
                None
            }
            output = fut => Some(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completes_while_scope_alive() {
        let scope = ViewScope::new();
        let result = scope.token().run(async { 7 }).await;
        assert_eq!(result, Some(7));
    }

    #[tokio::test]
    async fn test_cancel_discards_pending_result() {
        let scope = ViewScope::new();
        let token = scope.token();

        let handle = tokio::spawn(token.run(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "stale"
        }));

        tokio::time::sleep(Duration::from_millis(10)).await;
        scope.cancel();

        let result = tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_dropping_scope_cancels() {
        let scope = ViewScope::new();
        let token = scope.token();
        drop(scope);

        assert!(token.is_cancelled());
        assert_eq!(token.run(async { 1 }).await, None);
    }

    #[tokio::test]
    async fn test_tokens_from_new_scope_are_independent() {
        let old = ViewScope::new();
        let stale = old.token();
        old.cancel();

        let fresh = ViewScope::new();
        assert!(stale.is_cancelled());
        assert!(!fresh.token().is_cancelled());
        assert!(old.is_cancelled());
    }
}
