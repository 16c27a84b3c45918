//! Memoized warehouse connection handle.
//!
//! The first successful connection is cached for the life of the process
//! and every caller shares it. Failed attempts are not memoized, so a
//! warehouse that comes up later is picked up on the next call.

use crate::client::WarehouseClient;
use irops_core::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

type Connector<H> = Box<dyn Fn() -> Result<H> + Send + Sync>;

/// Lazily connects and memoizes the shared handle.
pub struct ConnectionCache<H = WarehouseClient> {
    slot: RwLock<Option<Arc<H>>>,
    connector: Connector<H>,
}

impl ConnectionCache<WarehouseClient> {
    /// A cache that connects from the ambient configuration.
    pub fn from_env() -> Self {
        Self::with_connector(WarehouseClient::try_from_env)
    }
}

impl<H: Send + Sync> ConnectionCache<H> {
    /// A cache with an injected connector (for testing and alternate
    /// configuration sources).
    pub fn with_connector<F>(connector: F) -> Self
    where
        F: Fn() -> Result<H> + Send + Sync + 'static,
    {
        Self {
            slot: RwLock::new(None),
            connector: Box::new(connector),
        }
    }

    /// The shared handle, connecting on first use.
    ///
    /// Returns `None` when no connection can be established right now.
    pub async fn get(&self) -> Option<Arc<H>> {
        {
            let slot = self.slot.read().await;
            if let Some(handle) = slot.as_ref() {
                return Some(handle.clone());
            }
        }

        let mut slot = self.slot.write().await;
        // Another task may have connected while we waited for the lock.
        if let Some(handle) = slot.as_ref() {
            return Some(handle.clone());
        }

        match (self.connector)() {
            Ok(handle) => {
                let handle = Arc::new(handle);
                *slot = Some(handle.clone());
                tracing::info!("warehouse connection established");
                Some(handle)
            }
            Err(err) => {
                tracing::warn!("warehouse connection unavailable: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irops_core::IropsError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn connects_once_and_shares_the_handle() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let cache = ConnectionCache::with_connector(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, IropsError>("handle".to_string())
        });

        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_are_retried_on_the_next_call() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        let cache = ConnectionCache::with_connector(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(IropsError::connection_unavailable("warehouse down"))
            } else {
                Ok("handle".to_string())
            }
        });

        assert!(cache.get().await.is_none());
        assert!(cache.get().await.is_some());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);

        // Success is memoized.
        cache.get().await.unwrap();
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
