//! Retry with exponential backoff for transient persistence failures.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use log::{debug, warn};

use super::PersistenceGateway;
use crate::{
    error::{Result, StudioError},
    models::{CollectionId, ItemPayload, OrderedItem, PositionUpdate},
};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(50);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(1);

/// How often and how patiently a transient failure is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one; at least 1
    pub max_attempts: u32,

    /// Delay before the second attempt
    pub base_delay: Duration,

    /// Upper bound for any single delay
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Sets the total number of attempts.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the first and maximum backoff delays.
    pub fn with_delays(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self.max_delay = max_delay;
        self
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    ///
    /// Doubles from `base_delay` and saturates at `max_delay`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay)
    }

    /// Checks the policy is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(StudioError::Configuration {
                message: "Retry policy needs at least one attempt".to_string(),
            });
        }
        if self.base_delay > self.max_delay {
            return Err(StudioError::Configuration {
                message: format!(
                    "Retry base delay {:?} exceeds max delay {:?}",
                    self.base_delay, self.max_delay
                ),
            });
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

/// Gateway decorator that retries transient failures of the inner gateway.
///
/// Only errors for which [`StudioError::is_transient`] holds are retried;
/// everything else, and the last transient error, is returned unchanged.
#[derive(Debug, Clone)]
pub struct RetryingGateway<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: PersistenceGateway> RetryingGateway<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
        T: Send,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => {
                    if attempt > 1 {
                        debug!("{operation} succeeded on attempt {attempt}");
                    }
                    return Ok(value);
                }
                Err(e) if e.is_transient() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        "{operation} failed on attempt {attempt}/{}: {e}; retrying in {delay:?}",
                        self.policy.max_attempts
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl<G: PersistenceGateway> PersistenceGateway for RetryingGateway<G> {
    async fn load_items(&self, collection: &CollectionId) -> Result<Vec<OrderedItem>> {
        self.run("load_items", move || self.inner.load_items(collection))
            .await
    }

    async fn reorder_items(
        &self,
        collection: &CollectionId,
        positions: &[PositionUpdate],
    ) -> Result<()> {
        self.run("reorder_items", move || {
            self.inner.reorder_items(collection, positions)
        })
        .await
    }

    async fn create_item(
        &self,
        collection: &CollectionId,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        self.run("create_item", move || {
            self.inner.create_item(collection, payload.clone())
        })
        .await
    }

    async fn update_item(
        &self,
        collection: &CollectionId,
        id: &str,
        payload: ItemPayload,
    ) -> Result<OrderedItem> {
        self.run("update_item", move || {
            self.inner.update_item(collection, id, payload.clone())
        })
        .await
    }

    async fn remove_item(&self, collection: &CollectionId, id: &str) -> Result<()> {
        self.run("remove_item", move || self.inner.remove_item(collection, id))
            .await
    }
}
