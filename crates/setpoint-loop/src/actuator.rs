//! Actuator adapter: applies a target size to the real resource pool.

use std::future::Future;
use std::pin::Pin;

/// Future returned by an actuator apply call.
pub type ApplyFuture = Pin<Box<dyn Future<Output = anyhow::Result<f64>> + Send>>;

/// Sink that applies a target pool size and reports the size actually
/// realized, which may differ from the request (platform limits, integer
/// instance counts). The loop treats the returned size as authoritative
/// for subsequent baseline tracking.
///
/// Retrying failed actuations is the actuator's concern, not the loop's.
pub struct Actuator {
    apply_fn: Box<dyn Fn(f64) -> ApplyFuture + Send + Sync>,
}

impl Actuator {
    /// Wrap an infallible synchronous function, e.g. `f64::ceil`.
    pub fn from_fn(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            apply_fn: Box::new(move |target| {
                let realized = f(target);
                Box::pin(async move { Ok(realized) })
            }),
        }
    }

    /// Wrap a fallible synchronous function.
    pub fn try_from_fn(
        f: impl Fn(f64) -> anyhow::Result<f64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            apply_fn: Box::new(move |target| {
                let result = f(target);
                Box::pin(async move { result })
            }),
        }
    }

    /// Wrap an async scaling call, e.g. a network call to a scaling API.
    pub fn from_async(f: impl Fn(f64) -> ApplyFuture + Send + Sync + 'static) -> Self {
        Self {
            apply_fn: Box::new(f),
        }
    }

    /// No-op actuator for dry runs and tests: realizes exactly what was
    /// requested.
    pub fn identity() -> Self {
        Self::from_fn(|target| target)
    }

    /// Apply `target` and await the realized size.
    pub async fn apply(&self, target: f64) -> anyhow::Result<f64> {
        (self.apply_fn)(target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_returns_the_request() {
        let actuator = Actuator::identity();
        assert_eq!(actuator.apply(8.0).await.unwrap(), 8.0);
    }

    #[tokio::test]
    async fn sync_fn_is_applied() {
        let actuator = Actuator::from_fn(f64::ceil);
        assert_eq!(actuator.apply(8.003).await.unwrap(), 9.0);
    }

    #[tokio::test]
    async fn fallible_fn_propagates_errors() {
        let actuator = Actuator::try_from_fn(|_| anyhow::bail!("platform limit"));
        assert!(actuator.apply(8.0).await.is_err());
    }

    #[tokio::test]
    async fn async_fn_is_awaited() {
        let actuator = Actuator::from_async(|target| {
            Box::pin(async move {
                tokio::task::yield_now().await;
                Ok(target.floor())
            })
        });
        assert_eq!(actuator.apply(7.9).await.unwrap(), 7.0);
    }
}
