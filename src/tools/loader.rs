//! Deferred component loading

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::Component;

/// Errors a component loader can reject with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Component unavailable: {0}")]
    Unavailable(String),

    #[error("Component failed to initialize: {0}")]
    Init(String),
}

pub type LoadResult = std::result::Result<Component, LoadError>;

/// Produces a tool's UI unit on demand.
///
/// Loaders hold no state that changes between calls; every call may build a
/// fresh component. Whether results are cached is up to the caller.
#[async_trait]
pub trait ComponentLoader: Send + Sync {
    async fn load(&self) -> LoadResult;
}

/// Adapts a closure returning a boxed future into a loader
pub struct FnLoader<F>
where
    F: Fn() -> BoxFuture<'static, LoadResult> + Send + Sync,
{
    f: F,
}

impl<F> FnLoader<F>
where
    F: Fn() -> BoxFuture<'static, LoadResult> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> ComponentLoader for FnLoader<F>
where
    F: Fn() -> BoxFuture<'static, LoadResult> + Send + Sync,
{
    async fn load(&self) -> LoadResult {
        (self.f)().await
    }
}
