//! Process-wide, lazily initialized platform client.

use super::{InnertubeClient, VideoPlatform};
use crate::config::YoutubeSettings;
use crate::error::{Result, YtsumError};
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{info, warn};

type InitFn = Box<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn VideoPlatform>>> + Send + Sync>;

/// Shared handle to the platform client.
///
/// The client is created at most once per process. Every caller goes through
/// [`PlatformHandle::get`], which awaits an in-flight initialization instead of
/// racing it, so no request can observe a half-built client. A failed
/// initialization leaves the cell empty and the next caller tries again.
pub struct PlatformHandle {
    client: OnceCell<Arc<dyn VideoPlatform>>,
    init: InitFn,
}

impl PlatformHandle {
    /// Create a handle that builds its client with `init` on first use.
    pub fn new<F, Fut>(init: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn VideoPlatform>>> + Send + 'static,
    {
        Self {
            client: OnceCell::new(),
            init: Box::new(move || init().boxed()),
        }
    }

    /// Create a handle backed by the InnerTube client.
    pub fn innertube(settings: YoutubeSettings) -> Self {
        Self::new(move || {
            let settings = settings.clone();
            async move {
                let client = InnertubeClient::create(&settings).await?;
                Ok(Arc::new(client) as Arc<dyn VideoPlatform>)
            }
        })
    }

    /// Create a handle around an already constructed client.
    pub fn ready(client: Arc<dyn VideoPlatform>) -> Self {
        Self {
            client: OnceCell::from(client),
            init: Box::new(|| {
                async { Err(YtsumError::Upstream("client already initialized".to_string())) }
                    .boxed()
            }),
        }
    }

    /// Start initialization in the background so the first request does not pay for it.
    pub fn spawn_init(self: &Arc<Self>) -> JoinHandle<()> {
        let handle = Arc::clone(self);
        tokio::spawn(async move {
            match handle.get().await {
                Ok(_) => info!("YouTube client initialized"),
                Err(e) => warn!("YouTube client initialization failed: {}", e),
            }
        })
    }

    /// Get the client, waiting for initialization if it is still running.
    pub async fn get(&self) -> Result<Arc<dyn VideoPlatform>> {
        self.client
            .get_or_try_init(|| (self.init)())
            .await
            .cloned()
            .map_err(|e| match e {
                YtsumError::Upstream(_) => e,
                other => YtsumError::Upstream(format!(
                    "YouTube client initialization failed: {}",
                    other
                )),
            })
    }

    /// Whether the client has finished initializing.
    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }
}
