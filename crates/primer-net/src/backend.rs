use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use primer_core::FrameWaker;

use crate::{ApiClient, ApiConfig, NetError};

enum Slot<T> {
    Pending,
    Done(Result<T, NetError>),
    Taken,
}

/// Handle to one in-flight call. Dropping it does not cancel the call; the
/// result is simply discarded.
pub struct Request<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Request<T> {
    fn pending() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::Pending)),
        }
    }

    /// Already finished request, mostly for tests and offline fallbacks.
    pub fn ready(result: Result<T, NetError>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::Done(result))),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Pending)
    }

    /// The result, exactly once.
    pub fn try_take(&self) -> Option<Result<T, NetError>> {
        let mut slot = self.slot.lock();
        match std::mem::replace(&mut *slot, Slot::Taken) {
            Slot::Done(result) => Some(result),
            other => {
                *slot = other;
                None
            }
        }
    }

    fn complete(&self, result: Result<T, NetError>) {
        *self.slot.lock() = Slot::Done(result);
    }
}

#[derive(Clone)]
pub struct Backend {
    runtime: Arc<tokio::runtime::Runtime>,
    client: ApiClient,
    waker: FrameWaker,
}

impl Backend {
    pub fn start(config: &ApiConfig, waker: FrameWaker) -> Result<Self, NetError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("primer-net")
            .enable_all()
            .build()
            .map_err(|e| NetError::Runtime(e.to_string()))?;
        let client = ApiClient::new(config)?;
        log::info!("network backend ready ({})", client.base_url());
        Ok(Self {
            runtime: Arc::new(runtime),
            client,
            waker,
        })
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Runs `call` on the backend runtime. The runner is woken when it ends.
    pub fn request<T, F, Fut>(&self, label: &'static str, call: F) -> Request<T>
    where
        T: Send + 'static,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, NetError>> + Send + 'static,
    {
        let request = Request::pending();
        let done = request.clone();
        let waker = self.waker.clone();
        let fut = call(self.client.clone());

        log::debug!("{label}: started");
        self.runtime.spawn(async move {
            let result = fut.await;
            match &result {
                Ok(_) => log::debug!("{label}: done"),
                Err(e) => log::warn!("{label}: {e}"),
            }
            done.complete(result);
            waker.wake();
        });
        request
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}
