//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but filter debounce timers and the demo's
//! simulated server sleep on tokio timers. This module owns the shared tokio
//! runtime and bridges into it from GPUI tasks.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task                 FilterController
//!       │                               │
//!       ▼                               ▼
//! run_in_tokio(async { ... })     runtime_handle().spawn(timer)
//!       │                               │
//!       ▼                               ▼
//! Result returned to GPUI         payload sent over a channel to the UI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("data-grid-tokio")
            .enable_time()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// # Example
///
/// ```ignore
/// let page = run_in_tokio(async move { service.fetch_page(query).await }).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

/// Get a handle to the tokio runtime for spawning timers
pub fn runtime_handle() -> tokio::runtime::Handle {
    get_runtime().handle().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_from_foreign_executor() {
        let value = runtime_handle().block_on(async {
            run_in_tokio(async {
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
                42
            })
            .await
        });
        assert_eq!(value, 42);
    }
}
