//! HTTP surface for the Summit goal tracker.
//!
//! The router exposes one endpoint per tracker operation. Every handler
//! follows the same shape: extract the path ids and JSON body, run the
//! operation while holding the tracker lock, and answer with a JSON envelope
//! or a `{"error": ...}` body.
//!
//! ```rust,no_run
//! use summit_core::GoalTrackerBuilder;
//! use summit_server::{serve, shutdown_signal, AppState};
//! use tokio::net::TcpListener;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = GoalTrackerBuilder::new().build().await?;
//! let listener = TcpListener::bind("127.0.0.1:3000").await?;
//! serve(listener, AppState::new(tracker), shutdown_signal()).await?;
//! # Ok(())
//! # }
//! ```

use std::future::{self, Future};

use log::{error, info};
use tokio::net::TcpListener;

pub mod http;

pub use http::{build_router, AppState};

/// Serves the API on `listener` until `shutdown` resolves, then lets
/// in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
///
/// A signal that cannot be listened for is logged and never fires, so the
/// server keeps running until one of the remaining signals arrives.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to register SIGTERM handler: {e}");
                future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        _ = until_signal("Ctrl-C", tokio::signal::ctrl_c()) => {}
        _ = terminate => {}
    }

    info!("Shutdown requested, draining in-flight requests");
}

/// Waits for `listener` to report a signal. If it fails instead, the error
/// is logged and the returned future stays pending.
async fn until_signal<F>(name: &str, listener: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = listener.await {
        error!("Failed to listen for {name}: {e}");
        future::pending::<()>().await;
    }
}
