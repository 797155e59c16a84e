//! OS signal handling.
//!
//! Ctrl-C cancels every in-flight read through the shared `Shutdown`.

use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers `shutdown` on the first Ctrl-C.
pub fn cancel_on_ctrl_c(shutdown: Arc<Shutdown>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, cancelling in-flight request");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            }
        }
    })
}
