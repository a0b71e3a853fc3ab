//! Ctrl-C handling.

use skelzip_core::CancellationToken;
use std::thread;

/// Returns a token that is cancelled when the process receives Ctrl-C.
///
/// The listener runs on a detached thread with its own single-threaded
/// runtime. If the runtime or the signal handler cannot be set up, the token
/// is returned anyway and simply never fires.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let listener = token.clone();

    let spawned = thread::Builder::new()
        .name("skelzip-signal".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!("cannot start signal runtime: {e}");
                    return;
                }
            };

            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::warn!("interrupt received, stopping after current entry");
                        listener.cancel();
                    }
                    Err(e) => tracing::warn!("cannot listen for Ctrl-C: {e}"),
                }
            });
        });

    if let Err(e) = spawned {
        tracing::warn!("cannot spawn signal thread: {e}");
    }

    token
}
