use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
    task::JoinHandle,
};

use crate::{Error, Result, api, warning};

/// Sender half that the `/callback` handler consumes on the first redirect.
pub type RedirectSlot = Arc<Mutex<Option<oneshot::Sender<String>>>>;

/// Local server catching the OAuth redirect.
///
/// Resolves `redirect` exactly once with the full redirect URL. Dropping the
/// server (or the task ending) closes the channel, which the waiting side
/// treats as a cancelled authorization.
pub struct CallbackServer {
    addr: SocketAddr,
    redirect: oneshot::Receiver<String>,
    handle: JoinHandle<()>,
}

impl CallbackServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Waits for the redirect URL; `None` once the server can no longer deliver one.
    pub async fn wait_for_redirect(&mut self) -> Option<String> {
        (&mut self.redirect).await.ok()
    }
}

impl Drop for CallbackServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn router(redirect_uri: String, slot: RedirectSlot) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(slot))
        .layer(Extension(Arc::new(redirect_uri)))
}

/// Binds `server_addr` and serves `/callback` and `/health` in the background.
pub async fn start_callback_server(
    server_addr: &str,
    redirect_uri: &str,
) -> Result<CallbackServer> {
    let addr = SocketAddr::from_str(server_addr)
        .map_err(|e| Error::Config(format!("Failed to parse server address: {e}")))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Config(format!("Failed to bind {addr}: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| Error::Config(e.to_string()))?;

    let (tx, rx) = oneshot::channel();
    let app = router(redirect_uri.to_string(), Arc::new(Mutex::new(Some(tx))));

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    Ok(CallbackServer {
        addr,
        redirect: rx,
        handle,
    })
}
