//! Service lifecycle
//!
//! Starting -> Serving -> Draining -> Stopped:
//! - the listener is bound before serving starts
//! - axum runs on its own task while the caller waits for SIGINT/SIGTERM
//! - on shutdown, in-flight requests get a bounded drain window; whatever
//!   is still running afterwards is abandoned
//! - the pool is closed last

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, watch};

/// How long in-flight requests may run after a shutdown signal.
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on waiting for pool connections to close.
const POOL_CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Lifecycle phase of a running service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Serving,
    Draining,
    Stopped,
}

/// A bound listener, its router and the pool it serves from.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url)?;
/// let app = ServiceKind::Users.app(AppState::new(pool.clone()));
/// Service::bind(addr, app, pool).await?.run().await?;
/// ```
pub struct Service {
    listener: TcpListener,
    app: Router,
    pool: PgPool,
    drain_timeout: Duration,
    state: watch::Sender<LifecycleState>,
}

impl Service {
    /// Bind the listener. The service stays in `Starting` until `run`.
    pub async fn bind(addr: SocketAddr, app: Router, pool: PgPool) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self::from_listener(listener, app, pool))
    }

    pub fn from_listener(listener: TcpListener, app: Router, pool: PgPool) -> Self {
        let (state, _) = watch::channel(LifecycleState::Starting);
        Self {
            listener,
            app,
            pool,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
            state,
        }
    }

    pub fn with_drain_timeout(mut self, drain_timeout: Duration) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Watch lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<LifecycleState> {
        self.state.subscribe()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain and release the pool.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send,
    {
        let Self {
            listener,
            app,
            pool,
            drain_timeout,
            state,
        } = self;
        let addr = listener.local_addr()?;

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let mut server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // A dropped sender also means stop.
                    let _ = stop_rx.await;
                })
                .await
        });
        set_state(&state, LifecycleState::Serving);
        tracing::info!("Server listening on {}", addr);

        tokio::select! {
            () = shutdown => {}
            exited = &mut server => {
                // The server stopped without being asked to.
                close_pool(&pool).await;
                set_state(&state, LifecycleState::Stopped);
                return match exited {
                    Ok(result) => result.map_err(ServerError::from),
                    Err(e) => Err(ServerError::Task(e)),
                };
            }
        }

        set_state(&state, LifecycleState::Draining);
        let _ = stop_tx.send(());

        match tokio::time::timeout(drain_timeout, &mut server).await {
            Ok(Ok(Ok(()))) => tracing::info!("In-flight requests drained"),
            Ok(Ok(Err(e))) => tracing::error!("Server error while draining: {}", e),
            Ok(Err(e)) => tracing::error!("Server task failed while draining: {}", e),
            Err(_) => {
                tracing::warn!(
                    drain_secs = drain_timeout.as_secs_f64(),
                    "Drain window elapsed, abandoning in-flight requests"
                );
                server.abort();
            }
        }

        close_pool(&pool).await;
        set_state(&state, LifecycleState::Stopped);
        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

fn set_state(state: &watch::Sender<LifecycleState>, next: LifecycleState) {
    let previous = state.send_replace(next);
    tracing::debug!(?previous, ?next, "lifecycle transition");
}

async fn close_pool(pool: &PgPool) {
    if tokio::time::timeout(POOL_CLOSE_TIMEOUT, pool.close())
        .await
        .is_err()
    {
        tracing::warn!("Pool connections still checked out at exit");
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(tokio::task::JoinError),
}
