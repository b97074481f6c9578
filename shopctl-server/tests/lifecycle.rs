//! Starting -> Serving -> Draining -> Stopped over a real socket

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;
use tokio::sync::{oneshot, Notify};

use common::unreachable_pool;
use shopctl_server::{AppState, LifecycleState, Service, ServiceKind};

async fn bind(app: Router) -> Service {
    Service::bind(([127, 0, 0, 1], 0).into(), app, unreachable_pool())
        .await
        .expect("bind")
}

/// Router whose `/slow` handler signals entry, then sleeps for `delay`.
fn slow_app(entered: Arc<Notify>, delay: Duration) -> Router {
    Router::new().route(
        "/slow",
        get(move || {
            let entered = entered.clone();
            async move {
                entered.notify_one();
                tokio::time::sleep(delay).await;
                "done"
            }
        }),
    )
}

#[tokio::test]
async fn serves_then_stops_on_shutdown() {
    let service = bind(ServiceKind::Users.app(AppState::new(unreachable_pool()))).await;
    let addr = service.local_addr().unwrap();
    let mut states = service.subscribe();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let running = tokio::spawn(service.run_until(async move {
        let _ = stop_rx.await;
    }));

    states
        .wait_for(|s| *s == LifecycleState::Serving)
        .await
        .unwrap();

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));

    stop_tx.send(()).unwrap();
    running.await.unwrap().unwrap();
    assert_eq!(*states.borrow(), LifecycleState::Stopped);

    // no longer accepting connections
    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn in_flight_request_finishes_within_drain_window() {
    let entered = Arc::new(Notify::new());
    let service = bind(slow_app(entered.clone(), Duration::from_millis(300)))
        .await
        .with_drain_timeout(Duration::from_secs(5));
    let addr = service.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let running = tokio::spawn(service.run_until(async move {
        let _ = stop_rx.await;
    }));
    let request = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));

    entered.notified().await;
    stop_tx.send(()).unwrap();

    let response = request.await.unwrap().unwrap();
    assert_eq!(response.text().await.unwrap(), "done");
    running.await.unwrap().unwrap();
}

#[tokio::test]
async fn drain_is_bounded() {
    let entered = Arc::new(Notify::new());
    let service = bind(slow_app(entered.clone(), Duration::from_secs(60)))
        .await
        .with_drain_timeout(Duration::from_millis(200));
    let addr = service.local_addr().unwrap();
    let states = service.subscribe();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let running = tokio::spawn(service.run_until(async move {
        let _ = stop_rx.await;
    }));
    let _abandoned = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));

    entered.notified().await;
    let started = Instant::now();
    stop_tx.send(()).unwrap();
    running.await.unwrap().unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(*states.borrow(), LifecycleState::Stopped);
}
