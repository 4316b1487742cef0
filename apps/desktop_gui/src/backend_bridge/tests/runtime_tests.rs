use super::*;
use axum::{http::header, routing::get, Router};
use crossbeam_channel::bounded;
use std::time::Duration;
use tokio::net::TcpListener;

const RECORDS_BODY: &str = r#"[{"name":"Bob","age":30,"occupation":"Chef"},{"name":"Amy","age":25,"occupation":"Dev"}]"#;

async fn spawn_stub_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn endpoints(base: &str) -> BackendEndpoints {
    BackendEndpoints {
        records_url: format!("{base}/records"),
        avatar_url: format!("{base}/avatar.png"),
    }
}

fn tiny_png() -> Vec<u8> {
    let buffer: image::RgbaImage = image::ImageBuffer::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

async fn next_event(ui_rx: &Receiver<UiEvent>) -> Option<UiEvent> {
    let ui_rx = ui_rx.clone();
    tokio::task::spawn_blocking(move || ui_rx.recv_timeout(Duration::from_secs(5)).ok())
        .await
        .expect("join receiver")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn load_records_delivers_fetched_records() {
    let base = spawn_stub_server(Router::new().route("/records", get(|| async { RECORDS_BODY }))).await;
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(endpoints(&base), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue load");

    match next_event(&ui_rx).await {
        Some(UiEvent::RecordsLoaded(records)) => {
            let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Bob", "Amy"]);
        }
        _ => panic!("expected records"),
    }

    cmd_tx.send(BackendCommand::Shutdown).expect("queue shutdown");
    tokio::task::spawn_blocking(move || worker.join())
        .await
        .expect("join task")
        .expect("worker exits cleanly");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_load_reports_a_silent_error() {
    let base = spawn_stub_server(Router::new().route("/records", get(|| async { "not json" }))).await;
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let _worker = launch(endpoints(&base), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue load");

    match next_event(&ui_rx).await {
        Some(UiEvent::Error(err)) => {
            assert_eq!(err.context(), UiErrorContext::LoadRecords);
            assert!(!err.is_user_visible());
        }
        _ => panic!("expected load error"),
    }
    let _ = cmd_tx.send(BackendCommand::Shutdown);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repeated_load_requests_fetch_once() {
    let base = spawn_stub_server(Router::new().route("/records", get(|| async { RECORDS_BODY }))).await;
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(endpoints(&base), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue load");
    cmd_tx.send(BackendCommand::LoadRecords).expect("queue repeat");
    assert!(matches!(
        next_event(&ui_rx).await,
        Some(UiEvent::RecordsLoaded(_))
    ));

    cmd_tx.send(BackendCommand::Shutdown).expect("queue shutdown");
    tokio::task::spawn_blocking(move || worker.join())
        .await
        .expect("join task")
        .expect("worker exits cleanly");
    assert!(ui_rx.try_recv().is_err(), "second load must not deliver");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shutdown_cancels_in_flight_load() {
    let router = Router::new().route(
        "/records",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            RECORDS_BODY
        }),
    );
    let base = spawn_stub_server(router).await;
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(endpoints(&base), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue load");
    cmd_tx.send(BackendCommand::Shutdown).expect("queue shutdown");
    tokio::task::spawn_blocking(move || worker.join())
        .await
        .expect("join task")
        .expect("worker exits cleanly");

    assert!(
        ui_rx.recv_timeout(Duration::from_millis(200)).is_err(),
        "cancelled load must not deliver records"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetch_avatar_decodes_the_image() {
    let png = tiny_png();
    let router = Router::new().route(
        "/avatar.png",
        get(move || {
            let png = png.clone();
            async move { ([(header::CONTENT_TYPE, "image/png")], png) }
        }),
    );
    let base = spawn_stub_server(router).await;
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let _worker = launch(endpoints(&base), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::FetchAvatar).expect("queue avatar");

    match next_event(&ui_rx).await {
        Some(UiEvent::AvatarLoaded(image)) => assert_eq!((image.width, image.height), (3, 2)),
        _ => panic!("expected avatar"),
    }
    let _ = cmd_tx.send(BackendCommand::Shutdown);
}
