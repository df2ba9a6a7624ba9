//! tests/mod.rs
//! Shared test helpers: spawn the relay on an ephemeral port, and spawn a
//! stub Remote PKG Installer to receive the multipart uploads.

use std::borrow::Cow;

use axum::{extract::Multipart, http::StatusCode, routing::post, serve, Router};
use tokio::net::TcpListener as TokioTcpListener;
use tokio::sync::mpsc;

use pkg_relay::app::create_app;
use pkg_relay::models::env_vars::EnvironmentVariables;
use pkg_relay::models::state::AppState;

/// Test configuration pointing the installer client at the given URL.
pub fn test_env(installer_url: String) -> EnvironmentVariables {
    EnvironmentVariables {
        environment: Cow::Borrowed("test"),
        host: Cow::Borrowed("127.0.0.1"),
        port: 0,
        max_request_body_size: 2_097_152,
        default_timeout_seconds: 5,
        installer_url: installer_url.into(),
        upload_timeout_seconds: 5,
    }
}

/// Binds an ephemeral port and converts it into a tokio listener.
fn ephemeral_listener() -> TokioTcpListener {
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener")
}

/// Spawns the relay against the given installer URL and returns its base URL,
/// e.g. "http://127.0.0.1:12345". The app is built through `create_app`, so
/// the test traffic passes the same middleware stack as production.
pub fn spawn_app(installer_url: String) -> String {
    let state: AppState = AppState::new(test_env(installer_url))
        .expect("Failed to build app state");
    let app: Router = create_app(state);

    let listener: TokioTcpListener = ephemeral_listener();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// One upload as seen by the stub installer.
#[derive(Debug)]
pub struct ReceivedUpload {
    pub field_name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Spawns a stub installer that answers `status` to every POST and reports
/// each multipart field it received through the returned channel.
pub fn spawn_stub_installer(
    status: StatusCode,
) -> (String, mpsc::UnboundedReceiver<ReceivedUpload>) {
    let (tx, rx) = mpsc::unbounded_channel::<ReceivedUpload>();

    let app: Router = Router::new().route(
        "/",
        post(move |mut multipart: Multipart| {
            let tx = tx.clone();
            async move {
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .expect("Failed to read multipart field")
                {
                    let field_name: String = field.name().unwrap_or_default().to_owned();
                    let file_name: String = field.file_name().unwrap_or_default().to_owned();
                    let bytes: Vec<u8> = field
                        .bytes()
                        .await
                        .expect("Failed to read field bytes")
                        .to_vec();

                    let _ = tx.send(ReceivedUpload {
                        field_name,
                        file_name,
                        bytes,
                    });
                }

                status
            }
        }),
    );

    let listener: TokioTcpListener = ephemeral_listener();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, app)
            .await
            .expect("Stub installer failed");
    });

    (format!("http://{}", addr), rx)
}
