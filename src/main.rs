use axum::{serve, Router};
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tokio::signal;

use pkg_relay::app::create_app;
use pkg_relay::models::state::AppState;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down gracefully");
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    let env_filter: tracing_subscriber::EnvFilter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pkg_relay=debug,tower_http=debug,axum=trace".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::FULL)
        .init();

    let state: AppState = AppState::from_env()?;
    tracing::info!("Relaying PKG installs to {}", state.env.installer_url);

    let app: Router = create_app(state.clone());

    // Listenfd integration
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", state.env.host, state.env.port);
            TcpListener::bind(&addr).await?
        }
    };

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
