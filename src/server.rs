use std::net::SocketAddr;
use std::time::Instant;
use axum::{
    http::{header, Method, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;
use crate::books::factory::create_book_repository;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book};
use crate::checkout::controller::{checkout_book, return_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books",
               get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).delete(remove_book))
        .route("/checkout", patch(checkout_book))
        .route("/return", patch(return_book))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

// any origin, with the methods and headers a browser front end needs
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_LENGTH, header::CONTENT_TYPE])
}

async fn request_id_middleware<B>(request: Request<B>, next: Next<B>) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );
    response
}

pub async fn serve(config: Configuration) -> LibraryResult<()> {
    let addr: SocketAddr = config.server_addr().parse().map_err(|err| LibraryError::runtime(
        format!("invalid server address {}: {}", config.server_addr(), err).as_str(), None))?;

    let book_repository = create_book_repository(&config);
    let count = book_repository.count().await;
    info!(books_file = %config.books_file.display(), count, "catalog ready");
    let app = build_router(AppState::with_book_repository(config, book_repository));

    let server = axum::Server::try_bind(&addr).map_err(|err| LibraryError::runtime(
        format!("failed to bind {}: {}", addr, err).as_str(), None))?;
    info!(%addr, version = env!("CARGO_PKG_VERSION"), "catalog listening");

    server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| LibraryError::runtime(format!("server error {}", err).as_str(), None))?;

    info!("catalog shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        },
    }
}
