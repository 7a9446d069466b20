//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use catalog_types::{ProductRepository, RateSource};

use super::handlers::{self, AppState};
use crate::openapi::ApiDoc;
use crate::{CurrencyConverter, ProductService};

/// HTTP Server for the Catalog API.
pub struct HttpServer<R: ProductRepository, S: RateSource> {
    state: Arc<AppState<R, S>>,
}

impl<R: ProductRepository, S: RateSource> HttpServer<R, S> {
    /// Creates a new HTTP server with the given services.
    pub fn new(products: ProductService<R>, converter: CurrencyConverter<S>) -> Self {
        Self {
            state: Arc::new(AppState {
                products,
                converter,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/products", post(handlers::create_product::<R, S>))
            .route("/api/products", get(handlers::list_products::<R, S>))
            .route(
                "/api/products",
                delete(handlers::delete_all_products::<R, S>),
            )
            .route("/api/products/{id}", get(handlers::get_product::<R, S>))
            .route("/api/products/{id}", put(handlers::update_product::<R, S>))
            .route(
                "/api/products/{id}",
                delete(handlers::delete_product::<R, S>),
            )
            .route(
                "/api/products/{id}/price",
                get(handlers::get_product_price::<R, S>),
            )
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
