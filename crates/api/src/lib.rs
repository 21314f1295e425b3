//! HTTP API server with observability for the food-ordering backend.
//!
//! Thin axum handlers over the domain services: each route validates
//! shape, calls exactly one domain operation, and serializes the
//! result. Structured logging via tracing, Prometheus metrics on
//! `/metrics`.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{delete, get, post};
use domain::{CartService, MenuService, OrderService, SavedItemService, UserService};
use entity_store::MemStorage;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state: one service per domain slice, all backed
/// by the same injected store.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuService,
    pub cart: CartService,
    pub orders: OrderService,
    pub saved: SavedItemService,
    pub users: UserService,
}

impl AppState {
    /// Builds the services over one shared store.
    pub fn new(storage: MemStorage) -> Self {
        Self {
            menu: MenuService::new(storage.clone()),
            cart: CartService::new(storage.clone()),
            orders: OrderService::new(storage.clone()),
            saved: SavedItemService::new(storage.clone()),
            users: UserService::new(storage),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/menu", get(routes::menu::list))
        .route("/api/menu/featured", get(routes::menu::featured))
        .route("/api/menu/popular", get(routes::menu::popular))
        .route("/api/menu/search", get(routes::menu::search))
        .route("/api/menu/category/{categoryId}", get(routes::menu::by_category))
        .route("/api/menu/{id}", get(routes::menu::get))
        .route("/api/categories", get(routes::menu::categories))
        .route("/api/cart", post(routes::cart::add))
        .route(
            "/api/cart/{id}",
            get(routes::cart::get)
                .put(routes::cart::update)
                .delete(routes::cart::remove),
        )
        .route("/api/cart/user/{userId}", delete(routes::cart::clear))
        .route("/api/orders/{userId}", get(routes::orders::list))
        .route("/api/orders", post(routes::orders::create))
        .route("/api/saved/{userId}", get(routes::saved::list))
        .route("/api/saved", post(routes::saved::add))
        .route(
            "/api/saved/{userId}/{menuItemId}",
            delete(routes::saved::remove),
        )
        .route("/api/users", post(routes::users::create))
        .route("/api/users/{id}", get(routes::users::get))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
