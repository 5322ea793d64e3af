use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::system::auth::middleware::require_auth;

/// All application routes, versioned under /api/v1.
///
/// Mutating endpoints require the `x-auth-token` header; on routes that
/// mix public reads with protected writes the token is checked by the
/// `CurrentUser` extractor instead of a route-level layer.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH
        // ========================================
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route(
            "/api/v1/auth/profile",
            post(handlers::auth::profile).layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // USERS
        // ========================================
        .route("/api/v1/users", post(handlers::users::register))
        .route(
            "/api/v1/users/sendemail",
            post(handlers::users::send_email).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/users/:id",
            get(handlers::users::get_by_id)
                .patch(handlers::users::update)
                .delete(handlers::users::delete),
        )
        // ========================================
        // ORDERS
        // ========================================
        .route(
            "/api/v1/orders",
            get(handlers::orders::list)
                .post(handlers::orders::create)
                .layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/orders/favorites/:id",
            get(handlers::orders::list_favourites),
        )
        .route(
            "/api/v1/orders/:id",
            get(handlers::orders::get_by_id)
                .patch(handlers::orders::update)
                .delete(handlers::orders::delete),
        )
        .route(
            "/api/v1/orders/:id/products",
            get(handlers::orders::list_products),
        )
        .route(
            "/api/v1/orders/:id/suppliers",
            get(handlers::orders::list_suppliers),
        )
        .route(
            "/api/v1/orders/:id/add/:productId",
            post(handlers::orders::add_product).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/orders/:id/remove/:productId",
            post(handlers::orders::remove_product).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/orders/:id/addsup/:supplierId",
            post(handlers::orders::add_supplier).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/orders/:id/removesup/:supplierId",
            post(handlers::orders::remove_supplier).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/v1/orders/:id/removeproducts/:supplierId",
            post(handlers::orders::remove_supplier_products)
                .layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // PRODUCTS
        // ========================================
        .route("/api/v1/products", get(handlers::products::list))
        .route(
            "/api/v1/products/all/:id",
            get(handlers::products::list_all_for_user),
        )
        .route(
            "/api/v1/products/user/:id",
            get(handlers::products::list_for_user),
        )
        .route(
            "/api/v1/products/supplier/:id",
            get(handlers::products::list_for_supplier),
        )
        .route(
            "/api/v1/products/:id",
            get(handlers::products::get_by_id)
                .post(handlers::products::create)
                .patch(handlers::products::update)
                .delete(handlers::products::hard_delete),
        )
        .route(
            "/api/v1/products/:id/delete",
            post(handlers::products::soft_delete).layer(middleware::from_fn(require_auth)),
        )
        // ========================================
        // SUPPLIERS
        // ========================================
        .route(
            "/api/v1/suppliers",
            get(handlers::suppliers::list).post(handlers::suppliers::create),
        )
        .route(
            "/api/v1/suppliers/all/:id",
            get(handlers::suppliers::list_all_for_user),
        )
        .route(
            "/api/v1/suppliers/user/:id",
            get(handlers::suppliers::list_for_user),
        )
        .route(
            "/api/v1/suppliers/:id",
            get(handlers::suppliers::get_by_id)
                .patch(handlers::suppliers::update)
                .delete(handlers::suppliers::hard_delete),
        )
        .route(
            "/api/v1/suppliers/:id/delete",
            post(handlers::suppliers::soft_delete).layer(middleware::from_fn(require_auth)),
        )
}
