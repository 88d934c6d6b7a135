use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::health_check;
use crate::handlers::users::{
    create_user, get_user, list_users, update_user, user_method_not_allowed,
    users_method_not_allowed,
};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .head(users_method_not_allowed)
                .fallback(users_method_not_allowed),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .head(user_method_not_allowed)
                .fallback(user_method_not_allowed),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
}
