/// HTTP router assembly
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router.
///
/// Every `/users` route sits behind the access guard, which lets reads
/// through and checks the credential on everything else.
pub fn create_router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/", get(api::users::list_users).post(api::users::create_user))
        .route(
            "/schema",
            post(api::users::create_user_with_schema)
                .get(api::users::get_schema_user)
                .patch(api::users::update_schema_user)
                .delete(api::users::delete_schema_user),
        )
        .route(
            "/restore/:identification_number",
            post(api::users::restore_user),
        )
        .route(
            "/:identification_number",
            get(api::users::get_user)
                .patch(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.access_guard),
            middleware::access_guard_middleware,
        ));

    Router::new()
        .route("/health", get(api::health::health))
        .nest("/users", user_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
