//! Mock REST routes
//!
//! | Group | Guard |
//! |---|---|
//! | `POST /auth/login` | public |
//! | `GET /auth/check-profile` | any signed-in user |
//! | everything else | admin |

mod auth;
mod catalog;
mod coupons;
mod orders;
mod people;
mod refunds;
mod settings;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::MockState;
use crate::{API_PREFIX, journal};

/// Full application router, ready to serve or to drive with `oneshot`.
pub fn router(state: MockState) -> Router {
    let public = auth::public_routes();

    let signed_in = auth::profile_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        crate::auth::require_user,
    ));

    let admin = Router::new()
        .merge(orders::routes())
        .merge(catalog::routes())
        .merge(coupons::routes())
        .merge(people::routes())
        .merge(refunds::routes())
        .merge(settings::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_admin,
        ));

    Router::new()
        .nest(API_PREFIX, public.merge(signed_in).merge(admin))
        .layer(middleware::from_fn_with_state(state.clone(), journal::record))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bare `{ success: true, message }` acknowledgement
fn ack(message: &str) -> axum::Json<shared::response::ApiStatus> {
    axum::Json(shared::response::ApiStatus::ok_with_message(message))
}
