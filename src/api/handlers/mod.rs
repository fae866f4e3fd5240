//! HTTP request handlers.

pub mod health_handler;
pub mod pages;
pub mod signup_handler;

use axum::{
    response::Redirect,
    routing::{any, get},
    Router,
};

use crate::api::AppState;
use crate::config::{PATH_INDEX, PATH_LOGIN, PATH_SHELF, PATH_SIGNUP};
use crate::errors::AppError;

/// Create the site's page routes.
///
/// Each page also answers on its path without the trailing slash with a
/// permanent redirect that keeps the method and body.
pub fn site_routes() -> Router<AppState> {
    let pages = Router::new()
        .route(PATH_INDEX, get(pages::index))
        .route(PATH_SHELF, get(pages::shelf))
        .route(PATH_LOGIN, get(pages::login))
        .route(
            PATH_SIGNUP,
            get(signup_handler::signup_form).post(signup_handler::signup),
        );

    [PATH_INDEX, PATH_SHELF, PATH_LOGIN, PATH_SIGNUP]
        .into_iter()
        .fold(pages, |router, path| {
            router.route(
                path.trim_end_matches('/'),
                any(move || async move { Redirect::permanent(path) }),
            )
        })
}

/// Anything unrouted, including `/admin/`
pub async fn not_found() -> AppError {
    AppError::NotFound
}
