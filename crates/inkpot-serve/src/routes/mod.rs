//! Route definitions for the blog.
//!
//! ## Routes
//!
//! - `GET /` - Redirect to the front page
//! - `GET /health` - Health check (JSON)
//! - `GET /blog` - Front page listing all posts
//! - `GET,POST /blog/newpost` - Submission form / create a post
//! - `GET /blog/{id}` - Single post display (digits only)
//! - `GET,POST /blog/signup` - Registration form / register
//! - `GET /blog/signup/welcome` - Post-registration welcome page

mod blog;
mod health;
mod signup;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete blog router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/blog") }))
        .route("/health", get(health::health_check))
        .route("/blog", get(blog::front_page))
        .route(
            "/blog/newpost",
            get(blog::new_post_form).post(blog::submit_post),
        )
        .route("/blog/{id}", get(blog::show_post))
        .route(
            "/blog/signup",
            get(signup::signup_form).post(signup::submit_signup),
        )
        .route("/blog/signup/welcome", get(signup::welcome))
        .with_state(state)
}
