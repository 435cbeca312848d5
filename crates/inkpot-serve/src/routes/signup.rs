//! Registration and welcome handlers.
//!
//! Registration never persists a user record; the only trace of a
//! successful signup is the signed `username` cookie. The "already
//! exists" check therefore only sees the browser's own cookie; two
//! clients can register the same name.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use inkpot_core::{valid_email, valid_password, valid_username};
use maud::Markup;
use serde::Deserialize;

use crate::render;
use crate::session;
use crate::state::AppState;

/// Form body for `POST /blog/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub verify: String,
    #[serde(default)]
    pub email: String,
}

/// `GET /blog/signup`
///
/// Render the empty registration form.
pub async fn signup_form(State(state): State<AppState>) -> Markup {
    render::signup::page("", "", "", "", "", &state.config.site_name)
}

/// `POST /blog/signup`
///
/// Validate the submission; on success set the signed `username` cookie
/// and redirect to the welcome page, otherwise re-render the form with
/// the submitted username and email and the applicable error messages.
pub async fn submit_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignupForm>,
) -> Response {
    let mut username_ok = valid_username(&form.username);
    let pwd_ok = valid_password(&form.password) && form.password == form.verify;
    let email_ok = valid_email(&form.email);

    // The already-exists check only fires for an otherwise valid name, so
    // the two username messages are mutually exclusive per attempt.
    let mut username_error = "That's not a valid username.";
    if username_ok {
        if let Some(existing) = session::read_username(&headers) {
            if existing == form.username {
                username_ok = false;
                username_error = "Username already exists.";
            }
        }
    }

    if username_ok && pwd_ok && email_ok {
        tracing::info!(username = %form.username, "user registered");

        let mut response = Redirect::to("/blog/signup/welcome").into_response();
        if let Some(cookie) = session::username_cookie(&form.username) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
        response
    } else {
        render::signup::page(
            &form.username,
            &form.email,
            if username_ok { "" } else { username_error },
            if pwd_ok { "" } else { "Your passwords didn't match." },
            if email_ok { "" } else { "That's not a valid email address." },
            &state.config.site_name,
        )
        .into_response()
    }
}

/// `GET /blog/signup/welcome`
///
/// Greet the registered user, or send visitors without a valid session
/// cookie back to the registration form.
pub async fn welcome(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match session::read_username(&headers) {
        Some(username) => {
            render::welcome::page(&username, &state.config.site_name).into_response()
        }
        None => Redirect::to("/blog/signup").into_response(),
    }
}
