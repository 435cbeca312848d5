//! Post listing, submission, and display handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;
use serde::Deserialize;

use crate::error::BlogError;
use crate::render;
use crate::state::AppState;

/// Form body for `POST /blog/newpost`.
#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub content: String,
}

/// `GET /blog`
///
/// Render the front page listing all posts.
pub async fn front_page(State(state): State<AppState>) -> Result<Markup, BlogError> {
    let posts = state.store.list_all()?;
    Ok(render::front::page(&posts, &state.config.site_name))
}

/// `GET /blog/newpost`
///
/// Render the empty submission form.
pub async fn new_post_form(State(state): State<AppState>) -> Markup {
    render::new_post::page("", "", "", &state.config.site_name)
}

/// `POST /blog/newpost`
///
/// Create the post and redirect to it when both fields are filled in;
/// otherwise re-render the form with the submitted values and an error.
pub async fn submit_post(
    State(state): State<AppState>,
    Form(form): Form<NewPostForm>,
) -> Result<Response, BlogError> {
    if form.subject.is_empty() || form.content.is_empty() {
        let page = render::new_post::page(
            &form.subject,
            &form.content,
            "Please enter subject and content",
            &state.config.site_name,
        );
        return Ok(page.into_response());
    }

    let id = state.store.create(&form.subject, &form.content)?;
    tracing::info!(id, "post created");

    Ok(Redirect::to(&format!("/blog/{id}")).into_response())
}

/// `GET /blog/{id}`
///
/// Display a single post. The path segment must be all digits; anything
/// else is a 404, matching a digits-only route pattern. An id that names
/// no post renders the display page's empty state with a 404 status; the
/// template tolerates the absent post rather than erroring.
pub async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, BlogError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BlogError::NotFound(format!("/blog/{id}")));
    }

    // All-digit strings too large for i64 cannot name a stored post.
    let post = match id.parse::<i64>() {
        Ok(id) => state.store.get_by_id(id)?,
        Err(_) => None,
    };

    let site_name = &state.config.site_name;
    let response = match post {
        Some(ref post) => render::post::page(Some(post), site_name).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            render::post::page(None, site_name),
        )
            .into_response(),
    };

    Ok(response)
}
