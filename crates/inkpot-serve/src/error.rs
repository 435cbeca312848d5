//! Error types for the blog.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Validation failures are not
//! errors; handlers re-render their forms for those.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Blog error type.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// The requested path does not name anything.
    #[error("not found: {0}")]
    NotFound(String),

    /// SQLite query error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("There is nothing at {msg}."),
            ),
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service Unavailable",
                    "The database is temporarily unavailable. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/blog" { "Back to the front page" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        let err = BlogError::NotFound("/blog/abc".to_string());
        assert_eq!(err.to_string(), "not found: /blog/abc");
    }

    #[test]
    fn error_display_internal() {
        let err = BlogError::Internal(anyhow::anyhow!("something broke"));
        assert_eq!(err.to_string(), "internal error: something broke");
    }

    #[test]
    fn error_into_response_not_found() {
        let err = BlogError::NotFound("/blog/abc".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_into_response_database() {
        let err = BlogError::Database(rusqlite::Error::InvalidQuery);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_into_response_internal() {
        let err = BlogError::Internal(anyhow::anyhow!("boom"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
