//! Single post display page.

use maud::{Markup, html};

use super::components::page_shell;
use crate::store::BlogEntry;

/// Render a post, or the empty display state when the id names nothing.
pub fn page(post: Option<&BlogEntry>, site_name: &str) -> Markup {
    match post {
        Some(post) => {
            let body = html! {
                article class="post-page" {
                    h1 class="post-subject" { (post.subject) }
                    div class="post-content" { (post.content) }
                }
            };
            page_shell(&post.subject, site_name, body)
        }
        None => {
            let body = html! {
                div class="empty-state" {
                    p { "This post does not exist." }
                    a href="/blog" { "Back to the front page" }
                }
            };
            page_shell("Post not found", site_name, body)
        }
    }
}
