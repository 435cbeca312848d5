//! Front page: the post listing.

use maud::{Markup, html};

use super::components::page_shell;
use crate::store::BlogEntry;

/// Render the front page with all posts, newest first.
pub fn page(posts: &[BlogEntry], site_name: &str) -> Markup {
    let body = html! {
        @if posts.is_empty() {
            div class="empty-state" {
                p { "Nothing here yet." }
                a href="/blog/newpost" { "Write the first post" }
            }
        } @else {
            @for post in posts {
                article class="post-card" {
                    h2 class="post-subject" {
                        a href={ "/blog/" (post.id) } { (post.subject) }
                    }
                    div class="post-content" { (post.content) }
                }
            }
        }
    };

    page_shell("Blog", site_name, body)
}
