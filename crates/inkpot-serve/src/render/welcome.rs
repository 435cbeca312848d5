//! Registration success page.

use maud::{Markup, html};

use super::components::page_shell;

/// Render the welcome page for a freshly registered user.
pub fn page(username: &str, site_name: &str) -> Markup {
    let body = html! {
        div class="welcome" {
            h1 { "Welcome, " (username) "!" }
            p {
                "Your account is ready. "
                a href="/blog/newpost" { "Write your first post" }
                " or "
                a href="/blog" { "browse the blog" }
                "."
            }
        }
    };

    page_shell("Welcome", site_name, body)
}
