//! New post submission form.

use maud::{Markup, html};

use super::components::{field_error, page_shell};

/// Render the submission form, echoing prior input and an error message
/// when a submission was rejected.
pub fn page(subject: &str, content: &str, error: &str, site_name: &str) -> Markup {
    let body = html! {
        div class="form-page" {
            h1 { "New post" }
            form method="post" action="/blog/newpost" {
                div class="form-field" {
                    label for="subject" { "Subject" }
                    input id="subject" name="subject" type="text" value=(subject);
                }
                div class="form-field" {
                    label for="content" { "Content" }
                    textarea id="content" name="content" { (content) }
                }
                (field_error(error))
                div class="form-actions" {
                    button type="submit" { "Publish" }
                }
            }
        }
    };

    page_shell("New post", site_name, body)
}
