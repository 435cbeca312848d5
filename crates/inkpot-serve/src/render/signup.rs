//! Registration form.

use maud::{Markup, html};

use super::components::{field_error, page_shell};

/// Render the registration form.
///
/// Username and email are echoed back on a rejected submission; the
/// password fields never are. The three error slots are independent;
/// any subset can be set at once.
pub fn page(
    username: &str,
    email: &str,
    error_username: &str,
    error_password: &str,
    error_email: &str,
    site_name: &str,
) -> Markup {
    let body = html! {
        div class="form-page" {
            h1 { "Sign up" }
            form method="post" action="/blog/signup" {
                div class="form-field" {
                    label for="username" { "Username" }
                    input id="username" name="username" type="text" value=(username);
                    (field_error(error_username))
                }
                div class="form-field" {
                    label for="password" { "Password" }
                    input id="password" name="password" type="password";
                    (field_error(error_password))
                }
                div class="form-field" {
                    label for="verify" { "Verify password" }
                    input id="verify" name="verify" type="password";
                }
                div class="form-field" {
                    label for="email" { "Email (optional)" }
                    input id="email" name="email" type="text" value=(email);
                    (field_error(error_email))
                }
                div class="form-actions" {
                    button type="submit" { "Sign up" }
                }
            }
        }
    };

    page_shell("Sign up", site_name, body)
}
