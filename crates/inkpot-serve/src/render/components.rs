//! Shared HTML components used across all blog pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all blog pages.
///
/// Flat design, no external assets. Spacing and subtle background shifts
/// for hierarchy rather than borders and shadows.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafaf7;--fg:#1d1d1b;--fg2:#55534e;--fg3:#999590;--accent:#1a6b52;--accent-hover:#12503d;--border:rgba(26,107,82,.18);--error:#b3261e}
body{font-family:Georgia,"Times New Roman",serif;line-height:1.65;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:640px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.masthead{max-width:640px;width:100%;display:flex;align-items:baseline;gap:1.25rem;padding-bottom:1.25rem;margin-bottom:1.5rem;border-bottom:1px solid var(--border)}
.masthead-title{font-size:1.6rem;font-weight:700;letter-spacing:-.02em;color:var(--fg)}
.masthead-title:hover{text-decoration:none;color:var(--accent)}
.masthead-nav{margin-left:auto;display:flex;gap:1rem;font-size:.95rem}

.post-card{padding:1.25rem 0;border-bottom:1px solid var(--border)}
.post-card:last-child{border-bottom:none}
.post-subject{font-size:1.25rem;font-weight:700;line-height:1.3}
.post-subject a{color:var(--fg)}
.post-subject a:hover{color:var(--accent);text-decoration:none}
.post-content{margin-top:.5rem;white-space:pre-wrap;word-break:break-word;color:var(--fg2)}

.post-page .post-subject{font-size:1.6rem}
.post-page .post-content{margin-top:.75rem;color:var(--fg);font-size:1.05rem}

.empty-state{text-align:center;color:var(--fg3);padding:3rem 0}
.empty-state p{margin-bottom:.75rem}

.form-page h1{font-size:1.4rem;margin-bottom:1.25rem}
.form-field{margin-bottom:1rem}
.form-field label{display:block;font-size:.9rem;color:var(--fg2);margin-bottom:.3rem}
.form-field input,.form-field textarea{width:100%;padding:.5rem .6rem;font:inherit;color:var(--fg);background:#fff;border:1px solid var(--border);border-radius:6px}
.form-field textarea{min-height:12rem;resize:vertical}
.form-field input:focus,.form-field textarea:focus{outline:2px solid var(--accent);outline-offset:-1px}
.form-error{color:var(--error);font-size:.9rem;margin-top:.3rem}
.form-actions{margin-top:1.25rem}
.form-actions button{font:inherit;font-size:.95rem;font-weight:600;color:#fff;background:var(--accent);border:none;border-radius:6px;padding:.55rem 1.2rem;cursor:pointer}
.form-actions button:hover{background:var(--accent-hover)}

.welcome{text-align:center;padding:3rem 0}
.welcome h1{font-size:1.8rem;margin-bottom:.75rem}
.welcome p{color:var(--fg2)}

@media(prefers-color-scheme:dark){
:root{--bg:#15171a;--fg:#e8e6e1;--fg2:#a8a49d;--fg3:#6b6862;--accent:#4fae8d;--accent-hover:#6cc4a5;--border:rgba(79,174,141,.25);--error:#f2b8b5}
.form-field input,.form-field textarea{background:#1d2024}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Georgia,"Times New Roman",serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafaf7;color:#1d1d1b;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#1a6b52}
@media(prefers-color-scheme:dark){
body{background:#15171a;color:#e8e6e1}
.error-page p{color:#aaa}
.error-page a{color:#4fae8d}
}
"#;

/// Render the full HTML page shell: `<head>`, masthead, and body content.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="masthead" {
                    a class="masthead-title" href="/blog" { (site_name) }
                    nav class="masthead-nav" {
                        a href="/blog/newpost" { "New post" }
                        a href="/blog/signup" { "Sign up" }
                    }
                }
                main {
                    (body_content)
                }
            }
        }
    }
}

/// An inline field error message, rendered only when one applies.
pub fn field_error(message: &str) -> Markup {
    html! {
        @if !message.is_empty() {
            div class="form-error" { (message) }
        }
    }
}
