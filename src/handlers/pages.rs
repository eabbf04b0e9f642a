//! # Page Handlers
//!
//! The login page. Everything else is served from the static directory.

use axum::{extract::Query, response::Html};
use serde::Deserialize;
use url::form_urlencoded;

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// Login page
///
/// ## Route
/// GET /login?next=/dashboard
///
/// The form posts to `/api/session`, which issues the session cookie. When
/// `next` is a local path it is forwarded so the visitor lands back where the
/// gate stopped them.
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(render_login(query.next.as_deref()))
}

/// Only same-origin paths are accepted as a return target
///
/// `//evil.example` is protocol-relative and would leave the site.
fn local_next(next: Option<&str>) -> Option<&str> {
    next.filter(|path| path.starts_with('/') && !path.starts_with("//") && !path.contains('\\'))
}

fn render_login(next: Option<&str>) -> String {
    // Form encoding leaves no HTML-significant characters in the action.
    let action = match local_next(next) {
        Some(path) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("next", path)
                .finish();
            format!("/api/session?{query}")
        }
        None => "/api/session".to_string(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Sign in</title></head>
<body>
<form method="post" action="{action}">
<label>Username <input name="username" autocomplete="username" required></label>
<label>Password <input name="password" type="password" autocomplete="current-password" required></label>
<button type="submit">Sign in</button>
</form>
<p><a href="/signup">Create an account</a></p>
</body>
</html>
"#
    )
}
