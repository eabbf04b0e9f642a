use crate::gate::{Decision, GateRequest};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use cookie::Cookie;

/// Axum request as seen by the gate
struct HttpRequest<'a>(&'a Request);

impl GateRequest for HttpRequest<'_> {
    fn path(&self) -> &str {
        self.0.uri().path()
    }

    fn query(&self) -> Option<&str> {
        self.0.uri().query()
    }

    // HTTP/2 clients may split cookies across several headers. The last
    // occurrence of a name wins, in header order.
    fn cookie(&self, name: &str) -> Option<String> {
        self.0
            .headers()
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(parse_pair)
            .filter(|(pair_name, _)| pair_name == name)
            .map(|(_, value)| value)
            .last()
    }
}

/// One `name=value` pair from a `Cookie` header, value percent-decoded
///
/// A bare `name` with no `=` reads as `"true"`, matching the frontend
/// framework's own cookie parser. Pairs that fail to decode are skipped.
fn parse_pair(pair: &str) -> Option<(String, String)> {
    let pair = pair.trim();
    if pair.is_empty() {
        return None;
    }
    if !pair.contains('=') {
        return Some((pair.to_string(), "true".to_string()));
    }

    let cookie = Cookie::parse_encoded(pair).ok()?;
    Some((cookie.name().to_string(), cookie.value().to_string()))
}

pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.matcher.applies(request.uri().path()) {
        return next.run(request).await;
    }

    let decision = state.gate.evaluate(&HttpRequest(&request));
    match decision {
        Decision::Continue => next.run(request).await,
        Decision::RedirectTo(location) => Redirect::temporary(&location).into_response(),
    }
}
