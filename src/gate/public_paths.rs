//! The allowlist of path prefixes that skip the session check.

/// Path prefixes that never require a session.
///
/// The login and signup pages must stay reachable while logged out, the
/// session endpoint is how a session gets created, and the favicon and
/// framework assets are fetched by the browser on every page including the
/// login page.
pub const DEFAULT_PUBLIC_PATHS: [&str; 5] = ["/login", "/signup", "/api/session", "/favicon", "/_next"];

/// Ordered, immutable list of public path prefixes
///
/// Matching is a plain case-sensitive `starts_with` against the raw request
/// path. There is no normalisation: `/login` also admits `/loginx` and
/// `/login/anything`, while `/Login` is not public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPaths {
    prefixes: Vec<String>,
}

impl PublicPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// First prefix (in list order) that `path` starts with
    pub fn matching(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| path.starts_with(prefix))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PublicPaths {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PATHS)
    }
}
