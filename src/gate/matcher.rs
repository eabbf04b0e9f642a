//! Which requests reach the gate at all.
//!
//! The frontend's routing pattern is `/((?!_next/static|_next/image|favicon.ico).*)`:
//! every path except those whose remainder after the leading slash begins
//! with one of the three excluded segments. The lookahead only anchors at the
//! start, so this is a prefix exclusion (`/_next/static/x.js` and
//! `/favicon.icox` are both skipped).

/// Prefixes excluded from gating by the routing pattern
pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 3] = ["/_next/static", "/_next/image", "/favicon.ico"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatcher {
    excluded: Vec<String>,
}

impl RouteMatcher {
    pub fn excluding<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the gate must evaluate `path`
    pub fn applies(&self, path: &str) -> bool {
        !self.excluded.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::excluding(DEFAULT_EXCLUDED_PREFIXES)
    }
}
