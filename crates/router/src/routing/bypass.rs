//! Path prefixes that skip tenant routing

/// Matches request paths against the configured bypass prefixes
///
/// A prefix matches on a segment boundary: `/api` matches `/api` and
/// `/api/orders`, not `/apiary`.
#[derive(Debug, Clone, Default)]
pub struct BypassMatcher {
    prefixes: Vec<String>,
}

impl BypassMatcher {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.as_ref().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    pub fn is_bypassed(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::DEFAULT_BYPASS_PREFIXES;

    #[test]
    fn test_default_prefixes() {
        let matcher = BypassMatcher::new(DEFAULT_BYPASS_PREFIXES);
        assert!(matcher.is_bypassed("/api"));
        assert!(matcher.is_bypassed("/api/anything"));
        assert!(matcher.is_bypassed("/_next/static/chunk.js"));
        assert!(matcher.is_bypassed("/static/logo.png"));
        assert!(matcher.is_bypassed("/favicon.ico"));

        assert!(!matcher.is_bypassed("/"));
        assert!(!matcher.is_bypassed("/apiary"));
        assert!(!matcher.is_bypassed("/products/api"));
        assert!(!matcher.is_bypassed("/favicon.ico.bak"));
    }

    #[test]
    fn test_trailing_slash_in_prefix() {
        let matcher = BypassMatcher::new(["/assets/"]);
        assert!(matcher.is_bypassed("/assets"));
        assert!(matcher.is_bypassed("/assets/app.css"));
    }

    #[test]
    fn test_empty_matcher_bypasses_nothing() {
        assert!(!BypassMatcher::default().is_bypassed("/api"));
    }
}
