//! Route classification for the authorization gate.
//!
//! Every path maps to exactly one class. Public patterns are consulted
//! first so that routes which must never be gated (webhooks, the portal
//! surface and its APIs, sign-in itself) cannot be shadowed by the
//! broader API and page rules.

/// The protection class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Forwarded unconditionally; no staff auth check runs.
    Public,
    /// Machine API surface; unauthenticated requests get a 401 body.
    Api,
    /// Browser-navigable staff surface; unauthenticated requests are
    /// redirected to sign-in.
    Protected,
}

/// Patterns that bypass the staff gate entirely.
///
/// `/api/parent*`, `/api/account*`, and `/portal*` are public *at the
/// gate*: those handlers enforce their own portal sessions internally.
const PUBLIC_PATTERNS: &[&str] = &[
    "/",
    "/sign-in*",
    "/sign-up*",
    "/industries*",
    "/portal*",
    "/api/health*",
    "/api/webhooks*",
    "/api/parent*",
    "/api/account*",
];

/// Classify a request path.
///
/// Total over all inputs: public patterns win, anything else under
/// `/api` is `Api`, and every remaining path (including `/admin*`) is a
/// staff page.
pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_PATTERNS.iter().any(|p| glob_matches(p, path)) {
        return RouteClass::Public;
    }
    if path == "/api" || path.starts_with("/api/") {
        return RouteClass::Api;
    }
    RouteClass::Protected
}

/// Match a single pattern: a trailing `*` matches any suffix, otherwise
/// the pattern must equal the path exactly.
fn glob_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => path.starts_with(prefix),
        None => path == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_public_but_not_a_prefix() {
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/dashboard"), RouteClass::Protected);
    }

    #[test]
    fn test_sign_in_and_marketing_pages_are_public() {
        assert_eq!(classify("/sign-in"), RouteClass::Public);
        assert_eq!(classify("/sign-in/sso-callback"), RouteClass::Public);
        assert_eq!(classify("/sign-up"), RouteClass::Public);
        assert_eq!(classify("/industries/gymnastics"), RouteClass::Public);
    }

    #[test]
    fn test_webhooks_are_never_gated() {
        assert_eq!(classify("/api/webhooks/payments"), RouteClass::Public);
    }

    #[test]
    fn test_portal_surface_is_public_at_the_gate() {
        assert_eq!(classify("/portal"), RouteClass::Public);
        assert_eq!(classify("/portal/schedule"), RouteClass::Public);
        assert_eq!(classify("/api/parent/profile"), RouteClass::Public);
        assert_eq!(classify("/api/account/profile"), RouteClass::Public);
    }

    #[test]
    fn test_staff_api_routes_are_api() {
        assert_eq!(classify("/api/classes"), RouteClass::Api);
        assert_eq!(classify("/api/classes/123"), RouteClass::Api);
        assert_eq!(classify("/api/club"), RouteClass::Api);
        assert_eq!(classify("/api/dashboard"), RouteClass::Api);
        assert_eq!(classify("/api"), RouteClass::Api);
    }

    #[test]
    fn test_staff_pages_are_protected() {
        assert_eq!(classify("/admin"), RouteClass::Protected);
        assert_eq!(classify("/admin/members"), RouteClass::Protected);
        assert_eq!(classify("/settings"), RouteClass::Protected);
    }

    #[test]
    fn test_classification_is_total() {
        // Nothing panics, every input lands in exactly one class.
        for path in ["", "/", "//", "/api", "/api/", "/ADMIN", "/api/parentx", "/x/y/z"] {
            let _ = classify(path);
        }
    }
}
