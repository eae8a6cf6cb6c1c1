//! The gate's pure decision logic.

use super::classifier::RouteClass;

/// What the gate does with an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Forward the request to its handler.
    Forward,
    /// Reject with an unauthorized status and a JSON error body.
    Unauthorized,
    /// Redirect the browser to the sign-in page.
    RedirectToSignIn,
}

/// Decide how to treat a request given its route class and the verified
/// staff subject, if any.
///
/// Public routes forward without any auth check. Gated routes forward
/// only for a verified staff identity; the failure mode differs between
/// the machine API (error body) and browser navigation (redirect).
pub fn decide(class: RouteClass, staff_subject: Option<&str>) -> GateDecision {
    match class {
        RouteClass::Public => GateDecision::Forward,
        RouteClass::Api | RouteClass::Protected if staff_subject.is_some() => {
            GateDecision::Forward
        }
        RouteClass::Api => GateDecision::Unauthorized,
        RouteClass::Protected => GateDecision::RedirectToSignIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_forwards_without_identity() {
        assert_eq!(decide(RouteClass::Public, None), GateDecision::Forward);
        assert_eq!(
            decide(RouteClass::Public, Some("staff_42")),
            GateDecision::Forward
        );
    }

    #[test]
    fn test_api_without_identity_is_unauthorized() {
        assert_eq!(decide(RouteClass::Api, None), GateDecision::Unauthorized);
    }

    #[test]
    fn test_page_without_identity_redirects() {
        assert_eq!(
            decide(RouteClass::Protected, None),
            GateDecision::RedirectToSignIn
        );
    }

    #[test]
    fn test_verified_staff_forwards_everywhere() {
        assert_eq!(
            decide(RouteClass::Api, Some("staff_42")),
            GateDecision::Forward
        );
        assert_eq!(
            decide(RouteClass::Protected, Some("staff_42")),
            GateDecision::Forward
        );
    }
}
