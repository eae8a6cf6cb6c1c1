//! Credential extraction from portal session cookies.
//!
//! A session cookie carries a small JSON payload naming the bearer token,
//! the account it claims to belong to, and the club that account lives
//! in. Parsing is total: any malformed, truncated, or wrong-shaped
//! payload yields `None` and is treated as "no session presented".

use serde_json::Value;
use uuid::Uuid;

/// Cookie name for parent portal sessions.
pub const PARENT_SESSION_COOKIE: &str = "parent_session";

/// Cookie name for member portal sessions.
pub const MEMBER_SESSION_COOKIE: &str = "member_session";

/// JSON field naming the account id in a parent session cookie.
pub const PARENT_SUBJECT_FIELD: &str = "parentId";

/// JSON field naming the account id in a member session cookie.
pub const MEMBER_SUBJECT_FIELD: &str = "accountId";

/// The parsed, unvalidated claim extracted from a session cookie.
///
/// Reconstructed fresh on every request and never persisted. Holding a
/// descriptor proves nothing; it only becomes a principal after the
/// stored-token check in [`SessionValidator`](super::SessionValidator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescriptor {
    /// Opaque bearer token presented by the client.
    pub token: String,
    /// The account this session claims to belong to.
    pub subject_id: Uuid,
    /// The club that account claims to live in.
    pub club_id: Uuid,
}

/// Parse a raw cookie value into a descriptor.
///
/// `subject_field` selects which JSON key names the account id
/// (`parentId` for parent cookies, `accountId` for member cookies).
/// Returns `None` for anything that is not a complete, well-formed
/// payload; a descriptor missing any of token/subject/club is absent,
/// not partially trusted.
pub fn parse_descriptor(raw: &str, subject_field: &str) -> Option<SessionDescriptor> {
    let value: Value = serde_json::from_str(raw).ok()?;

    let token = value.get("token")?.as_str()?;
    if token.is_empty() {
        return None;
    }

    let subject_id = value.get(subject_field)?.as_str()?.parse::<Uuid>().ok()?;
    let club_id = value.get("clubId")?.as_str()?.parse::<Uuid>().ok()?;

    Some(SessionDescriptor {
        token: token.to_string(),
        subject_id,
        club_id,
    })
}

/// Serialize a descriptor into the cookie payload `parse_descriptor`
/// reads back.
pub fn format_payload(descriptor: &SessionDescriptor, subject_field: &str) -> String {
    let mut map = serde_json::Map::new();
    map.insert(
        "token".to_string(),
        Value::String(descriptor.token.clone()),
    );
    map.insert(
        subject_field.to_string(),
        Value::String(descriptor.subject_id.to_string()),
    );
    map.insert(
        "clubId".to_string(),
        Value::String(descriptor.club_id.to_string()),
    );
    Value::Object(map).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_payload(token: &str, parent_id: Uuid, club_id: Uuid) -> String {
        format!(r#"{{"token":"{token}","parentId":"{parent_id}","clubId":"{club_id}"}}"#)
    }

    #[test]
    fn test_parses_well_formed_parent_cookie() {
        let parent_id = Uuid::new_v4();
        let club_id = Uuid::new_v4();
        let raw = parent_payload("t1", parent_id, club_id);

        let descriptor = parse_descriptor(&raw, PARENT_SUBJECT_FIELD).unwrap();
        assert_eq!(descriptor.token, "t1");
        assert_eq!(descriptor.subject_id, parent_id);
        assert_eq!(descriptor.club_id, club_id);
    }

    #[test]
    fn test_member_cookie_uses_account_field() {
        let account_id = Uuid::new_v4();
        let club_id = Uuid::new_v4();
        let raw =
            format!(r#"{{"token":"t1","accountId":"{account_id}","clubId":"{club_id}"}}"#);

        assert!(parse_descriptor(&raw, MEMBER_SUBJECT_FIELD).is_some());
        // The same payload read as a parent cookie has no parentId field.
        assert!(parse_descriptor(&raw, PARENT_SUBJECT_FIELD).is_none());
    }

    #[test]
    fn test_format_and_parse_roundtrip() {
        let descriptor = SessionDescriptor {
            token: "t1".to_string(),
            subject_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
        };

        let payload = format_payload(&descriptor, MEMBER_SUBJECT_FIELD);
        assert_eq!(
            parse_descriptor(&payload, MEMBER_SUBJECT_FIELD),
            Some(descriptor)
        );
    }

    #[test]
    fn test_malformed_payloads_are_absent() {
        let club_id = Uuid::new_v4();

        for raw in [
            "",
            "not json",
            "{}",
            "[1,2,3]",
            r#"{"token":"t1"}"#,
            r#"{"token":"t1","parentId":"not-a-uuid","clubId":"also-not"}"#,
            &format!(r#"{{"token":"","parentId":"{}","clubId":"{club_id}"}}"#, Uuid::new_v4()),
            &format!(r#"{{"token":42,"parentId":"{}","clubId":"{club_id}"}}"#, Uuid::new_v4()),
        ] {
            assert!(
                parse_descriptor(raw, PARENT_SUBJECT_FIELD).is_none(),
                "expected absent for {raw:?}"
            );
        }
    }
}
