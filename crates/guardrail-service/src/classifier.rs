//! Self-escalation classifier.

use guardrail_core::events::{AuditEnvelope, AuditEvent, IdentityType};
use guardrail_core::types::Decision;

/// CloudTrail event name for adding a user to a group.
pub const ADD_USER_TO_GROUP: &str = "AddUserToGroup";

/// Decide whether an audit event is an IAM user adding themself to a group.
///
/// All three must hold for [`Decision::Revoke`]:
/// 1. the actor is an IAM user,
/// 2. the action is `AddUserToGroup`,
/// 3. the target user is the actor.
///
/// Names are compared byte for byte. Any missing or empty field the rule
/// needs yields [`Decision::NoAction`].
pub fn classify(event: &AuditEvent) -> Decision {
    let Some(identity) = event.user_identity.as_ref() else {
        return Decision::NoAction;
    };

    // userName is only defined for IAM users; never read it otherwise.
    if identity.identity_type != Some(IdentityType::IamUser) {
        return Decision::NoAction;
    }

    if event.event_name.as_deref() != Some(ADD_USER_TO_GROUP) {
        return Decision::NoAction;
    }

    let Some(actor) = non_empty(identity.user_name.as_deref()) else {
        return Decision::NoAction;
    };

    let Some(params) = event.request_parameters.as_ref() else {
        return Decision::NoAction;
    };

    let (Some(target), Some(group)) = (
        non_empty(params.user_name.as_deref()),
        non_empty(params.group_name.as_deref()),
    ) else {
        return Decision::NoAction;
    };

    if target != actor {
        return Decision::NoAction;
    }

    Decision::Revoke {
        user_name: actor.to_string(),
        group_name: group.to_string(),
    }
}

/// Classify the record carried by a delivery envelope.
///
/// An envelope without a `detail` record is not a match.
pub fn classify_envelope(envelope: &AuditEnvelope) -> Decision {
    envelope
        .detail
        .as_ref()
        .map_or(Decision::NoAction, classify)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardrail_core::events::{RequestParameters, UserIdentity};

    fn event(
        event_name: &str,
        identity_type: IdentityType,
        actor: &str,
        target: &str,
        group: &str,
    ) -> AuditEvent {
        AuditEvent {
            event_name: Some(event_name.to_string()),
            user_identity: Some(UserIdentity {
                identity_type: Some(identity_type),
                user_name: Some(actor.to_string()),
                ..UserIdentity::default()
            }),
            request_parameters: Some(RequestParameters {
                user_name: Some(target.to_string()),
                group_name: Some(group.to_string()),
            }),
            ..AuditEvent::default()
        }
    }

    fn self_add() -> AuditEvent {
        event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "alice", "Admins")
    }

    fn revoke(user: &str, group: &str) -> Decision {
        Decision::Revoke {
            user_name: user.to_string(),
            group_name: group.to_string(),
        }
    }

    #[test]
    fn test_self_add_is_revoked() {
        assert_eq!(classify(&self_add()), revoke("alice", "Admins"));
    }

    #[test]
    fn test_adding_another_user_is_ignored() {
        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "bob", "Admins");
        assert_eq!(classify(&ev), Decision::NoAction);
    }

    #[test]
    fn test_non_iam_user_principals_are_ignored() {
        for kind in [
            IdentityType::AssumedRole,
            IdentityType::Root,
            IdentityType::AwsService,
            IdentityType::AwsAccount,
            IdentityType::FederatedUser,
            IdentityType::Unknown,
        ] {
            let ev = event(ADD_USER_TO_GROUP, kind, "alice", "alice", "Admins");
            assert_eq!(classify(&ev), Decision::NoAction, "{kind} must not match");
        }
    }

    #[test]
    fn test_other_event_names_are_ignored() {
        for name in [
            "RemoveUserFromGroup",
            "CreateGroup",
            "addusertogroup",
            "AddUserToGroup ",
            "",
        ] {
            let ev = event(name, IdentityType::IamUser, "alice", "alice", "Admins");
            assert_eq!(classify(&ev), Decision::NoAction, "{name:?} must not match");
        }
    }

    #[test]
    fn test_user_names_compare_exactly() {
        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "Alice", "Admins");
        assert_eq!(classify(&ev), Decision::NoAction);

        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "alice ", "Admins");
        assert_eq!(classify(&ev), Decision::NoAction);
    }

    #[test]
    fn test_group_name_is_passed_through_verbatim() {
        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "alice", "Ops+Admins");
        assert_eq!(classify(&ev), revoke("alice", "Ops+Admins"));
    }

    #[test]
    fn test_missing_identity_type() {
        let mut ev = self_add();
        if let Some(identity) = ev.user_identity.as_mut() {
            identity.identity_type = None;
        }
        assert_eq!(classify(&ev), Decision::NoAction);
    }

    #[test]
    fn test_missing_fields_yield_no_action() {
        let mut ev = self_add();
        ev.user_identity = None;
        assert_eq!(classify(&ev), Decision::NoAction);

        let mut ev = self_add();
        ev.request_parameters = None;
        assert_eq!(classify(&ev), Decision::NoAction);

        let mut ev = self_add();
        ev.event_name = None;
        assert_eq!(classify(&ev), Decision::NoAction);

        let mut ev = self_add();
        if let Some(params) = ev.request_parameters.as_mut() {
            params.group_name = None;
        }
        assert_eq!(classify(&ev), Decision::NoAction);

        assert_eq!(classify(&AuditEvent::default()), Decision::NoAction);
    }

    #[test]
    fn test_missing_actor_and_target_are_not_equal() {
        let mut ev = self_add();
        if let Some(identity) = ev.user_identity.as_mut() {
            identity.user_name = None;
        }
        if let Some(params) = ev.request_parameters.as_mut() {
            params.user_name = None;
        }
        assert_eq!(classify(&ev), Decision::NoAction);
    }

    #[test]
    fn test_empty_names_yield_no_action() {
        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "", "", "Admins");
        assert_eq!(classify(&ev), Decision::NoAction);

        let ev = event(ADD_USER_TO_GROUP, IdentityType::IamUser, "alice", "alice", "");
        assert_eq!(classify(&ev), Decision::NoAction);
    }

    #[test]
    fn test_envelope_without_detail() {
        assert_eq!(classify_envelope(&AuditEnvelope::default()), Decision::NoAction);
        assert_eq!(
            classify_envelope(&AuditEnvelope::wrap(self_add())),
            revoke("alice", "Admins")
        );
    }

    #[test]
    fn test_classify_is_deterministic() {
        let ev = self_add();
        assert_eq!(classify(&ev), classify(&ev));
    }
}
