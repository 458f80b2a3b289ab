//! Per-user notification assembly.
//!
//! The API layer fetches the rows a user's notification list depends on
//! (their unconfirmed staffed competitions, the board moderation queues,
//! identifier-claim state, and claimants waiting on them) and hands them
//! to [`assemble`], which applies the ordering and de-duplication rules
//! and produces the final display list. Keeping assembly pure means the
//! rules are unit-testable without a database.

use std::collections::HashSet;

use serde::Serialize;

use crate::paths;
use crate::types::DbId;

/// A single notification line: human-readable text plus a navigation target.
///
/// Transient -- built fresh on every request, never persisted. Insertion
/// order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
    pub url: String,
}

/// Minimal competition projection used by notification text and URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionRef {
    pub id: DbId,
    pub name: String,
}

/// A user whose pending competitor-ID claim names the current user as the
/// approving delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claimant {
    pub user_id: DbId,
    pub email: String,
    pub claimed_id: String,
}

/// The user's competitor-ID state, as far as notifications care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierStatus {
    /// A confirmed competitor ID is attached; nothing to prompt.
    Confirmed,
    /// A claim is pending and a delegate is assigned to approve it.
    ClaimPending {
        delegate_name: String,
        claimed_id: String,
    },
    /// No competitor ID, and no claim a delegate is handling.
    Unclaimed,
}

impl IdentifierStatus {
    /// Derive the status from the raw user fields.
    ///
    /// A pending claim only counts once a delegate is assigned to handle
    /// it; a claim without one still gets the generic prompt.
    pub fn derive(
        competitor_id: Option<&str>,
        unconfirmed_competitor_id: Option<&str>,
        claim_delegate_name: Option<&str>,
    ) -> Self {
        if competitor_id.is_some() {
            return Self::Confirmed;
        }
        match (unconfirmed_competitor_id, claim_delegate_name) {
            (Some(claimed), Some(delegate)) => Self::ClaimPending {
                delegate_name: delegate.to_string(),
                claimed_id: claimed.to_string(),
            },
            _ => Self::Unclaimed,
        }
    }
}

/// Prefetched inputs for one user's notification list.
///
/// The moderation queues (`awaiting_announcement`, `visible_unlocked`)
/// are only populated for board members; everyone else gets empty lists.
#[derive(Debug, Clone)]
pub struct NotificationInputs {
    /// Unconfirmed competitions the user delegates, in query order.
    pub delegated_unconfirmed: Vec<CompetitionRef>,
    /// Unconfirmed competitions the user organizes, in query order.
    pub organized_unconfirmed: Vec<CompetitionRef>,
    /// Confirmed but not yet publicly visible competitions (board queue).
    pub awaiting_announcement: Vec<CompetitionRef>,
    /// Visible but still unconfirmed competitions (board queue).
    pub visible_unlocked: Vec<CompetitionRef>,
    /// The user's competitor-ID claim state.
    pub identifier: IdentifierStatus,
    /// Users whose pending claims name this user as delegate, in query order.
    pub claimants: Vec<Claimant>,
    /// Whether at least one registration-eligibility check fails.
    pub profile_incomplete: bool,
}

/// Assemble the notification list for one user.
///
/// Steps run in a fixed order and each appends zero or more entries; no
/// step short-circuits another. The output order is step order, then
/// query result order -- nothing is re-sorted.
pub fn assemble(inputs: &NotificationInputs) -> Vec<Notification> {
    let mut notifications = Vec::new();

    // A competition must not show up twice when the user both organizes
    // and delegates it; uniqueness is keyed on the competition id.
    let mut seen = HashSet::new();
    for competition in inputs
        .delegated_unconfirmed
        .iter()
        .chain(&inputs.organized_unconfirmed)
    {
        if !seen.insert(competition.id) {
            continue;
        }
        notifications.push(Notification {
            text: format!("{} is not confirmed", competition.name),
            url: paths::competition_edit_path(competition.id),
        });
    }

    // Board moderation queues: competitions waiting to be announced, and
    // competitions still unlocked while already visible.
    for competition in &inputs.awaiting_announcement {
        notifications.push(Notification {
            text: format!("{} is waiting to be announced", competition.name),
            url: paths::admin_competition_edit_path(competition.id),
        });
    }
    for competition in &inputs.visible_unlocked {
        notifications.push(Notification {
            text: format!("{} is visible, but unlocked", competition.name),
            url: paths::admin_competition_edit_path(competition.id),
        });
    }

    match &inputs.identifier {
        IdentifierStatus::Confirmed => {}
        IdentifierStatus::ClaimPending {
            delegate_name,
            claimed_id,
        } => {
            notifications.push(Notification {
                text: format!(
                    "Waiting for {delegate_name} to assign you competitor ID {claimed_id}"
                ),
                url: paths::profile_claim_competitor_id_path(),
            });
        }
        IdentifierStatus::Unclaimed => {
            notifications.push(Notification {
                text: "Connect your competitor ID to your account!".to_string(),
                url: paths::profile_claim_competitor_id_path(),
            });
        }
    }

    for claimant in &inputs.claimants {
        notifications.push(Notification {
            text: format!(
                "{} has claimed competitor ID {}",
                claimant.email, claimant.claimed_id
            ),
            url: paths::user_edit_path(claimant.user_id, Some(paths::ANCHOR_COMPETITOR_ID)),
        });
    }

    if inputs.profile_incomplete {
        notifications.push(Notification {
            text: "Your profile is incomplete. You will not be able to register \
                   for competitions until you complete it!"
                .to_string(),
            url: paths::profile_edit_path(),
        });
    }

    notifications
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competition(id: DbId, name: &str) -> CompetitionRef {
        CompetitionRef {
            id,
            name: name.to_string(),
        }
    }

    /// Inputs for a user with nothing to be notified about.
    fn quiet_inputs() -> NotificationInputs {
        NotificationInputs {
            delegated_unconfirmed: vec![],
            organized_unconfirmed: vec![],
            awaiting_announcement: vec![],
            visible_unlocked: vec![],
            identifier: IdentifierStatus::Confirmed,
            claimants: vec![],
            profile_incomplete: false,
        }
    }

    #[test]
    fn test_quiet_user_gets_no_notifications() {
        assert!(assemble(&quiet_inputs()).is_empty());
    }

    #[test]
    fn test_unconfirmed_competition_notification() {
        let inputs = NotificationInputs {
            organized_unconfirmed: vec![competition(3, "Spring Open 2026")],
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "Spring Open 2026 is not confirmed");
        assert_eq!(notifications[0].url, "/competitions/3/edit");
    }

    #[test]
    fn test_competition_staffed_twice_appears_once() {
        let inputs = NotificationInputs {
            delegated_unconfirmed: vec![competition(3, "Spring Open 2026")],
            organized_unconfirmed: vec![competition(3, "Spring Open 2026")],
            ..quiet_inputs()
        };
        assert_eq!(assemble(&inputs).len(), 1);
    }

    #[test]
    fn test_dedup_is_keyed_on_id_not_name() {
        // Same display name, different competitions: both must appear.
        let inputs = NotificationInputs {
            delegated_unconfirmed: vec![competition(3, "Open")],
            organized_unconfirmed: vec![competition(4, "Open")],
            ..quiet_inputs()
        };
        assert_eq!(assemble(&inputs).len(), 2);
    }

    #[test]
    fn test_delegated_competitions_come_before_organized() {
        let inputs = NotificationInputs {
            delegated_unconfirmed: vec![competition(1, "Delegated Cup")],
            organized_unconfirmed: vec![competition(2, "Organized Cup")],
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert!(notifications[0].text.starts_with("Delegated Cup"));
        assert!(notifications[1].text.starts_with("Organized Cup"));
    }

    #[test]
    fn test_board_queues_emit_one_notification_each() {
        let inputs = NotificationInputs {
            awaiting_announcement: vec![competition(10, "Hidden Finals")],
            visible_unlocked: vec![competition(11, "Early Open")],
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].text, "Hidden Finals is waiting to be announced");
        assert_eq!(notifications[0].url, "/admin/competitions/10/edit");
        assert_eq!(notifications[1].text, "Early Open is visible, but unlocked");
        assert_eq!(notifications[1].url, "/admin/competitions/11/edit");
    }

    #[test]
    fn test_board_queues_independent_of_own_competitions() {
        let inputs = NotificationInputs {
            organized_unconfirmed: vec![competition(3, "My Own Comp")],
            awaiting_announcement: vec![competition(10, "Hidden Finals")],
            visible_unlocked: vec![competition(11, "Early Open")],
            ..quiet_inputs()
        };
        // Step 1 and both step 2 queues all contribute.
        assert_eq!(assemble(&inputs).len(), 3);
    }

    #[test]
    fn test_unclaimed_identifier_prompts_generic_claim() {
        let inputs = NotificationInputs {
            identifier: IdentifierStatus::Unclaimed,
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].text, "Connect your competitor ID to your account!");
        assert_eq!(notifications[0].url, "/profile/claim-competitor-id");
    }

    #[test]
    fn test_pending_claim_names_the_delegate() {
        let inputs = NotificationInputs {
            identifier: IdentifierStatus::ClaimPending {
                delegate_name: "Erika Mustermann".to_string(),
                claimed_id: "2014MUST01".to_string(),
            },
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].text,
            "Waiting for Erika Mustermann to assign you competitor ID 2014MUST01"
        );
        // The pending-claim and generic prompts are mutually exclusive.
        assert!(!notifications[0].text.contains("Connect your competitor ID"));
    }

    #[test]
    fn test_confirmed_identifier_prompts_nothing() {
        let inputs = NotificationInputs {
            identifier: IdentifierStatus::Confirmed,
            ..quiet_inputs()
        };
        assert!(assemble(&inputs).is_empty());
    }

    #[test]
    fn test_each_claimant_gets_one_notification_in_order() {
        let inputs = NotificationInputs {
            claimants: vec![
                Claimant {
                    user_id: 21,
                    email: "first@example.com".to_string(),
                    claimed_id: "2015FIRS01".to_string(),
                },
                Claimant {
                    user_id: 22,
                    email: "second@example.com".to_string(),
                    claimed_id: "2016SECO01".to_string(),
                },
            ],
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications[0].text,
            "first@example.com has claimed competitor ID 2015FIRS01"
        );
        assert_eq!(notifications[0].url, "/users/21/edit#competitor-id");
        assert_eq!(
            notifications[1].text,
            "second@example.com has claimed competitor ID 2016SECO01"
        );
    }

    #[test]
    fn test_incomplete_profile_emits_exactly_one_notification() {
        let inputs = NotificationInputs {
            profile_incomplete: true,
            ..quiet_inputs()
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].url, "/profile/edit");
        assert!(notifications[0].text.contains("profile is incomplete"));
    }

    #[test]
    fn test_step_order_is_preserved() {
        let inputs = NotificationInputs {
            delegated_unconfirmed: vec![competition(1, "Staffed Comp")],
            awaiting_announcement: vec![competition(10, "Hidden Finals")],
            visible_unlocked: vec![],
            identifier: IdentifierStatus::Unclaimed,
            claimants: vec![Claimant {
                user_id: 21,
                email: "claimant@example.com".to_string(),
                claimed_id: "2015CLAI01".to_string(),
            }],
            profile_incomplete: true,
            organized_unconfirmed: vec![],
        };
        let notifications = assemble(&inputs);
        assert_eq!(notifications.len(), 5);
        assert!(notifications[0].text.contains("is not confirmed"));
        assert!(notifications[1].text.contains("waiting to be announced"));
        assert!(notifications[2].text.contains("Connect your competitor ID"));
        assert!(notifications[3].text.contains("has claimed competitor ID"));
        assert!(notifications[4].text.contains("profile is incomplete"));
    }

    // -- IdentifierStatus derivation --

    #[test]
    fn test_derive_confirmed_wins_over_claim_fields() {
        let status = IdentifierStatus::derive(Some("2010REAL01"), Some("2010FAKE01"), Some("X"));
        assert_eq!(status, IdentifierStatus::Confirmed);
    }

    #[test]
    fn test_derive_claim_pending_needs_delegate() {
        let status = IdentifierStatus::derive(None, Some("2014MUST01"), None);
        assert_eq!(status, IdentifierStatus::Unclaimed);
    }

    #[test]
    fn test_derive_claim_pending() {
        let status = IdentifierStatus::derive(None, Some("2014MUST01"), Some("Erika"));
        assert_eq!(
            status,
            IdentifierStatus::ClaimPending {
                delegate_name: "Erika".to_string(),
                claimed_id: "2014MUST01".to_string(),
            }
        );
    }

    #[test]
    fn test_derive_unclaimed() {
        assert_eq!(IdentifierStatus::derive(None, None, None), IdentifierStatus::Unclaimed);
    }
}
