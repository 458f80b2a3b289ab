//! Request-scoped notification aggregation.
//!
//! Gathers, for one authenticated user, everything that warrants a line
//! in their notification list: unconfirmed competitions they staff, the
//! board moderation queues, competitor-ID claim state, claims waiting on
//! them as delegate, and registration-eligibility problems. Query errors
//! propagate unchanged to the caller; there is no retry or partial-result
//! policy.

use podium_core::notifications::{
    assemble, Claimant, CompetitionRef, IdentifierStatus, Notification, NotificationInputs,
};
use podium_core::registration::registration_blockers;
use podium_core::roles::ROLE_BOARD;
use podium_db::models::competition::Competition;
use podium_db::models::user::User;
use podium_db::repositories::{CompetitionRepo, RoleRepo, UserRepo};
use podium_db::DbPool;

/// Builds the per-user notification list.
pub struct NotificationAggregator {
    pool: DbPool,
}

impl NotificationAggregator {
    /// Create a new aggregator with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Generate the ordered notification list for `user`.
    ///
    /// Runs to completion within the surrounding request; every step
    /// contributes independently and the emitted order is step order,
    /// then query result order.
    pub async fn generate(&self, user: &User) -> Result<Vec<Notification>, sqlx::Error> {
        let delegated_unconfirmed =
            CompetitionRepo::delegated_unconfirmed(&self.pool, user.id).await?;
        let organized_unconfirmed =
            CompetitionRepo::organized_unconfirmed(&self.pool, user.id).await?;

        // Board members also see the moderation queues: competitions to
        // announce, and competitions to lock down.
        let role = RoleRepo::resolve_name(&self.pool, user.role_id).await?;
        let (awaiting_announcement, visible_unlocked) = if role == ROLE_BOARD {
            (
                CompetitionRepo::awaiting_announcement(&self.pool).await?,
                CompetitionRepo::visible_unlocked(&self.pool).await?,
            )
        } else {
            (Vec::new(), Vec::new())
        };

        let identifier = self.identifier_status(user).await?;

        let claimants = UserRepo::claimants_for_delegate(&self.pool, user.id)
            .await?
            .into_iter()
            .filter_map(|claimant| {
                claimant
                    .unconfirmed_competitor_id
                    .map(|claimed_id| Claimant {
                        user_id: claimant.id,
                        email: claimant.email,
                        claimed_id,
                    })
            })
            .collect();

        let profile_incomplete = !registration_blockers(
            &user.name,
            user.dob,
            user.gender.as_deref(),
            user.country_iso2.as_deref(),
        )
        .is_empty();

        let inputs = NotificationInputs {
            delegated_unconfirmed: to_refs(delegated_unconfirmed),
            organized_unconfirmed: to_refs(organized_unconfirmed),
            awaiting_announcement: to_refs(awaiting_announcement),
            visible_unlocked: to_refs(visible_unlocked),
            identifier,
            claimants,
            profile_incomplete,
        };

        Ok(assemble(&inputs))
    }

    /// Resolve the user's competitor-ID claim state, looking up the
    /// handling delegate's name when a claim is pending.
    async fn identifier_status(&self, user: &User) -> Result<IdentifierStatus, sqlx::Error> {
        let delegate_name = match (&user.competitor_id, user.claim_delegate_id) {
            (None, Some(delegate_id)) => UserRepo::find_by_id(&self.pool, delegate_id)
                .await?
                .map(|delegate| delegate.name),
            _ => None,
        };

        Ok(IdentifierStatus::derive(
            user.competitor_id.as_deref(),
            user.unconfirmed_competitor_id.as_deref(),
            delegate_name.as_deref(),
        ))
    }
}

/// Project full competition rows down to what notifications need.
fn to_refs(competitions: Vec<Competition>) -> Vec<CompetitionRef> {
    competitions
        .into_iter()
        .map(|competition| CompetitionRef {
            id: competition.id,
            name: competition.name,
        })
        .collect()
}
