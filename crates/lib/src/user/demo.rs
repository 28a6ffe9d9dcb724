//! Demo roster for a freshly started lobby.

use super::store::UserStore;
use crate::Result;

/// `(name, clash_id, password)` of the demo accounts.
pub const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("Alice", "ALICE123", "password123"),
    ("Bob", "BOB456", "password456"),
    ("Charlie", "CHARLIE789", "password789"),
];

/// Demo accounts shown as online, with how many minutes ago they logged in.
const DEMO_ONLINE: &[(&str, u64)] = &[("Alice", 0), ("Bob", 5)];

impl UserStore {
    /// Load the demo roster: three registered users, two of them online.
    ///
    /// Goes through the regular register and login paths, so seeding a store
    /// that already holds any of these users fails with a conflict.
    pub async fn seed_demo(&self) -> Result<()> {
        for (name, clash_id, password) in DEMO_USERS {
            self.register(name, clash_id, password).await?;
        }

        let now = self.clock().now_millis();
        for (name, minutes_ago) in DEMO_ONLINE {
            let password = DEMO_USERS
                .iter()
                .find(|(n, _, _)| n == name)
                .map(|(_, _, p)| *p)
                .unwrap_or_default();
            let login_time =
                now.saturating_sub(minutes_ago * crate::constants::MILLIS_PER_MINUTE);
            self.login_at(name, password, login_time).await?;
        }

        tracing::info!(
            "Seeded {} demo users, {} online",
            DEMO_USERS.len(),
            DEMO_ONLINE.len()
        );
        Ok(())
    }
}
