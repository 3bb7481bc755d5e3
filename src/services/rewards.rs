use chrono::Utc;
use uuid::Uuid;
use crate::config::constants::REWARDS_KEY;
use crate::errors::{PortalError, PortalResult};
use crate::helpers::data_helper::DataHelper;
use crate::services::local_store::LocalStore;
use crate::structs::account::reward::{Redemption, Reward, RewardsAccount};

pub struct RewardsService<'a> {
    store: &'a LocalStore,
}

impl<'a> RewardsService<'a> {
    pub fn new(store: &'a LocalStore) -> Self {
        Self { store }
    }

    pub fn catalog() -> Vec<Reward> {
        DataHelper::rewards_catalog()
    }

    pub fn account(&self) -> PortalResult<RewardsAccount> {
        if let Some(account) = self.store.get(REWARDS_KEY)? {
            return Ok(account);
        }

        let account = DataHelper::default_rewards_account();
        self.store.set(REWARDS_KEY, &account)?;
        Ok(account)
    }

    pub fn redeem(&self, reward_id: &str) -> PortalResult<Redemption> {
        let reward = Self::catalog()
            .into_iter()
            .find(|r| r.id == reward_id)
            .ok_or_else(|| {
                PortalError::validation_error(
                    "reward",
                    reward_id,
                    "must be a catalog reward id",
                    Some("run 'telcoview rewards' to list the catalog"),
                )
            })?;

        let mut account = self.account()?;

        if account.points < reward.points_cost {
            return Err(PortalError::validation_error(
                "points",
                &account.points.to_string(),
                &format!("at least {} points required", reward.points_cost),
                Some("earn points by paying bills on time"),
            ));
        }

        account.points -= reward.points_cost;
        let redemption = Redemption {
            id: Uuid::new_v4().to_string(),
            reward_id: reward.id,
            points_spent: reward.points_cost,
            redeemed_at: Utc::now(),
        };
        account.redeemed.push(redemption.clone());

        self.store.set(REWARDS_KEY, &account)?;
        Ok(redemption)
    }
}
