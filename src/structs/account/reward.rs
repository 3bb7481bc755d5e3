use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub points_cost: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    pub id: String,
    pub reward_id: String,
    pub points_spent: u32,
    pub redeemed_at: DateTime<Utc>,
}

/// Persisted rewards state: point balance plus redemption history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsAccount {
    pub points: u32,

    #[serde(default)]
    pub redeemed: Vec<Redemption>,
}
