use chrono::NaiveDate;
use once_cell::sync::Lazy;
use crate::enums::bill_status::BillStatus;
use crate::enums::payment_method_kind::PaymentMethodKind;
use crate::structs::account::bill::Bill;
use crate::structs::account::payment_method::PaymentMethod;
use crate::structs::account::plan::Plan;
use crate::structs::account::reward::{Reward, RewardsAccount};
use crate::structs::account::user::{Preferences, User};
use crate::structs::analytics::attention_point::AttentionPoint;
use crate::structs::analytics::category_point::CategoryPoint;
use crate::structs::analytics::churn_risk_point::ChurnRiskPoint;
use crate::structs::analytics::health::{HealthData, HealthMetric};

static REWARDS_CATALOG: Lazy<Vec<Reward>> = Lazy::new(DataHelper::build_rewards_catalog);

/// Seed data for a fresh store. Values mirror the demo datasets the web
/// portal shipped with.
pub struct DataHelper;

impl DataHelper {
    pub fn default_attention_data() -> Vec<AttentionPoint> {
        let samples: &[(&str, f64, f64)] = &[
            ("Jan", 65.0, 67.0),
            ("Feb", 59.0, 62.0),
            ("Mar", 80.0, 76.0),
            ("Apr", 81.0, 79.0),
            ("May", 76.0, 75.0),
            ("Jun", 55.0, 58.0),
            ("Jul", 40.0, 44.0),
            ("Aug", 35.0, 38.0),
            ("Sep", 48.0, 52.0),
            ("Oct", 65.0, 67.0),
            ("Nov", 70.0, 68.0),
            ("Dec", 75.0, 72.0),
        ];

        samples
            .iter()
            .map(|(name, value, predicted)| AttentionPoint {
                name: name.to_string(),
                value: *value,
                predicted: *predicted,
            })
            .collect()
    }

    pub fn default_category_data() -> Vec<CategoryPoint> {
        let samples: &[(&str, f64, f64)] = &[
            ("Network", 65.0, 55.0),
            ("Price", 45.0, 49.0),
            ("Customer Service", 78.0, 62.0),
            ("Value Added", 35.0, 40.0),
            ("Billing", 82.0, 75.0),
        ];

        samples
            .iter()
            .map(|(name, current, previous)| CategoryPoint {
                name: name.to_string(),
                current: *current,
                previous: *previous,
            })
            .collect()
    }

    pub fn default_churn_risk_data() -> Vec<ChurnRiskPoint> {
        vec![
            ChurnRiskPoint::new("Low Risk".to_string(), 60.0),
            ChurnRiskPoint::new("Medium Risk".to_string(), 25.0),
            ChurnRiskPoint::new("High Risk".to_string(), 15.0),
        ]
    }

    pub fn default_health_data() -> HealthData {
        HealthData {
            loyalty: HealthMetric::new(87, "Loyalty Score", "blue"),
            churn: HealthMetric::new(13, "Churn Risk", "red"),
            satisfaction: HealthMetric::new(78, "Satisfaction", "green"),
            payments: HealthMetric::new(96, "On-Time Payments", "purple"),
        }
    }

    pub fn mock_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@telecom.com".to_string(),
            avatar: Some(User::avatar_url("Alex Johnson")),
            preferences: Preferences::default(),
        }
    }

    pub fn default_bills() -> Vec<Bill> {
        let samples: &[(&str, f64, (i32, u32, u32), BillStatus, &str)] = &[
            ("bill-1", 599.0, (2023, 4, 15), BillStatus::Pending, "Premium 5G"),
            ("bill-2", 299.0, (2023, 4, 20), BillStatus::Pending, "Entertainment Bundle"),
            ("bill-3", 599.0, (2023, 3, 15), BillStatus::Paid, "Premium 5G"),
            ("bill-4", 299.0, (2023, 3, 20), BillStatus::Paid, "Entertainment Bundle"),
            ("bill-5", 599.0, (2023, 2, 15), BillStatus::Paid, "Premium 5G"),
        ];

        samples
            .iter()
            .map(|(id, amount, (y, m, d), status, plan)| Bill {
                id: id.to_string(),
                amount: *amount,
                due_date: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or_default(),
                status: *status,
                plan: plan.to_string(),
            })
            .collect()
    }

    pub fn default_payment_methods() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod {
                id: "card-1".to_string(),
                kind: PaymentMethodKind::Card,
                name: "HDFC Credit Card".to_string(),
                details: "Ending in 4242".to_string(),
                default: true,
            },
            PaymentMethod {
                id: "upi-1".to_string(),
                kind: PaymentMethodKind::Upi,
                name: "Google Pay".to_string(),
                details: "user@okicici".to_string(),
                default: false,
            },
            PaymentMethod {
                id: "upi-2".to_string(),
                kind: PaymentMethodKind::Upi,
                name: "PhonePe".to_string(),
                details: "user@ybl".to_string(),
                default: false,
            },
            PaymentMethod {
                id: "bank-1".to_string(),
                kind: PaymentMethodKind::Bank,
                name: "HDFC Bank".to_string(),
                details: "Savings Account".to_string(),
                default: false,
            },
        ]
    }

    pub fn rewards_catalog() -> Vec<Reward> {
        REWARDS_CATALOG.clone()
    }

    fn build_rewards_catalog() -> Vec<Reward> {
        vec![
            Reward {
                id: "data-2gb".to_string(),
                title: "2GB Data Booster".to_string(),
                points_cost: 500,
                description: "Extra 2GB of high-speed data, valid 30 days".to_string(),
            },
            Reward {
                id: "ott-month".to_string(),
                title: "Streaming Voucher".to_string(),
                points_cost: 1200,
                description: "One month of the Entertainment Bundle on us".to_string(),
            },
            Reward {
                id: "bill-discount".to_string(),
                title: "₹100 Bill Discount".to_string(),
                points_cost: 900,
                description: "₹100 off your next bill".to_string(),
            },
            Reward {
                id: "priority-support".to_string(),
                title: "Priority Support".to_string(),
                points_cost: 300,
                description: "Skip the queue for 90 days".to_string(),
            },
        ]
    }

    pub fn default_rewards_account() -> RewardsAccount {
        RewardsAccount {
            points: 2450,
            redeemed: Vec::new(),
        }
    }

    pub fn active_plans() -> Vec<Plan> {
        vec![
            Plan {
                name: "Premium 5G".to_string(),
                price: 599.0,
                data_allowance: "Unlimited".to_string(),
                renews_on: NaiveDate::from_ymd_opt(2023, 4, 15).unwrap_or_default(),
            },
            Plan {
                name: "Entertainment Bundle".to_string(),
                price: 299.0,
                data_allowance: "-".to_string(),
                renews_on: NaiveDate::from_ymd_opt(2023, 4, 20).unwrap_or_default(),
            },
        ]
    }
}
