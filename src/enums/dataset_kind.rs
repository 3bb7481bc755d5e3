use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The five dataset shapes a CSV upload can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DatasetKind {
    Monthly,
    Quarterly,
    Category,
    Demographics,
    ChurnRisk,
}

impl DatasetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Category => "category",
            Self::Demographics => "demographics",
            Self::ChurnRisk => "churn-risk",
        }
    }
}
