use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::enums::bill_status::BillStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub plan: String,
}

impl Bill {
    pub fn is_payable(&self) -> bool {
        self.status != BillStatus::Paid
    }
}
