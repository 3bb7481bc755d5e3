use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsPoint {
    pub name: String,
    pub value: f64,
}
