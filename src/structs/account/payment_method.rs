use serde::{Deserialize, Serialize};
use crate::enums::payment_method_kind::PaymentMethodKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: PaymentMethodKind,
    pub name: String,
    pub details: String,

    #[serde(default)]
    pub default: bool,
}
