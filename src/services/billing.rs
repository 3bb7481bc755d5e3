use chrono::Utc;
use uuid::Uuid;
use crate::config::constants::{payment_delay, BILLS_KEY, PAYMENT_METHODS_KEY};
use crate::enums::bill_status::BillStatus;
use crate::enums::payment_method_kind::PaymentMethodKind;
use crate::errors::{PortalError, PortalResult};
use crate::helpers::data_helper::DataHelper;
use crate::services::local_store::LocalStore;
use crate::structs::account::bill::Bill;
use crate::structs::account::payment_method::PaymentMethod;

/// Outcome of a simulated payment.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub bill: Bill,
    pub method: PaymentMethod,
    /// Deep link handed to the UPI app on mobile, when the method is UPI.
    pub upi_link: Option<String>,
}

pub struct BillingService<'a> {
    store: &'a LocalStore,
    simulate_latency: bool,
}

impl<'a> BillingService<'a> {
    pub fn new(store: &'a LocalStore, simulate_latency: bool) -> Self {
        Self { store, simulate_latency }
    }

    /// Bills, seeding the store with the demo set on first use.
    pub fn bills(&self) -> PortalResult<Vec<Bill>> {
        if let Some(bills) = self.store.get(BILLS_KEY)? {
            return Ok(bills);
        }

        let bills = DataHelper::default_bills();
        self.store.set(BILLS_KEY, &bills)?;
        Ok(bills)
    }

    pub fn pending_bills(&self) -> PortalResult<Vec<Bill>> {
        Ok(self.bills()?.into_iter().filter(Bill::is_payable).collect())
    }

    pub fn methods(&self) -> PortalResult<Vec<PaymentMethod>> {
        if let Some(methods) = self.store.get(PAYMENT_METHODS_KEY)? {
            return Ok(methods);
        }

        let methods = DataHelper::default_payment_methods();
        self.store.set(PAYMENT_METHODS_KEY, &methods)?;
        Ok(methods)
    }

    pub fn default_method(&self) -> PortalResult<PaymentMethod> {
        let methods = self.methods()?;
        methods
            .iter()
            .find(|m| m.default)
            .or_else(|| methods.first())
            .cloned()
            .ok_or_else(|| PortalError::payment_error(None, "no payment methods configured"))
    }

    pub async fn pay(&self, bill_id: &str, method_id: Option<&str>) -> PortalResult<PaymentReceipt> {
        let mut bills = self.bills()?;

        let bill = bills
            .iter()
            .find(|b| b.id == bill_id)
            .cloned()
            .ok_or_else(|| PortalError::payment_error(Some(bill_id), "bill not found"))?;

        if !bill.is_payable() {
            return Err(PortalError::payment_error(Some(bill_id), "bill is already paid"));
        }

        let method = match method_id {
            Some(id) => self
                .methods()?
                .into_iter()
                .find(|m| m.id == id)
                .ok_or_else(|| PortalError::payment_error(Some(bill_id), "payment method not found"))?,
            None => self.default_method()?,
        };

        if self.simulate_latency {
            tokio::time::sleep(payment_delay()).await;
        }

        let upi_link = match method.kind {
            PaymentMethodKind::Upi => Some(Self::upi_link(&method, &bill)),
            _ => None,
        };

        for stored in bills.iter_mut() {
            if stored.id == bill_id {
                stored.status = BillStatus::Paid;
            }
        }
        self.store.set(BILLS_KEY, &bills)?;

        let mut paid = bill;
        paid.status = BillStatus::Paid;

        Ok(PaymentReceipt {
            payment_id: Uuid::new_v4().to_string(),
            bill: paid,
            method,
            upi_link,
        })
    }

    /// Provider deep link the web portal opened on mobile devices.
    pub fn upi_link(method: &PaymentMethod, bill: &Bill) -> String {
        let scheme = match method.name.as_str() {
            "Google Pay" => "gpay://upi/pay",
            "PhonePe" => "phonepe://pay",
            _ => "upi://pay",
        };

        format!(
            "{}?pa={}&pn=TelecomService&am={}&cu=INR&tn=Bill+Payment",
            scheme, method.details, bill.amount
        )
    }

    pub fn invoice(&self, bill_id: &str, currency: &str) -> PortalResult<String> {
        let bill = self
            .bills()?
            .into_iter()
            .find(|b| b.id == bill_id)
            .ok_or_else(|| PortalError::payment_error(Some(bill_id), "bill not found"))?;

        Ok(format!(
            "TELECOM SERVICE - INVOICE\n\
             -------------------------\n\
             Invoice:  {}\n\
             Plan:     {}\n\
             Amount:   {}{}\n\
             Due date: {}\n\
             Status:   {}\n\
             Issued:   {}\n",
            bill.id,
            bill.plan,
            currency,
            bill.amount,
            bill.due_date,
            bill.status.label(),
            Utc::now().format("%Y-%m-%d"),
        ))
    }
}
