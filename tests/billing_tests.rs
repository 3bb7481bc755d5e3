use tempfile::TempDir;
use telcoview_cli::enums::bill_status::BillStatus;
use telcoview_cli::services::billing::BillingService;
use telcoview_cli::services::local_store::LocalStore;

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path()).expect("store");
    (dir, store)
}

#[test]
fn first_use_seeds_the_demo_bills() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let bills = billing.bills().expect("bills");
    assert_eq!(bills.len(), 5);
    assert!(store.contains("bills"));
}

#[test]
fn pending_bills_exclude_paid_ones() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let pending = billing.pending_bills().expect("pending");
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|b| b.status == BillStatus::Pending));
}

#[test]
fn default_method_is_the_flagged_card() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let method = billing.default_method().expect("method");
    assert_eq!(method.id, "card-1");
    assert!(method.default);
}

#[tokio::test]
async fn paying_a_bill_marks_it_paid_and_persists() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let receipt = billing.pay("bill-1", None).await.expect("pay");
    assert_eq!(receipt.bill.status, BillStatus::Paid);
    assert_eq!(receipt.method.id, "card-1");
    assert!(receipt.upi_link.is_none());

    let pending = billing.pending_bills().expect("pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "bill-2");
}

#[tokio::test]
async fn paying_twice_is_rejected() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    billing.pay("bill-1", None).await.expect("pay");
    assert!(billing.pay("bill-1", None).await.is_err());
}

#[tokio::test]
async fn paying_an_unknown_bill_is_rejected() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    assert!(billing.pay("bill-999", None).await.is_err());
}

#[tokio::test]
async fn upi_payment_produces_a_provider_deep_link() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let receipt = billing.pay("bill-2", Some("upi-1")).await.expect("pay");
    let link = receipt.upi_link.expect("upi link");

    assert!(link.starts_with("gpay://upi/pay?"));
    assert!(link.contains("pa=user@okicici"));
    assert!(link.contains("am=299"));
    assert!(link.contains("cu=INR"));
}

#[tokio::test]
async fn generic_upi_methods_use_the_plain_scheme() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let receipt = billing.pay("bill-2", Some("upi-2")).await.expect("pay");
    let link = receipt.upi_link.expect("upi link");
    assert!(link.starts_with("phonepe://pay?"));
}

#[test]
fn invoice_includes_plan_and_amount() {
    let (_dir, store) = temp_store();
    let billing = BillingService::new(&store, false);

    let invoice = billing.invoice("bill-1", "₹").expect("invoice");
    assert!(invoice.contains("Premium 5G"));
    assert!(invoice.contains("₹599"));
}
