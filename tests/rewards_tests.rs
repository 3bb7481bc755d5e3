use tempfile::TempDir;
use telcoview_cli::services::local_store::LocalStore;
use telcoview_cli::services::rewards::RewardsService;

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path()).expect("store");
    (dir, store)
}

#[test]
fn account_seeds_with_the_default_balance() {
    let (_dir, store) = temp_store();
    let rewards = RewardsService::new(&store);

    let account = rewards.account().expect("account");
    assert_eq!(account.points, 2450);
    assert!(account.redeemed.is_empty());
}

#[test]
fn redeeming_deducts_points_and_records_history() {
    let (_dir, store) = temp_store();
    let rewards = RewardsService::new(&store);

    let redemption = rewards.redeem("ott-month").expect("redeem");
    assert_eq!(redemption.points_spent, 1200);

    let account = rewards.account().expect("account");
    assert_eq!(account.points, 1250);
    assert_eq!(account.redeemed.len(), 1);
    assert_eq!(account.redeemed[0].reward_id, "ott-month");
}

#[test]
fn insufficient_points_are_rejected() {
    let (_dir, store) = temp_store();
    let rewards = RewardsService::new(&store);

    rewards.redeem("ott-month").expect("first");
    rewards.redeem("ott-month").expect("second");
    // 50 points left, cheapest reward costs 300.
    assert!(rewards.redeem("priority-support").is_err());

    let account = rewards.account().expect("account");
    assert_eq!(account.points, 50);
    assert_eq!(account.redeemed.len(), 2);
}

#[test]
fn unknown_reward_ids_are_rejected() {
    let (_dir, store) = temp_store();
    let rewards = RewardsService::new(&store);

    assert!(rewards.redeem("free-yacht").is_err());
    assert_eq!(rewards.account().expect("account").points, 2450);
}

#[test]
fn catalog_is_stable() {
    let catalog = RewardsService::catalog();
    assert_eq!(catalog.len(), 4);
    assert!(catalog.iter().any(|r| r.id == "bill-discount"));
}
