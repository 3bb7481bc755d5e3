use tempfile::TempDir;
use telcoview_cli::services::auth::AuthService;
use telcoview_cli::services::local_store::LocalStore;

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path()).expect("store");
    (dir, store)
}

#[tokio::test]
async fn login_with_credentials_stores_the_session_user() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    let user = auth.login("alex@telecom.com", "hunter2").await.expect("login");
    assert_eq!(user.email, "alex@telecom.com");

    let current = auth.current_user().expect("read").expect("some");
    assert_eq!(current.name, "Alex Johnson");
}

#[tokio::test]
async fn login_with_empty_password_is_rejected() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    assert!(auth.login("alex@telecom.com", "").await.is_err());
    assert!(auth.current_user().expect("read").is_none());
}

#[tokio::test]
async fn google_login_always_succeeds() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    let user = auth.login_with_google().await.expect("login");
    assert_eq!(user.id, "user-1");
}

#[tokio::test]
async fn signup_uses_the_provided_identity() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    let user = auth.signup("Priya Sharma", "priya@example.com", "pw").await.expect("signup");
    assert_eq!(user.name, "Priya Sharma");
    assert_eq!(user.email, "priya@example.com");
    assert!(user.avatar.expect("avatar").contains("Priya+Sharma"));
}

#[tokio::test]
async fn signup_requires_every_field() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    assert!(auth.signup("", "a@b.com", "pw").await.is_err());
    assert!(auth.signup("Name", "", "pw").await.is_err());
    assert!(auth.signup("Name", "a@b.com", "").await.is_err());
}

#[tokio::test]
async fn logout_removes_the_session() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    auth.login_with_google().await.expect("login");
    auth.logout().expect("logout");

    assert!(auth.current_user().expect("read").is_none());
    assert!(auth.require_user().is_err());
}

#[tokio::test]
async fn profile_and_preference_updates_persist() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    auth.login_with_google().await.expect("login");

    let user = auth.update_profile(Some("New Name"), None).expect("update");
    assert_eq!(user.name, "New Name");

    let user = auth.update_preferences(Some(false), Some(true), None).expect("prefs");
    assert!(!user.preferences.alerts);
    assert!(user.preferences.auto_pay);
    // Untouched preference keeps its default
    assert!(user.preferences.data_alerts);

    let stored = auth.current_user().expect("read").expect("some");
    assert_eq!(stored.name, "New Name");
    assert!(stored.preferences.auto_pay);
}

#[tokio::test]
async fn change_password_requires_both_fields() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    auth.login_with_google().await.expect("login");
    assert!(auth.change_password("old", "new").await.is_ok());
    assert!(auth.change_password("", "new").await.is_err());
}

#[tokio::test]
async fn delete_account_clears_the_user() {
    let (_dir, store) = temp_store();
    let auth = AuthService::new(&store, false);

    auth.login_with_google().await.expect("login");
    auth.delete_account().await.expect("delete");
    assert!(auth.current_user().expect("read").is_none());
}
