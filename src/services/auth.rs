use crate::config::constants::{simulated_delay, USER_KEY};
use crate::errors::{PortalError, PortalResult};
use crate::helpers::data_helper::DataHelper;
use crate::services::local_store::LocalStore;
use crate::structs::account::user::User;

/// Simulated account flows. There is no backend: "logging in" means
/// sleeping for the fake API delay and writing the session user to the
/// store under `telecom_user`.
pub struct AuthService<'a> {
    store: &'a LocalStore,
    simulate_latency: bool,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a LocalStore, simulate_latency: bool) -> Self {
        Self { store, simulate_latency }
    }

    async fn fake_api_call(&self) {
        if self.simulate_latency {
            tokio::time::sleep(simulated_delay()).await;
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> PortalResult<User> {
        self.fake_api_call().await;

        if email.is_empty() || password.is_empty() {
            return Err(PortalError::user_input_error(
                email,
                "a non-empty email and password",
                "Invalid email or password",
            ));
        }

        let user = DataHelper::mock_user();
        self.store.set(USER_KEY, &user)?;
        Ok(user)
    }

    pub async fn login_with_google(&self) -> PortalResult<User> {
        self.fake_api_call().await;

        let user = DataHelper::mock_user();
        self.store.set(USER_KEY, &user)?;
        Ok(user)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> PortalResult<User> {
        self.fake_api_call().await;

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(PortalError::user_input_error(
                name,
                "name, email and password",
                "All fields are required",
            ));
        }

        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            avatar: Some(User::avatar_url(name)),
            ..DataHelper::mock_user()
        };

        self.store.set(USER_KEY, &user)?;
        Ok(user)
    }

    pub fn logout(&self) -> PortalResult<()> {
        self.store.remove(USER_KEY)
    }

    pub fn current_user(&self) -> PortalResult<Option<User>> {
        self.store.get(USER_KEY)
    }

    /// Commands that need a session call this first.
    pub fn require_user(&self) -> PortalResult<User> {
        self.current_user()?
            .ok_or_else(|| PortalError::auth_error("session check", "no user is signed in"))
    }

    pub fn update_profile(&self, name: Option<&str>, email: Option<&str>) -> PortalResult<User> {
        let mut user = self.require_user()?;

        if let Some(name) = name {
            user.name = name.to_string();
            user.avatar = Some(User::avatar_url(name));
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }

        self.store.set(USER_KEY, &user)?;
        Ok(user)
    }

    pub fn update_preferences(
        &self,
        alerts: Option<bool>,
        auto_pay: Option<bool>,
        data_alerts: Option<bool>,
    ) -> PortalResult<User> {
        let mut user = self.require_user()?;

        if let Some(alerts) = alerts {
            user.preferences.alerts = alerts;
        }
        if let Some(auto_pay) = auto_pay {
            user.preferences.auto_pay = auto_pay;
        }
        if let Some(data_alerts) = data_alerts {
            user.preferences.data_alerts = data_alerts;
        }

        self.store.set(USER_KEY, &user)?;
        Ok(user)
    }

    pub async fn change_password(&self, current: &str, new: &str) -> PortalResult<()> {
        self.require_user()?;
        self.fake_api_call().await;

        if current.is_empty() || new.is_empty() {
            return Err(PortalError::user_input_error(
                "",
                "current and new password",
                "All fields are required",
            ));
        }

        Ok(())
    }

    pub async fn delete_account(&self) -> PortalResult<()> {
        self.require_user()?;
        self.fake_api_call().await;
        self.store.remove(USER_KEY)
    }
}
