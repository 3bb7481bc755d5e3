use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::dataset_kind::DatasetKind;
use crate::errors::PortalResult;
use crate::helpers::data_helper::DataHelper;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::analytics::AnalyticsService;
use crate::services::auth::AuthService;
use crate::services::billing::BillingService;
use crate::services::csv_exporter::CsvExporter;
use crate::services::csv_parser::{parse_analytics_csv, AnalyticsCsvParser};
use crate::services::dashboard::DashboardRenderer;
use crate::services::local_store::LocalStore;
use crate::services::rewards::RewardsService;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> PortalResult<()> {
        self.start_time = Some(Instant::now());

        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        let result = match command {
            Commands::Init => self.init_command(&config).await,
            Commands::Signup { name, email, password } => {
                self.signup_command(&config, &name, &email, &password).await
            }
            Commands::Login { email, password } => {
                self.login_command(&config, &email, &password).await
            }
            Commands::Google => self.google_command(&config).await,
            Commands::Logout => self.logout_command(&config),
            Commands::Whoami => self.whoami_command(&config),
            Commands::Dashboard => self.dashboard_command(&config),
            Commands::Import { file } => self.import_command(&config, &file).await,
            Commands::Export { kind, output } => self.export_command(&config, kind, output),
            Commands::Sample { kind, output } => self.sample_command(kind, output),
            Commands::Reset => self.reset_command(&config),
            Commands::Bills { all } => self.bills_command(&config, all),
            Commands::Pay { bill, method } => {
                self.pay_command(&config, &bill, method.as_deref()).await
            }
            Commands::Methods => self.methods_command(&config),
            Commands::Rewards => self.rewards_command(&config),
            Commands::Redeem { reward } => self.redeem_command(&config, &reward),
            Commands::Profile { name, email } => {
                self.profile_command(&config, name.as_deref(), email.as_deref())
            }
            Commands::Prefs { alerts, auto_pay, data_alerts } => {
                self.prefs_command(&config, alerts, auto_pay, data_alerts)
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn open_store(&self, config: &Config) -> PortalResult<LocalStore> {
        LocalStore::open_default(config)
    }

    async fn init_command(&self, config: &Config) -> PortalResult<()> {
        log::info!("🚀 Initializing telcoview...");

        let config_path = ConfigManager::create_sample_config()?;
        log::info!("📝 Config file: {}", config_path.display());

        let store = self.open_store(config)?;
        AnalyticsService::new(&store).reset()?;
        let billing = BillingService::new(&store, config.general.simulate_latency);
        billing.bills()?;
        billing.methods()?;
        RewardsService::new(&store).account()?;

        log::info!("✅ Local store seeded at: {}", store.dir().display());
        log::info!("🔧 Run 'telcoview login' to start a session.");
        Ok(())
    }

    async fn signup_command(
        &self,
        config: &Config,
        name: &str,
        email: &str,
        password: &str,
    ) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        let mut spinner = AnimatedLogger::new("Creating your account...");
        spinner.start();
        match auth.signup(name, email, password).await {
            Ok(user) => {
                spinner.stop(&format!("Welcome aboard, {}!", user.name)).await;
                Ok(())
            }
            Err(e) => {
                spinner.error("Signup failed").await;
                Err(e)
            }
        }
    }

    async fn login_command(&self, config: &Config, email: &str, password: &str) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        let mut spinner = AnimatedLogger::new("Signing in...");
        spinner.start();
        match auth.login(email, password).await {
            Ok(user) => {
                spinner.stop(&format!("Signed in as {}", user.email)).await;
                Ok(())
            }
            Err(e) => {
                spinner.error("Login failed").await;
                Err(e)
            }
        }
    }

    async fn google_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        let mut spinner = AnimatedLogger::new("Signing in with Google...");
        spinner.start();
        let user = auth.login_with_google().await?;
        spinner.stop(&format!("Signed in as {}", user.email)).await;
        Ok(())
    }

    fn logout_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).logout()?;
        log::info!("👋 Signed out.");
        Ok(())
    }

    fn whoami_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        match auth.current_user()? {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!(
                    "prefs: alerts={} auto_pay={} data_alerts={}",
                    user.preferences.alerts, user.preferences.auto_pay, user.preferences.data_alerts
                );
            }
            None => println!("Not signed in."),
        }
        Ok(())
    }

    fn dashboard_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let user = AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let data = AnalyticsService::new(&store).load();
        let points = RewardsService::new(&store).account()?.points;

        DashboardRenderer::render(
            &user,
            &data,
            &DataHelper::active_plans(),
            points,
            &config.general.currency,
        );
        Ok(())
    }

    async fn import_command(&self, config: &Config, file: &str) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        log::info!("📥 Importing analytics from: {}", file);
        let content = tokio::fs::read_to_string(file).await?;

        let kind = AnalyticsCsvParser::new(&content).detect_kind();
        log::info!("🔎 Detected dataset shape: {}", kind.name());

        let parsed = parse_analytics_csv(&content);
        if parsed.is_empty() {
            log::warn!("⚠️ No datasets recognized in the file - dashboard unchanged.");
            return Ok(());
        }

        let updated = AnalyticsService::new(&store).apply_import(parsed)?;
        if updated.is_empty() {
            log::warn!("⚠️ File parsed but contained no rows - dashboard unchanged.");
        } else {
            log::info!("✅ Updated datasets: {}", updated.join(", "));
        }
        Ok(())
    }

    fn export_command(
        &self,
        config: &Config,
        kind: DatasetKind,
        output: Option<String>,
    ) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let data = AnalyticsService::new(&store).load();
        let csv = CsvExporter::export_dataset(kind, &data)?;

        match output {
            Some(path) => {
                std::fs::write(&path, csv)?;
                log::info!("✅ Exported {} data to: {}", kind.name(), path);
            }
            None => print!("{}", csv),
        }
        Ok(())
    }

    fn sample_command(&self, kind: DatasetKind, output: Option<String>) -> PortalResult<()> {
        let csv = CsvExporter::sample_csv(kind);

        match output {
            Some(path) => {
                std::fs::write(&path, csv)?;
                log::info!("✅ Sample {} CSV written to: {}", kind.name(), path);
            }
            None => print!("{}", csv),
        }
        Ok(())
    }

    fn reset_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AnalyticsService::new(&store).reset()?;
        log::info!("✅ Dashboard datasets restored to defaults.");
        Ok(())
    }

    fn bills_command(&self, config: &Config, all: bool) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let billing = BillingService::new(&store, config.general.simulate_latency);
        let bills = if all { billing.bills()? } else { billing.pending_bills()? };

        if bills.is_empty() {
            println!("No pending bills. You're all set! 🎉");
            return Ok(());
        }

        println!("{:<8} {:<22} {:>10} {:<12} {}", "ID", "PLAN", "AMOUNT", "DUE", "STATUS");
        for bill in bills {
            println!(
                "{:<8} {:<22} {:>9} {:<12} {}",
                bill.id,
                bill.plan,
                format!("{}{}", config.general.currency, bill.amount),
                bill.due_date,
                bill.status.label()
            );
        }
        Ok(())
    }

    async fn pay_command(
        &self,
        config: &Config,
        bill_id: &str,
        method_id: Option<&str>,
    ) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let billing = BillingService::new(&store, config.general.simulate_latency);

        let mut spinner = AnimatedLogger::new("Processing payment...");
        spinner.start();
        match billing.pay(bill_id, method_id).await {
            Ok(receipt) => {
                spinner
                    .stop(&format!(
                        "{}{} paid via {} (payment {})",
                        config.general.currency, receipt.bill.amount, receipt.method.name, receipt.payment_id
                    ))
                    .await;

                if let Some(link) = receipt.upi_link {
                    log::info!("📲 Complete the transaction in your UPI app: {}", link);
                }

                println!("{}", billing.invoice(&receipt.bill.id, &config.general.currency)?);
                Ok(())
            }
            Err(e) => {
                spinner.error("Payment failed").await;
                Err(e)
            }
        }
    }

    fn methods_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let methods = BillingService::new(&store, config.general.simulate_latency).methods()?;
        for method in methods {
            let marker = if method.default { "*" } else { " " };
            println!(
                "{} {:<8} [{:<4}] {:<20} {}",
                marker,
                method.id,
                method.kind.label(),
                method.name,
                method.details
            );
        }
        Ok(())
    }

    fn rewards_command(&self, config: &Config) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let rewards = RewardsService::new(&store);
        let account = rewards.account()?;

        println!("🎁 Points balance: {}", account.points);
        println!();
        println!("{:<18} {:>8}  {}", "ID", "POINTS", "REWARD");
        for reward in RewardsService::catalog() {
            println!(
                "{:<18} {:>8}  {} - {}",
                reward.id, reward.points_cost, reward.title, reward.description
            );
        }

        if !account.redeemed.is_empty() {
            println!();
            println!("Redeemed:");
            for redemption in &account.redeemed {
                println!(
                    "   {} ({} pts) on {}",
                    redemption.reward_id,
                    redemption.points_spent,
                    redemption.redeemed_at.format("%Y-%m-%d")
                );
            }
        }
        Ok(())
    }

    fn redeem_command(&self, config: &Config, reward_id: &str) -> PortalResult<()> {
        let store = self.open_store(config)?;
        AuthService::new(&store, config.general.simulate_latency).require_user()?;

        let rewards = RewardsService::new(&store);
        let redemption = rewards.redeem(reward_id)?;
        let balance = rewards.account()?.points;

        log::info!(
            "✅ Redeemed '{}' for {} points. New balance: {}",
            redemption.reward_id,
            redemption.points_spent,
            balance
        );
        Ok(())
    }

    fn profile_command(
        &self,
        config: &Config,
        name: Option<&str>,
        email: Option<&str>,
    ) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        if name.is_none() && email.is_none() {
            return self.whoami_command(config);
        }

        let user = auth.update_profile(name, email)?;
        log::info!("✅ Profile updated: {} <{}>", user.name, user.email);
        Ok(())
    }

    fn prefs_command(
        &self,
        config: &Config,
        alerts: Option<bool>,
        auto_pay: Option<bool>,
        data_alerts: Option<bool>,
    ) -> PortalResult<()> {
        let store = self.open_store(config)?;
        let auth = AuthService::new(&store, config.general.simulate_latency);

        let user = auth.update_preferences(alerts, auto_pay, data_alerts)?;
        log::info!(
            "✅ Preferences saved: alerts={} auto_pay={} data_alerts={}",
            user.preferences.alerts,
            user.preferences.auto_pay,
            user.preferences.data_alerts
        );
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
