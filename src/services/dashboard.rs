use crate::services::analytics::{AnalyticsData, AnalyticsService};
use crate::structs::account::plan::Plan;
use crate::structs::account::user::User;
use crate::structs::analytics::health::HealthMetric;

/// Text rendering of the dashboard page: attention card, health metrics,
/// category table, churn split, plans and rewards balance.
pub struct DashboardRenderer;

impl DashboardRenderer {
    pub fn render(
        user: &User,
        data: &AnalyticsData,
        plans: &[Plan],
        reward_points: u32,
        currency: &str,
    ) {
        println!("📱 Welcome back, {}", user.name);
        println!();

        let attention = AnalyticsService::attention_score(&data.attention);
        let arrow = if attention.change >= 0.0 { "▲" } else { "▼" };
        println!(
            "👁 Attention score: {:.0} ({} {:+.0} vs last period)",
            attention.score, arrow, attention.change
        );
        println!();

        println!("💚 Health metrics");
        Self::render_metric(&data.health.loyalty);
        Self::render_metric(&data.health.churn);
        Self::render_metric(&data.health.satisfaction);
        Self::render_metric(&data.health.payments);
        println!();

        println!("📊 Satisfaction by category (current vs previous)");
        for point in &data.category {
            let trend = if point.current >= point.previous { "▲" } else { "▼" };
            println!(
                "   {:<18} {:>5.0}  (prev {:>5.0}) {}",
                point.name, point.current, point.previous, trend
            );
        }
        println!();

        println!("⚠️ Churn risk split");
        for point in &data.churn_risk {
            println!(
                "   [{:<6}] {:<14} {:>5.0}%",
                point.risk_level().tag(),
                point.name,
                point.value
            );
        }
        println!();

        println!("📦 Active plans");
        for plan in plans {
            println!(
                "   {:<22} {}{:<8} data: {:<10} renews {}",
                plan.name, currency, plan.price, plan.data_allowance, plan.renews_on
            );
        }
        println!();

        println!("🎁 Reward points: {}", reward_points);
    }

    fn render_metric(metric: &HealthMetric) {
        let filled = (metric.score / 10) as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(10usize.saturating_sub(filled));
        println!("   {:<18} {} {:>3}%", metric.label, bar, metric.score);
    }
}
