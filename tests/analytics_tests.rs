use tempfile::TempDir;
use telcoview_cli::services::analytics::AnalyticsService;
use telcoview_cli::services::csv_parser::parse_analytics_csv;
use telcoview_cli::services::local_store::LocalStore;
use telcoview_cli::structs::analytics::attention_point::AttentionPoint;

fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = LocalStore::new(dir.path()).expect("store");
    (dir, store)
}

fn point(name: &str, value: f64) -> AttentionPoint {
    AttentionPoint { name: name.to_string(), value, predicted: value }
}

#[test]
fn fresh_store_loads_default_datasets() {
    let (_dir, store) = temp_store();
    let data = AnalyticsService::new(&store).load();

    assert_eq!(data.attention.len(), 12);
    assert_eq!(data.attention[0].name, "Jan");
    assert_eq!(data.category.len(), 5);
    assert_eq!(data.churn_risk.len(), 3);
    assert_eq!(data.health.loyalty.score, 87);
}

#[test]
fn attention_score_uses_last_two_points() {
    let points = vec![point("Nov", 70.0), point("Dec", 75.0)];
    let score = AnalyticsService::attention_score(&points);

    assert_eq!(score.score, 75.0);
    assert_eq!(score.change, 5.0);
}

#[test]
fn attention_score_on_empty_series_is_zero() {
    let score = AnalyticsService::attention_score(&[]);
    assert_eq!(score.score, 0.0);
    assert_eq!(score.change, 0.0);
}

#[test]
fn attention_score_with_single_point_counts_full_value() {
    let score = AnalyticsService::attention_score(&[point("Jan", 40.0)]);
    assert_eq!(score.score, 40.0);
    assert_eq!(score.change, 40.0);
}

#[test]
fn monthly_import_replaces_attention_and_backfills_predictions() {
    let (_dir, store) = temp_store();
    let service = AnalyticsService::new(&store);

    let parsed = parse_analytics_csv("month,value\nJan,50\nFeb,100\n");
    let updated = service.apply_import(parsed).expect("import");

    assert_eq!(updated, vec!["attention"]);

    let data = service.load();
    assert_eq!(data.attention.len(), 2);
    assert_eq!(data.attention[1].value, 100.0);
    // Missing predicted column falls back to value * 0.98
    assert_eq!(data.attention[1].predicted, 98.0);
}

#[test]
fn category_import_replaces_category_dataset() {
    let (_dir, store) = temp_store();
    let service = AnalyticsService::new(&store);

    let parsed = parse_analytics_csv("category,current,previous\nRoaming,40,30\n");
    let updated = service.apply_import(parsed).expect("import");

    assert_eq!(updated, vec!["category"]);
    let data = service.load();
    assert_eq!(data.category.len(), 1);
    assert_eq!(data.category[0].name, "Roaming");
}

#[test]
fn empty_parse_updates_nothing() {
    let (_dir, store) = temp_store();
    let service = AnalyticsService::new(&store);

    let parsed = parse_analytics_csv("");
    let updated = service.apply_import(parsed).expect("import");

    assert!(updated.is_empty());
    assert_eq!(service.load().attention.len(), 12);
}

#[test]
fn reset_restores_defaults_after_an_import() {
    let (_dir, store) = temp_store();
    let service = AnalyticsService::new(&store);

    let parsed = parse_analytics_csv("month,value\nJan,1\n");
    service.apply_import(parsed).expect("import");
    assert_eq!(service.load().attention.len(), 1);

    service.reset().expect("reset");
    assert_eq!(service.load().attention.len(), 12);
}
