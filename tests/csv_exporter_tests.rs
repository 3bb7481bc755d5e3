use telcoview_cli::enums::dataset_kind::DatasetKind;
use telcoview_cli::helpers::data_helper::DataHelper;
use telcoview_cli::services::csv_exporter::CsvExporter;
use telcoview_cli::services::csv_parser::parse_analytics_csv;

#[test]
fn attention_export_round_trips_name_value_pairs() {
    let attention = DataHelper::default_attention_data();
    let csv = CsvExporter::export_attention(&attention);

    let parsed = parse_analytics_csv(&csv);
    let monthly = parsed.monthly_data.expect("monthly data");

    assert_eq!(monthly.len(), attention.len());
    for (exported, original) in monthly.iter().zip(attention.iter()) {
        assert_eq!(exported.name, original.name);
        assert_eq!(exported.value, original.value);
    }
}

#[test]
fn category_export_round_trips() {
    let category = DataHelper::default_category_data();
    let csv = CsvExporter::export_category(&category);

    let parsed = parse_analytics_csv(&csv);
    let reparsed = parsed.category_data.expect("category data");

    assert_eq!(reparsed, category);
}

#[test]
fn churn_export_reparses_with_derived_colors() {
    let churn = DataHelper::default_churn_risk_data();
    let csv = CsvExporter::export_churn_risk(&churn);

    let parsed = parse_analytics_csv(&csv);
    let reparsed = parsed.churn_risk_data.expect("churn risk data");

    // Colors are not in the file but come back identical from the labels.
    assert_eq!(reparsed, churn);
}

#[test]
fn each_sample_parses_to_its_own_shape() {
    let monthly = parse_analytics_csv(CsvExporter::sample_csv(DatasetKind::Monthly));
    assert!(monthly.monthly_data.is_some());

    let quarterly = parse_analytics_csv(CsvExporter::sample_csv(DatasetKind::Quarterly));
    assert!(quarterly.quarterly_data.is_some());

    let category = parse_analytics_csv(CsvExporter::sample_csv(DatasetKind::Category));
    assert!(category.category_data.is_some());

    let demographics = parse_analytics_csv(CsvExporter::sample_csv(DatasetKind::Demographics));
    assert!(demographics.demographics_data.is_some());

    let churn = parse_analytics_csv(CsvExporter::sample_csv(DatasetKind::ChurnRisk));
    assert!(churn.churn_risk_data.is_some());
}

#[test]
fn quarterly_export_is_rejected() {
    let store = tempfile::tempdir().expect("tempdir");
    let store = telcoview_cli::services::local_store::LocalStore::new(store.path()).expect("store");
    let data = telcoview_cli::services::analytics::AnalyticsService::new(&store).load();

    assert!(CsvExporter::export_dataset(DatasetKind::Quarterly, &data).is_err());
    assert!(CsvExporter::export_dataset(DatasetKind::Monthly, &data).is_ok());
}
