use telcoview_cli::enums::dataset_kind::DatasetKind;
use telcoview_cli::services::csv_parser::{parse_analytics_csv, AnalyticsCsvParser};

#[test]
fn month_header_parses_as_monthly_data() {
    let csv = "month,value\nJan,65\nFeb,59\nMar,80\n";
    let parsed = parse_analytics_csv(csv);

    let monthly = parsed.monthly_data.expect("monthly data");
    assert_eq!(monthly.len(), 3);
    assert_eq!(monthly[0].name, "Jan");
    assert_eq!(monthly[0].value, 65.0);
    assert!(parsed.quarterly_data.is_none());
    assert!(parsed.category_data.is_none());
}

#[test]
fn predicted_column_is_picked_up_by_alias() {
    let csv = "month,value,forecast\nJan,65,67\nFeb,59,62\n";
    let parsed = parse_analytics_csv(csv);

    let monthly = parsed.monthly_data.expect("monthly data");
    assert_eq!(monthly[0].predicted, Some(67.0));
    assert_eq!(monthly[1].predicted, Some(62.0));
}

#[test]
fn quarter_labels_reclassify_as_quarterly_data() {
    let csv = "quarter,value\nQ1,120\nQ2,135\nQ3,128\nQ4,142\n";
    let parsed = parse_analytics_csv(csv);

    let quarterly = parsed.quarterly_data.expect("quarterly data");
    assert_eq!(quarterly.len(), 4);
    assert_eq!(quarterly[3].name, "Q4");
    assert!(parsed.monthly_data.is_none());
}

#[test]
fn category_header_parses_current_and_previous() {
    let csv = "category,current,previous\nNetwork,65,55\nPrice,45,49\n";
    let parsed = parse_analytics_csv(csv);

    let category = parsed.category_data.expect("category data");
    assert_eq!(category.len(), 2);
    assert_eq!(category[0].name, "Network");
    assert_eq!(category[0].current, 65.0);
    assert_eq!(category[0].previous, 55.0);
}

#[test]
fn missing_previous_column_is_backfilled_within_bounds() {
    let csv = "category,current\nNetwork,65\nBilling,82\n";
    let parsed = parse_analytics_csv(csv);

    let category = parsed.category_data.expect("category data");
    for point in category {
        assert!(point.previous <= point.current);
        assert!(point.previous >= point.current - 10.0);
    }
}

#[test]
fn demographics_header_parses_age_ranges() {
    let csv = "age,percentage\n18-24,22\n25-34,38\n55+,8\n";
    let parsed = parse_analytics_csv(csv);

    let demographics = parsed.demographics_data.expect("demographics data");
    assert_eq!(demographics.len(), 3);
    assert_eq!(demographics[2].name, "55+");
    assert_eq!(demographics[2].value, 8.0);
}

#[test]
fn high_risk_label_gets_red_color() {
    let csv = "risk,value\nLow Risk,60\nMedium Risk,25\nHigh Risk,15\n";
    let parsed = parse_analytics_csv(csv);

    let churn = parsed.churn_risk_data.expect("churn risk data");
    assert_eq!(churn[0].color, "#4ade80");
    assert_eq!(churn[1].color, "#facc15");
    assert_eq!(churn[2].color, "#ef4444");
}

#[test]
fn unknown_risk_label_gets_neutral_color() {
    let csv = "risk,value\nUnscored,12\n";
    let parsed = parse_analytics_csv(csv);

    let churn = parsed.churn_risk_data.expect("churn risk data");
    assert_eq!(churn[0].color, "#3B82F6");
}

#[test]
fn ambiguous_header_falls_back_to_first_column_inference() {
    // "period" matches no dispatch keyword but the rows are month names.
    let csv = "period,value\nJanuary,10\nFebruary,12\n";
    let parsed = parse_analytics_csv(csv);

    let monthly = parsed.monthly_data.expect("monthly data");
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].name, "January");
}

#[test]
fn risk_words_in_rows_select_churn_branch() {
    let csv = "category,value\nLow,60\nHigh,15\n";
    // Header says category, but detection is header-first.
    let parsed = parse_analytics_csv(csv);
    assert!(parsed.category_data.is_some());

    // Without a recognizable header keyword, rows decide.
    let parser = AnalyticsCsvParser::new("segment,share\nlow risk,60\nhigh risk,15\n");
    assert_eq!(parser.detect_kind(), DatasetKind::ChurnRisk);
}

#[test]
fn unmatched_shape_defaults_to_category() {
    let parser = AnalyticsCsvParser::new("thing,value\nfoo,1\nbar,2\n");
    assert_eq!(parser.detect_kind(), DatasetKind::Category);
}

#[test]
fn empty_input_yields_empty_result_without_panicking() {
    let parsed = parse_analytics_csv("");
    assert!(parsed.is_empty());
}

#[test]
fn header_without_required_columns_yields_empty_result() {
    let parsed = parse_analytics_csv("foo;bar\n1;2\n");
    assert!(parsed.is_empty());
}

#[test]
fn fallible_parse_reports_missing_header() {
    let result = AnalyticsCsvParser::new("").parse();
    assert!(result.is_err());
}

#[test]
fn junk_numeric_cells_become_nan_not_dropped_rows() {
    let csv = "month,value\nJan,abc\nFeb,59\n";
    let parsed = parse_analytics_csv(csv);

    let monthly = parsed.monthly_data.expect("monthly data");
    assert_eq!(monthly.len(), 2);
    assert!(monthly[0].value.is_nan());
    assert_eq!(monthly[1].value, 59.0);
}

#[test]
fn blank_lines_are_skipped() {
    let csv = "month,value\nJan,65\n\n\nFeb,59\n";
    let parsed = parse_analytics_csv(csv);
    assert_eq!(parsed.monthly_data.expect("monthly data").len(), 2);
}
