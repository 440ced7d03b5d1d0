use charmkit::csv_utils::CsvBuilder;
use charmkit::eval_utils::EvalError;

fn sample_builder() -> CsvBuilder {
    CsvBuilder::from_raw_data(
        vec![
            "city".to_string(),
            "label".to_string(),
            "score".to_string(),
        ],
        vec![
            vec!["Karachi".to_string(), "1".to_string(), "0.9".to_string()],
            vec!["Lahore".to_string(), "0".to_string(), "0.4".to_string()],
            vec!["Multan".to_string(), "1".to_string(), "0.3".to_string()],
        ],
    )
}

#[test]
fn raw_data_round_trips_through_getters() {
    let builder = sample_builder();

    assert!(builder.has_headers());
    assert!(builder.has_data());
    assert_eq!(
        builder.get_headers().unwrap(),
        &[
            "city".to_string(),
            "label".to_string(),
            "score".to_string()
        ]
    );
    assert_eq!(builder.get_data().unwrap().len(), 3);
}

#[test]
fn duplicates_are_counted_and_removed_first_occurrence_wins() {
    let mut builder = CsvBuilder::from_raw_data(
        vec!["label".to_string(), "score".to_string()],
        vec![
            vec!["1".to_string(), "0.9".to_string()],
            vec!["0".to_string(), "0.4".to_string()],
            vec!["1".to_string(), "0.9".to_string()],
            vec!["1".to_string(), "0.9".to_string()],
        ],
    );

    assert_eq!(builder.count_duplicates(), 2);

    builder.remove_duplicates();
    let data = builder.get_data().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0], vec!["1".to_string(), "0.9".to_string()]);
    assert_eq!(data[1], vec!["0".to_string(), "0.4".to_string()]);
}

#[test]
fn null_cells_are_counted_and_filled() {
    let mut builder = CsvBuilder::from_raw_data(
        vec!["label".to_string(), "score".to_string()],
        vec![
            vec!["1".to_string(), "".to_string()],
            vec!["".to_string(), "0.4".to_string()],
            vec!["0".to_string(), "0.2".to_string()],
        ],
    );

    assert_eq!(builder.count_null_cells(), 2);
    assert_eq!(
        builder.null_count_per_column(),
        vec![("label".to_string(), 1), ("score".to_string(), 1)]
    );

    builder.replace_all_empty_string_cells_with(vec!["*"], "0");
    assert_eq!(builder.count_null_cells(), 0);
    assert_eq!(builder.get_data().unwrap()[0][1], "0");
}

#[test]
fn trim_all_strips_cell_whitespace() {
    let mut builder = CsvBuilder::from_raw_data(
        vec!["label".to_string()],
        vec![vec!["  1  ".to_string()], vec![" 0".to_string()]],
    );

    builder.trim_all();
    assert_eq!(builder.get_data().unwrap()[0][0], "1");
    assert_eq!(builder.get_data().unwrap()[1][0], "0");
}

#[test]
fn statistics_getters_agree_on_a_known_column() {
    let builder = CsvBuilder::from_raw_data(
        vec!["temperature".to_string()],
        vec![
            vec!["23.5".to_string()],
            vec!["24.1".to_string()],
            vec!["19.0".to_string()],
        ],
    );

    assert_eq!(builder.get_numeric_min("temperature"), Some(19.0));
    assert_eq!(builder.get_numeric_max("temperature"), Some(24.1));
    assert!((builder.get_range("temperature").unwrap() - 5.1).abs() < 1e-9);
    assert!((builder.get_sum("temperature").unwrap() - 66.6).abs() < 1e-9);
    assert!((builder.get_mean("temperature").unwrap() - 22.2).abs() < 1e-9);
    assert_eq!(builder.get_median("temperature"), Some(23.5));
    assert!((builder.get_standard_deviation("temperature").unwrap() - 2.2760).abs() < 1e-3);
    assert!((builder.get_variance("temperature").unwrap() - 5.18).abs() < 1e-2);
}

#[test]
fn statistics_getters_reject_non_numeric_columns() {
    let builder = sample_builder();

    assert_eq!(builder.get_mean("city"), None);
    assert_eq!(builder.get_numeric_min("city"), None);
    assert_eq!(builder.get_mean("no_such_column"), None);

    let non_numeric = builder.get_non_numeric_values("city").unwrap();
    assert_eq!(non_numeric.len(), 3);
    assert!(builder
        .get_non_numeric_values("score")
        .unwrap()
        .is_empty());
}

#[test]
fn mode_picks_the_most_frequent_value() {
    let builder = CsvBuilder::from_raw_data(
        vec!["grade".to_string()],
        vec![
            vec!["A".to_string()],
            vec!["B".to_string()],
            vec!["A".to_string()],
        ],
    );

    assert_eq!(builder.get_mode("grade"), Some("A".to_string()));
}

#[test]
fn unique_values_preserve_first_seen_order() {
    let builder = CsvBuilder::from_raw_data(
        vec!["label".to_string()],
        vec![
            vec!["1".to_string()],
            vec!["0".to_string()],
            vec!["1".to_string()],
        ],
    );

    assert_eq!(
        builder.get_unique("label"),
        vec!["1".to_string(), "0".to_string()]
    );
}

#[test]
fn cascade_sort_orders_numerically_then_lexically() {
    let mut builder = CsvBuilder::from_raw_data(
        vec!["score".to_string(), "city".to_string()],
        vec![
            vec!["0.4".to_string(), "Lahore".to_string()],
            vec!["0.9".to_string(), "Karachi".to_string()],
            vec!["0.4".to_string(), "Multan".to_string()],
        ],
    );

    builder.cascade_sort(vec![
        ("score".to_string(), "DESC".to_string()),
        ("city".to_string(), "ASC".to_string()),
    ]);

    let data = builder.get_data().unwrap();
    assert_eq!(data[0][1], "Karachi");
    assert_eq!(data[1][1], "Lahore");
    assert_eq!(data[2][1], "Multan");
}

#[test]
fn column_operations_reshape_the_table() {
    let mut builder = sample_builder();

    builder.rename_columns(vec![("city", "region")]);
    assert_eq!(builder.get_headers().unwrap()[0], "region");

    builder.drop_columns(vec!["region"]);
    assert_eq!(
        builder.get_headers().unwrap(),
        &["label".to_string(), "score".to_string()]
    );
    assert_eq!(builder.get_data().unwrap()[0].len(), 2);

    builder.retain_columns(vec!["score"]);
    assert_eq!(builder.get_headers().unwrap(), &["score".to_string()]);
    assert_eq!(builder.get_data().unwrap()[0], vec!["0.9".to_string()]);
}

#[test]
fn limit_truncates_and_limit_random_samples() {
    let mut builder = sample_builder();
    builder.limit(2);
    assert_eq!(builder.get_data().unwrap().len(), 2);

    let mut builder = sample_builder();
    builder.limit_random(2);
    assert_eq!(builder.get_data().unwrap().len(), 2);

    // A zero or oversized limit keeps everything.
    let mut builder = sample_builder();
    builder.limit_random(0);
    assert_eq!(builder.get_data().unwrap().len(), 3);
    builder.limit_random(10);
    assert_eq!(builder.get_data().unwrap().len(), 3);
}

#[test]
fn csv_files_round_trip_through_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");
    let path_str = path.to_str().unwrap();

    sample_builder().save_as(path_str).unwrap();

    let loaded = CsvBuilder::from_csv(path_str);
    assert!(loaded.get_error().is_none());
    assert_eq!(
        loaded.get_headers().unwrap(),
        &[
            "city".to_string(),
            "label".to_string(),
            "score".to_string()
        ]
    );
    assert_eq!(loaded.get_data().unwrap(), sample_builder().get_data().unwrap());
}

#[test]
fn missing_files_stash_an_error_instead_of_panicking() {
    let builder = CsvBuilder::from_csv("definitely_not_here.csv");

    assert!(builder.get_error().is_some());
    assert!(builder.get_headers().is_none());
    assert!(builder.get_data().is_none());
}

#[test]
fn json_arrays_become_tables() {
    let json_data = r#"[
        {"label": "1", "score": "0.9"},
        {"label": "0", "score": "0.4"}
    ]"#;

    let builder = CsvBuilder::from_json_array(json_data).unwrap();
    let headers = builder.get_headers().unwrap();
    assert!(headers.contains(&"label".to_string()));
    assert!(headers.contains(&"score".to_string()));
    assert_eq!(builder.get_data().unwrap().len(), 2);

    assert!(CsvBuilder::from_json_array("not json").is_err());
}

#[test]
fn labeled_scores_extract_in_row_order() {
    let builder = sample_builder();

    let samples = builder.get_labeled_scores("label", "score").unwrap();
    assert_eq!(samples.len(), 3);
    assert!(samples[0].label);
    assert!(!samples[1].label);
    assert_eq!(samples[2].score, 0.3);
}

#[test]
fn labeled_scores_validate_columns_and_cells() {
    let builder = sample_builder();

    let err = builder.get_labeled_scores("missing", "score").unwrap_err();
    assert!(matches!(err, EvalError::Validation(_)));

    let err = builder.get_labeled_scores("label", "city").unwrap_err();
    assert!(matches!(err, EvalError::Validation(_)));
}
