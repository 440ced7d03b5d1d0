// eda_utils.rs

use crate::csv_utils::CsvBuilder;
use rayon::prelude::*;
use serde::Serialize;

/// Configures the cleaning pass. The `fill_value` replaces every empty
/// cell left after duplicate removal; tabular sources commonly encode
/// missing values as empty strings, and the default fill is `"0"`.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub fill_value: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        CleanConfig {
            fill_value: "0".to_string(),
        }
    }
}

/// What a cleaning pass did to a dataset. Returned rather than printed,
/// so callers decide whether and where to narrate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanReport {
    pub rows_before: usize,
    pub rows_after: usize,
    pub duplicates_removed: usize,
    pub nulls_filled: usize,
}

/// Descriptive statistics for one column. Non-numeric columns carry a
/// cell count but no numeric summary fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub median: Option<f64>,
    pub max: Option<f64>,
}

/// Exploratory-data-analysis passes over a [`CsvBuilder`]: duplicate and
/// null cleaning with a structured report, and per-column descriptive
/// statistics. Computation never prints; the `print_*` companions render
/// the same structures for the console.
pub struct Eda;

impl Eda {
    /// Removes duplicate rows and fills empty cells, reporting what was
    /// done.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    /// use charmkit::eda_utils::{CleanConfig, Eda};
    ///
    /// let mut builder = CsvBuilder::from_raw_data(
    ///     vec!["label".to_string(), "score".to_string()],
    ///     vec![
    ///         vec!["1".to_string(), "0.9".to_string()],
    ///         vec!["1".to_string(), "0.9".to_string()],
    ///         vec!["0".to_string(), "".to_string()],
    ///     ],
    /// );
    ///
    /// let report = Eda::clean(&mut builder, &CleanConfig::default());
    ///
    /// assert_eq!(report.rows_before, 3);
    /// assert_eq!(report.rows_after, 2);
    /// assert_eq!(report.duplicates_removed, 1);
    /// assert_eq!(report.nulls_filled, 1);
    /// assert_eq!(builder.get_data().unwrap()[1][1], "0");
    /// ```
    pub fn clean(builder: &mut CsvBuilder, config: &CleanConfig) -> CleanReport {
        let rows_before = builder.get_data().map_or(0, |data| data.len());

        let duplicates_removed = builder.count_duplicates();
        builder.remove_duplicates();

        let nulls_filled = builder.count_null_cells();
        builder.replace_all_empty_string_cells_with(vec!["*"], &config.fill_value);

        let rows_after = builder.get_data().map_or(0, |data| data.len());

        CleanReport {
            rows_before,
            rows_after,
            duplicates_removed,
            nulls_filled,
        }
    }

    /// Computes a descriptive-statistics summary for every column.
    ///
    /// Column extraction walks the table once; the numeric summaries are
    /// then computed per column in parallel. Columns without a single
    /// numeric cell yield a summary whose numeric fields are `None`.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    /// use charmkit::eda_utils::Eda;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["city".to_string(), "temperature".to_string()],
    ///     vec![
    ///         vec!["Karachi".to_string(), "23.5".to_string()],
    ///         vec!["Lahore".to_string(), "24.1".to_string()],
    ///         vec!["Multan".to_string(), "19.0".to_string()],
    ///     ],
    /// );
    ///
    /// let summaries = Eda::describe(&builder);
    /// assert_eq!(summaries.len(), 2);
    /// assert_eq!(summaries[0].column, "city");
    /// assert!(summaries[0].mean.is_none());
    /// assert!((summaries[1].mean.unwrap() - 22.2).abs() < 1e-9);
    /// assert_eq!(summaries[1].min, Some(19.0));
    /// assert_eq!(summaries[1].max, Some(24.1));
    /// ```
    pub fn describe(builder: &CsvBuilder) -> Vec<ColumnSummary> {
        let headers = match builder.get_headers() {
            Some(headers) => headers.to_vec(),
            None => return Vec::new(),
        };

        let columns: Vec<(String, usize, Option<Vec<f64>>)> = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let count = builder.get_data().map_or(0, |data| {
                    data.iter()
                        .filter(|row| row.get(idx).map_or(false, |cell| !cell.is_empty()))
                        .count()
                });
                (header.clone(), count, builder.get_numeric_values(header))
            })
            .collect();

        columns
            .into_par_iter()
            .map(|(column, count, values)| match values {
                Some(mut values) => {
                    let n = values.len() as f64;
                    let mean = values.iter().sum::<f64>() / n;
                    let variance =
                        values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;

                    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                    let mid = values.len() / 2;
                    let median = if values.len() % 2 == 0 {
                        (values[mid - 1] + values[mid]) / 2.0
                    } else {
                        values[mid]
                    };

                    ColumnSummary {
                        column,
                        count,
                        mean: Some(mean),
                        std_dev: Some(variance.sqrt()),
                        min: values.first().copied(),
                        median: Some(median),
                        max: values.last().copied(),
                    }
                }
                None => ColumnSummary {
                    column,
                    count,
                    mean: None,
                    std_dev: None,
                    min: None,
                    median: None,
                    max: None,
                },
            })
            .collect()
    }

    /// Prints a cleaning report in the shape a console run expects.
    pub fn print_clean_report(report: &CleanReport) {
        if report.duplicates_removed > 0 {
            println!(
                "Number of duplicate rows removed: {}",
                report.duplicates_removed
            );
            println!(
                "Shape is: ({} -> {}) rows",
                report.rows_before, report.rows_after
            );
        } else {
            println!("There are no duplicate values");
        }

        if report.nulls_filled > 0 {
            println!("Null values cleaned: {}", report.nulls_filled);
        } else {
            println!("There are no null values");
        }
    }

    /// Prints per-column summaries, one block per column.
    pub fn print_summaries(summaries: &[ColumnSummary]) {
        for summary in summaries {
            println!("Statistics for column '{}':", summary.column);
            println!("  Count: {}", summary.count);
            match (
                summary.mean,
                summary.std_dev,
                summary.min,
                summary.median,
                summary.max,
            ) {
                (Some(mean), Some(std_dev), Some(min), Some(median), Some(max)) => {
                    println!("  Mean: {:.2}", mean);
                    println!("  Std Dev: {:.2}", std_dev);
                    println!("  Minimum: {}", min);
                    println!("  Median: {}", median);
                    println!("  Maximum: {}", max);
                }
                _ => println!("  No numeric data"),
            }
        }
    }
}
