// csv_utils.rs
use crate::eval_utils::{EvalError, LabeledScore};
use anyhow::Result as AnyhowResult;
use rand::{seq::SliceRandom, thread_rng};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs::File;

/// A builder for loading, cleaning and analyzing tabular data held in
/// memory as string cells.
pub struct CsvBuilder {
    headers: Vec<String>,
    data: Vec<Vec<String>>,
    limit: Option<usize>,
    error: Option<Box<dyn Error>>,
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvBuilder {
    /// Creates a new, empty `CsvBuilder`.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::new();
    ///
    /// // Initially, there are no headers or data
    /// assert!(builder.get_headers().is_none());
    /// assert!(builder.get_data().is_none());
    /// ```
    pub fn new() -> Self {
        CsvBuilder {
            headers: Vec::new(),
            data: Vec::new(),
            limit: None,
            error: None,
        }
    }

    /// Creates a `CsvBuilder` from headers and rows already in memory.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["label".to_string(), "score".to_string()],
    ///     vec![vec!["1".to_string(), "0.9".to_string()]],
    /// );
    ///
    /// assert!(builder.has_data());
    /// ```
    pub fn from_raw_data(headers: Vec<String>, data: Vec<Vec<String>>) -> Self {
        CsvBuilder {
            headers,
            data,
            limit: None,
            error: None,
        }
    }

    /// Creates a deep copy of the builder, leaving the original intact.
    pub fn from_copy(&self) -> Self {
        CsvBuilder {
            headers: self.headers.clone(),
            data: self.data.clone(),
            limit: self.limit,
            error: None,
        }
    }

    /// Reads data from a CSV file at the specified `file_path`.
    ///
    /// The constructor is forgiving: when the file cannot be opened or a
    /// record fails to parse, the error is stashed on the builder (see
    /// [`CsvBuilder::get_error`]) and `get_headers`/`get_data` return
    /// `None` or partial data, mirroring how a missing file behaves in a
    /// multi-file batch.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_csv("nonexistent_file.csv");
    ///
    /// assert!(builder.get_headers().is_none());
    /// assert!(builder.get_data().is_none());
    /// assert!(builder.get_error().is_some());
    /// ```
    pub fn from_csv(file_path: &str) -> Self {
        let mut builder = CsvBuilder::new();

        match File::open(file_path) {
            Ok(file) => {
                let mut rdr = csv::Reader::from_reader(file);

                if let Ok(hdrs) = rdr.headers() {
                    builder.headers = hdrs.iter().map(String::from).collect();
                }

                for result in rdr.records() {
                    match result {
                        Ok(record) => builder.data.push(record.iter().map(String::from).collect()),
                        Err(e) => {
                            builder.error = Some(Box::new(e));
                            break;
                        }
                    }
                }
            }
            Err(e) => builder.error = Some(Box::new(e)),
        }

        builder
    }

    /// Builds a `CsvBuilder` from a JSON array of flat objects, taking
    /// the keys of the first object as headers.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let json_data = r#"[
    ///     {"label": "1", "score": "0.9"},
    ///     {"label": "0", "score": "0.4"}
    /// ]"#;
    ///
    /// let builder = CsvBuilder::from_json_array(json_data).unwrap();
    /// assert_eq!(builder.get_data().unwrap().len(), 2);
    /// ```
    pub fn from_json_array(json_data: &str) -> AnyhowResult<Self> {
        let parsed: Value = serde_json::from_str(json_data)?;

        let mut builder = CsvBuilder::new();
        if let Value::Array(items) = parsed {
            let keys: Option<Vec<String>> = items.first().and_then(|item| match item {
                Value::Object(map) => Some(map.keys().cloned().collect()),
                _ => None,
            });

            if let Some(keys) = keys {
                for item in &items {
                    if let Value::Object(map) = item {
                        let row: Vec<String> = keys
                            .iter()
                            .map(|key| {
                                map.get(key).map_or_else(String::new, |v| match v {
                                    Value::String(s) => s.clone(),
                                    _ => v.to_string(),
                                })
                            })
                            .collect();
                        builder.data.push(row);
                    }
                }
                builder.headers = keys;
            }
        }

        Ok(builder)
    }

    /// Saves the current headers and data as a CSV file at
    /// `new_file_path`. Rows shorter than the header are padded with
    /// empty cells.
    pub fn save_as(&mut self, new_file_path: &str) -> Result<&mut Self, Box<dyn Error>> {
        let file = File::create(new_file_path)?;
        let mut wtr = csv::Writer::from_writer(file);

        if !self.headers.is_empty() {
            wtr.write_record(&self.headers)?;
        }

        let headers_len = self.headers.len();
        for record in &mut self.data {
            while record.len() < headers_len {
                record.push("".to_string());
            }
            wtr.write_record(record.iter())?;
        }

        wtr.flush()?;

        Ok(self)
    }

    /// Sets the headers, replacing any existing ones.
    pub fn set_header(&mut self, header: Vec<&str>) -> &mut Self {
        self.headers = header.iter().map(|h| h.to_string()).collect();
        self
    }

    /// Appends a single row.
    pub fn add_row(&mut self, row: Vec<&str>) -> &mut Self {
        self.data
            .push(row.iter().map(|cell| cell.to_string()).collect());
        self
    }

    /// Appends multiple rows.
    pub fn add_rows(&mut self, rows: Vec<Vec<&str>>) -> &mut Self {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Drops the named columns, leaving the rest in place.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let mut builder = CsvBuilder::from_raw_data(
    ///     vec!["id".to_string(), "label".to_string(), "score".to_string()],
    ///     vec![vec!["7".to_string(), "1".to_string(), "0.9".to_string()]],
    /// );
    ///
    /// builder.drop_columns(vec!["id"]);
    /// assert_eq!(builder.get_headers().unwrap(), &["label".to_string(), "score".to_string()]);
    /// ```
    pub fn drop_columns(&mut self, columns: Vec<&str>) -> &mut Self {
        let drop: HashSet<&str> = columns.into_iter().collect();
        let keep_indices: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !drop.contains(h.as_str()))
            .map(|(i, _)| i)
            .collect();

        self.headers = keep_indices
            .iter()
            .map(|&i| self.headers[i].clone())
            .collect();
        for row in &mut self.data {
            *row = keep_indices
                .iter()
                .filter_map(|&i| row.get(i).cloned())
                .collect();
        }
        self
    }

    /// Retains only the named columns, in the order given.
    pub fn retain_columns(&mut self, columns_to_retain: Vec<&str>) -> &mut Self {
        let keep_indices: Vec<usize> = columns_to_retain
            .iter()
            .filter_map(|col| self.headers.iter().position(|h| h == col))
            .collect();

        self.headers = keep_indices
            .iter()
            .map(|&i| self.headers[i].clone())
            .collect();
        for row in &mut self.data {
            *row = keep_indices
                .iter()
                .filter_map(|&i| row.get(i).cloned())
                .collect();
        }
        self
    }

    /// Renames columns from a list of `(existing_name, new_name)` pairs.
    pub fn rename_columns(&mut self, renames: Vec<(&str, &str)>) -> &mut Self {
        for (from, to) in renames {
            if let Some(header) = self.headers.iter_mut().find(|h| h.as_str() == from) {
                *header = to.to_string();
            }
        }
        self
    }

    /// Sorts rows by one or more `(column_name, "ASC"/"DESC")` keys,
    /// comparing numerically where both cells parse as numbers and
    /// lexically otherwise.
    pub fn cascade_sort(&mut self, orders: Vec<(String, String)>) -> &mut Self {
        let column_indices: HashMap<&str, usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        self.data.sort_by(|a, b| {
            let mut cmp = Ordering::Equal;
            for (column_name, order) in &orders {
                if let Some(&index) = column_indices.get(column_name.as_str()) {
                    let a_val = &a[index];
                    let b_val = &b[index];

                    cmp = if let (Ok(a_num), Ok(b_num)) =
                        (a_val.parse::<f64>(), b_val.parse::<f64>())
                    {
                        if order == "ASC" {
                            a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal)
                        } else {
                            b_num.partial_cmp(&a_num).unwrap_or(Ordering::Equal)
                        }
                    } else if order == "ASC" {
                        a_val.cmp(b_val)
                    } else {
                        b_val.cmp(a_val)
                    };

                    if cmp != Ordering::Equal {
                        break;
                    }
                }
            }
            cmp
        });

        self
    }

    /// Truncates the data to the first `limit` rows.
    pub fn limit(&mut self, limit: usize) -> &mut Self {
        if limit < self.data.len() {
            self.data.truncate(limit);
        }
        self.limit = Some(limit);
        self
    }

    pub fn limit_random(&mut self, limit: usize) -> &mut Self {
        if limit >= self.data.len() || limit == 0 {
            self.limit = Some(self.data.len());
            return self;
        }

        let mut rng = thread_rng();
        let sample = self
            .data
            .as_slice()
            .choose_multiple(&mut rng, limit)
            .cloned()
            .collect();

        self.data = sample;
        self.limit = Some(limit);
        self
    }

    /// Counts rows that are exact duplicates of an earlier row.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["label".to_string(), "score".to_string()],
    ///     vec![
    ///         vec!["1".to_string(), "0.9".to_string()],
    ///         vec!["1".to_string(), "0.9".to_string()],
    ///         vec!["0".to_string(), "0.4".to_string()],
    ///     ],
    /// );
    ///
    /// assert_eq!(builder.count_duplicates(), 1);
    /// ```
    pub fn count_duplicates(&self) -> usize {
        let mut unique_rows = HashSet::new();
        self.data
            .iter()
            .filter(|row| !unique_rows.insert((*row).clone()))
            .count()
    }

    /// Removes duplicate rows, keeping the first occurrence of each.
    pub fn remove_duplicates(&mut self) -> &mut Self {
        let mut unique_rows = HashSet::new();
        self.data.retain(|row| unique_rows.insert(row.clone()));
        self
    }

    /// Counts empty cells across the whole table.
    pub fn count_null_cells(&self) -> usize {
        self.data
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Returns the empty-cell count per column, in header order. A row
    /// too short to reach a column counts as empty for that column.
    pub fn null_count_per_column(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let count = self
                    .data
                    .iter()
                    .filter(|row| row.get(idx).map_or(true, |cell| cell.is_empty()))
                    .count();
                (header.clone(), count)
            })
            .collect()
    }

    /// Replaces empty string cells in the specified columns (or all
    /// columns, via `"*"`) with a replacement string.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let mut builder = CsvBuilder::from_raw_data(
    ///     vec!["label".to_string(), "score".to_string()],
    ///     vec![vec!["1".to_string(), "".to_string()]],
    /// );
    ///
    /// builder.replace_all_empty_string_cells_with(vec!["*"], "0");
    /// assert_eq!(builder.get_data().unwrap()[0][1], "0");
    /// ```
    pub fn replace_all_empty_string_cells_with(
        &mut self,
        columns: Vec<&str>,
        replacement: &str,
    ) -> &mut Self {
        let apply_to_all = columns.iter().any(|&col| col == "*");
        let column_indices: Vec<usize> = if apply_to_all {
            (0..self.headers.len()).collect()
        } else {
            columns
                .iter()
                .filter_map(|&col| self.headers.iter().position(|h| h == col))
                .collect()
        };

        for row in &mut self.data {
            for &index in &column_indices {
                if let Some(item) = row.get_mut(index) {
                    if item.is_empty() {
                        *item = replacement.to_string();
                    }
                }
            }
        }
        self
    }

    /// Trims white space at the beginning and end of every cell.
    pub fn trim_all(&mut self) -> &mut Self {
        for row in &mut self.data {
            for item in row.iter_mut() {
                *item = item.trim().to_string();
            }
        }

        self
    }

    /// Returns true when at least one data row is present.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Returns true when headers are present.
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Returns the headers, if any.
    pub fn get_headers(&self) -> Option<&[String]> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }

    /// Returns the data rows, if any.
    pub fn get_data(&self) -> Option<&Vec<Vec<String>>> {
        if self.data.is_empty() {
            None
        } else {
            Some(&self.data)
        }
    }

    /// Returns the error stashed by a forgiving constructor, if any.
    pub fn get_error(&self) -> Option<&(dyn Error + 'static)> {
        self.error.as_deref()
    }

    fn column_index(&self, column_name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column_name)
    }

    /// Returns every cell in a column that parses as `f64`, in row
    /// order. Non-numeric cells are skipped; an unknown column or a
    /// column with no numeric cells yields `None`.
    pub fn get_numeric_values(&self, column_name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(column_name)?;
        let values: Vec<f64> = self
            .data
            .iter()
            .filter_map(|row| row.get(idx).and_then(|val| val.parse::<f64>().ok()))
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    /// Returns the minimum numeric value in a column.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["date".to_string(), "temperature".to_string()],
    ///     vec![
    ///         vec!["2023-01-30".to_string(), "23.5".to_string()],
    ///         vec!["2023-01-30".to_string(), "24.1".to_string()],
    ///         vec!["2023-02-01".to_string(), "19.0".to_string()],
    ///     ],
    /// );
    ///
    /// assert_eq!(builder.get_numeric_min("temperature").unwrap(), 19.0);
    /// assert_eq!(builder.get_numeric_min("date"), None);
    /// ```
    pub fn get_numeric_min(&self, column_name: &str) -> Option<f64> {
        self.get_numeric_values(column_name)?
            .into_iter()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns the maximum numeric value in a column.
    pub fn get_numeric_max(&self, column_name: &str) -> Option<f64> {
        self.get_numeric_values(column_name)?
            .into_iter()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns the difference between a column's maximum and minimum
    /// numeric values.
    pub fn get_range(&self, column_name: &str) -> Option<f64> {
        let min = self.get_numeric_min(column_name)?;
        let max = self.get_numeric_max(column_name)?;
        Some(max - min)
    }

    /// Returns the sum of all numeric values in a column.
    pub fn get_sum(&self, column_name: &str) -> Option<f64> {
        let values = self.get_numeric_values(column_name)?;
        Some(values.iter().sum())
    }

    /// Returns the mean of all numeric values in a column.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["temperature".to_string()],
    ///     vec![
    ///         vec!["23.5".to_string()],
    ///         vec!["24.1".to_string()],
    ///         vec!["19.0".to_string()],
    ///     ],
    /// );
    ///
    /// let mean = builder.get_mean("temperature").unwrap();
    /// assert!((mean - 22.2).abs() < 1e-9);
    /// ```
    pub fn get_mean(&self, column_name: &str) -> Option<f64> {
        let values = self.get_numeric_values(column_name)?;
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Returns the median of all numeric values in a column.
    pub fn get_median(&self, column_name: &str) -> Option<f64> {
        let mut values = self.get_numeric_values(column_name)?;
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Some((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Some(values[mid])
        }
    }

    /// Returns the mode (most frequent non-empty cell value) in a
    /// column.
    pub fn get_mode(&self, column_name: &str) -> Option<String> {
        let idx = self.column_index(column_name)?;
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for row in &self.data {
            if let Some(val) = row.get(idx) {
                if !val.is_empty() {
                    *frequency.entry(val.as_str()).or_insert(0) += 1;
                }
            }
        }

        frequency
            .into_iter()
            .max_by_key(|&(_, count)| count)
            .map(|(val, _)| val.to_string())
    }

    /// Returns the population variance of all numeric values in a
    /// column.
    pub fn get_variance(&self, column_name: &str) -> Option<f64> {
        let values = self.get_numeric_values(column_name)?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance =
            values.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / values.len() as f64;
        Some(variance)
    }

    /// Returns the population standard deviation of all numeric values
    /// in a column.
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["temperature".to_string()],
    ///     vec![
    ///         vec!["23.5".to_string()],
    ///         vec!["24.1".to_string()],
    ///         vec!["19.0".to_string()],
    ///     ],
    /// );
    ///
    /// let std_dev = builder.get_standard_deviation("temperature").unwrap();
    /// assert!((std_dev - 2.28).abs() < 0.01);
    /// ```
    pub fn get_standard_deviation(&self, column_name: &str) -> Option<f64> {
        let variance = self.get_variance(column_name)?;
        Some(variance.sqrt())
    }

    /// Returns the non-empty cells in a column that do not parse as
    /// numbers.
    pub fn get_non_numeric_values(&self, column_name: &str) -> Option<Vec<String>> {
        let idx = self.column_index(column_name)?;
        Some(
            self.data
                .iter()
                .filter_map(|row| row.get(idx))
                .filter(|val| !val.is_empty() && val.parse::<f64>().is_err())
                .cloned()
                .collect(),
        )
    }

    /// Returns the distinct cell values in a column, in first-seen
    /// order.
    pub fn get_unique(&self, column_name: &str) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut unique_values = Vec::new();
        if let Some(index) = self.column_index(column_name) {
            for row in &self.data {
                if let Some(value) = row.get(index) {
                    if seen.insert(value.as_str()) {
                        unique_values.push(value.clone());
                    }
                }
            }
        }
        unique_values
    }

    /// Extracts aligned `(label, score)` pairs from the named columns,
    /// for handing to the evaluation routines.
    ///
    /// Row order is preserved so that `label` and `score` stay pairwise
    /// aligned. A missing column, a label that is not interpretable as
    /// 0/1, a score that is not a finite number, or a short row all fail
    /// with [`EvalError::Validation`].
    ///
    /// ```
    /// use charmkit::csv_utils::CsvBuilder;
    ///
    /// let builder = CsvBuilder::from_raw_data(
    ///     vec!["label".to_string(), "score".to_string()],
    ///     vec![
    ///         vec!["1".to_string(), "0.9".to_string()],
    ///         vec!["0".to_string(), "0.4".to_string()],
    ///     ],
    /// );
    ///
    /// let samples = builder.get_labeled_scores("label", "score").unwrap();
    /// assert_eq!(samples.len(), 2);
    /// assert!(samples[0].label);
    /// assert_eq!(samples[1].score, 0.4);
    /// ```
    pub fn get_labeled_scores(
        &self,
        label_column: &str,
        score_column: &str,
    ) -> Result<Vec<LabeledScore>, EvalError> {
        let label_idx = self
            .column_index(label_column)
            .ok_or_else(|| EvalError::Validation(format!("column '{}' not found", label_column)))?;
        let score_idx = self
            .column_index(score_column)
            .ok_or_else(|| EvalError::Validation(format!("column '{}' not found", score_column)))?;

        let mut samples = Vec::with_capacity(self.data.len());
        for (row_number, row) in self.data.iter().enumerate() {
            let label_cell = row.get(label_idx).ok_or_else(|| {
                EvalError::Validation(format!(
                    "row {} has no cell for column '{}'",
                    row_number, label_column
                ))
            })?;
            let score_cell = row.get(score_idx).ok_or_else(|| {
                EvalError::Validation(format!(
                    "row {} has no cell for column '{}'",
                    row_number, score_column
                ))
            })?;
            samples.push(LabeledScore::from_cells(label_cell, score_cell)?);
        }

        Ok(samples)
    }

    /// Prints the header names, one per line.
    pub fn print_columns(&mut self) -> &mut Self {
        for header in &self.headers {
            println!("{}", header);
        }
        self
    }

    /// Prints the number of data rows.
    pub fn print_row_count(&mut self) -> &mut Self {
        println!("Row count: {}", self.data.len());
        self
    }

    /// Prints all rows as a simple aligned table.
    pub fn print_table(&mut self) -> &mut Self {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.data {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let header_line: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect();
        println!("{}", header_line.join("  "));

        for row in &self.data {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(cell.len());
                    format!("{:width$}", cell, width = width)
                })
                .collect();
            println!("{}", line.join("  "));
        }

        self
    }

    /// Prints the distinct values in a column.
    pub fn print_unique(&mut self, column_name: &str) -> &mut Self {
        let unique_values = self.get_unique(column_name);
        println!(
            "Unique values in '{}': {}",
            column_name,
            unique_values.join(", ")
        );
        self
    }

    /// Prints a numerical analysis for each of the specified columns,
    /// built from the statistics getters.
    pub fn print_column_numerical_analysis(&self, column_names: Vec<&str>) {
        for column_name in column_names {
            println!("Analysis for column '{}':", column_name);

            if let Some(non_numeric_values) = self.get_non_numeric_values(column_name) {
                if !non_numeric_values.is_empty() {
                    println!("  Non-numeric values: {:?}", non_numeric_values);
                } else {
                    println!("  Non-numeric values: None found");
                }
            } else {
                println!("  Non-numeric values: Column not found or no data available");
            }

            if let Some(min) = self.get_numeric_min(column_name) {
                println!("  Minimum: {}", min);
            } else {
                println!("  Minimum: Not found or non-numeric data");
            }

            if let Some(max) = self.get_numeric_max(column_name) {
                println!("  Maximum: {}", max);
            } else {
                println!("  Maximum: Not found or non-numeric data");
            }

            if let Some(range) = self.get_range(column_name) {
                println!("  Range: {:.2}", range);
            } else {
                println!("  Range: Not applicable or non-numeric data");
            }

            if let Some(sum) = self.get_sum(column_name) {
                println!("  Sum: {:.2}", sum);
            } else {
                println!("  Sum: Not applicable or non-numeric data");
            }

            if let Some(mean) = self.get_mean(column_name) {
                println!("  Mean: {:.2}", mean);
            } else {
                println!("  Mean: Not applicable or non-numeric data");
            }

            if let Some(median) = self.get_median(column_name) {
                println!("  Median: {:.2}", median);
            } else {
                println!("  Median: Not applicable or non-numeric data");
            }

            if let Some(mode) = self.get_mode(column_name) {
                println!("  Mode: {}", mode);
            } else {
                println!("  Mode: Not applicable or non-numeric data");
            }

            if let Some(std_dev) = self.get_standard_deviation(column_name) {
                println!("  Standard Deviation: {:.2}", std_dev);
            } else {
                println!("  Standard Deviation: Not applicable or non-numeric data");
            }

            if let Some(variance) = self.get_variance(column_name) {
                println!("  Variance: {:.2}", variance);
            } else {
                println!("  Variance: Not applicable or non-numeric data");
            }
        }
    }
}
