// lib.rs
//! # CHARMKIT
//!
//! A small, graceful toolkit for exploratory data analysis and binary
//! classifier evaluation: load tabular data, clean it, summarize it, and
//! find the F1-optimal decision threshold for each of your score files.
//!
//! ## `csv_utils`
//!
//! - **Purpose**: An in-memory toolkit for tabular data in AI/ML
//!   evaluation pipelines.
//! - **Features**:
//!   - **CsvBuilder**: A versatile builder for loading and manipulating
//!     tabular data:
//!   - **Easy Initialization**: Start empty, from raw headers and rows,
//!     from a CSV file, or from a JSON array.
//!   - **Chainable Methods**: Combine cleaning, sorting, sampling and
//!     column operations in a fluent and readable manner.
//!   - **Data Cleaning**: Count and remove duplicate rows, count and
//!     fill empty cells, trim whitespace.
//!   - **Statistics Getters**: Min, max, range, sum, mean, median, mode,
//!     variance and standard deviation per column.
//!   - **Evaluation Bridge**: Extract validated `(label, score)` pairs
//!     for the threshold optimizer.
//!   - **Flexible Saving Options**: Save the cleaned table back to a
//!     CSV path.
//!
//! ## `eda_utils`
//!
//! - **Purpose**: Exploratory-data-analysis passes with structured,
//!   printable reports.
//! - **Features**:
//!   - **Eda::clean**: Duplicate removal and null filling, reported as a
//!     `CleanReport` instead of being narrated inline.
//!   - **Eda::describe**: Per-column descriptive statistics
//!     (`ColumnSummary`), computed across columns in parallel.
//!   - **Presentation helpers**: `print_clean_report` and
//!     `print_summaries` render the same structures for the console.
//!
//! ## `eval_utils`
//!
//! - **Purpose**: Precision-recall analysis for binary classifiers.
//! - **Features**:
//!   - **ThresholdOptimizer**: Computes the precision-recall curve over
//!     every distinct score threshold, derives the F1-maximizing
//!     operating point (lowest-index tie-break), and appends one
//!     `ResultRecord` per dataset file to a caller-owned accumulator for
//!     later cross-file comparison.
//!   - Pure computation: no I/O, no printing, nothing appended on error
//!     paths. The returned curve is exactly what a plotting step needs;
//!     the accumulator is exactly what a comparison chart needs.
//!   - Degenerate single-class datasets fail with a typed error instead
//!     of fabricating an optimum or letting `NaN` leak downstream.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod csv_utils;
pub mod eda_utils;
pub mod eval_utils;
