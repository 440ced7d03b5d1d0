// eval_utils.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the evaluation routines. Both variants propagate
/// synchronously to the caller; nothing is swallowed or retried.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Malformed or missing input: a label that is not interpretable as
    /// 0/1, a score that is not a finite real number, an empty dataset,
    /// or a column that cannot be resolved.
    #[error("validation error: {0}")]
    Validation(String),

    /// The dataset admits no well-defined maximum-F1 operating point,
    /// e.g. every label belongs to the same class.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// One evaluation sample: a ground-truth label paired with the
/// classifier's predicted confidence for that sample.
///
/// A dataset is an ordered sequence of `LabeledScore`; the ordering
/// itself does not affect the computation, but `label` and `score` must
/// stay pairwise aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledScore {
    pub label: bool,
    pub score: f64,
}

impl LabeledScore {
    /// Builds a `LabeledScore` from two raw tabular cells, coercing the
    /// label cell to 0/1 and the score cell to a finite real number.
    ///
    /// Integer cells (`"0"`, `"1"`) and float cells exactly equal to 0 or
    /// 1 (`"1.0"`) are accepted as labels; anything else is rejected.
    ///
    /// ```
    /// use charmkit::eval_utils::LabeledScore;
    ///
    /// let sample = LabeledScore::from_cells("1", "0.83").unwrap();
    /// assert!(sample.label);
    /// assert_eq!(sample.score, 0.83);
    ///
    /// // A float label cell coerces as long as it is exactly 0 or 1
    /// let sample = LabeledScore::from_cells("0.0", "0.2").unwrap();
    /// assert!(!sample.label);
    ///
    /// assert!(LabeledScore::from_cells("yes", "0.5").is_err());
    /// assert!(LabeledScore::from_cells("2", "0.5").is_err());
    /// assert!(LabeledScore::from_cells("1", "not_a_number").is_err());
    /// ```
    pub fn from_cells(label_cell: &str, score_cell: &str) -> Result<Self, EvalError> {
        let label_cell = label_cell.trim();
        let score_cell = score_cell.trim();

        let label = match label_cell.parse::<i64>() {
            Ok(0) => false,
            Ok(1) => true,
            Ok(other) => {
                return Err(EvalError::Validation(format!(
                    "label '{}' is not 0 or 1",
                    other
                )))
            }
            Err(_) => match label_cell.parse::<f64>() {
                Ok(v) if v == 0.0 => false,
                Ok(v) if v == 1.0 => true,
                _ => {
                    return Err(EvalError::Validation(format!(
                        "label '{}' is not interpretable as 0 or 1",
                        label_cell
                    )))
                }
            },
        };

        let score = score_cell.parse::<f64>().map_err(|_| {
            EvalError::Validation(format!("score '{}' is not a number", score_cell))
        })?;
        if !score.is_finite() {
            return Err(EvalError::Validation(format!(
                "score '{}' is not a finite number",
                score_cell
            )));
        }

        Ok(LabeledScore { label, score })
    }
}

/// One point on a precision-recall curve. The conventional boundary point
/// appended at the end of every curve carries `threshold: None`; every
/// swept point carries the score cutoff that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrPoint {
    pub precision: f64,
    pub recall: f64,
    pub threshold: Option<f64>,
}

/// The F1-maximizing operating point derived from a precision-recall
/// curve. `f1` is the maximum F1 over all swept curve points; ties
/// resolve to the first maximizing point in the curve's native order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalOperatingPoint {
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// One per-file evaluation result, accumulated across files so a
/// downstream comparison step can chart F1 side by side. The
/// `file_identifier` should be a human-readable base name suitable for
/// an axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub file_identifier: String,
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ResultRecord {
    pub fn new(file_identifier: &str, optimum: &OptimalOperatingPoint) -> Self {
        ResultRecord {
            file_identifier: file_identifier.to_string(),
            threshold: optimum.threshold,
            precision: optimum.precision,
            recall: optimum.recall,
            f1: optimum.f1,
        }
    }
}

/// Computes precision-recall curves and F1-optimal operating points for
/// binary classification datasets.
///
/// The computation is pure and synchronous: no I/O, no printing, no
/// internal locking. The accumulator is caller-owned; `compute` only
/// appends to it, and appends nothing on any error path. Callers sharing
/// one accumulator across threads must synchronize it externally.
pub struct ThresholdOptimizer;

impl ThresholdOptimizer {
    /// Builds the precision-recall curve for `samples`.
    ///
    /// Every distinct score value is swept as a threshold; at threshold
    /// `t` a sample is predicted positive iff `score >= t`. Points are
    /// returned in increasing-threshold order, so recall is
    /// non-increasing along the sequence. Thresholds below the point
    /// where recall first saturates are dropped, and a final boundary
    /// point `(precision = 1, recall = 0, threshold = None)` is appended.
    ///
    /// Single-class input does not error here: an all-positive dataset
    /// yields a well-formed curve with precision 1 everywhere, and an
    /// all-negative dataset yields `NaN` recall at the swept points.
    /// Use [`ThresholdOptimizer::compute`] when a well-defined optimum
    /// is required.
    ///
    /// ```
    /// use charmkit::eval_utils::{LabeledScore, ThresholdOptimizer};
    ///
    /// let samples = vec![
    ///     LabeledScore { label: true, score: 0.9 },
    ///     LabeledScore { label: true, score: 0.8 },
    ///     LabeledScore { label: false, score: 0.4 },
    ///     LabeledScore { label: true, score: 0.3 },
    ///     LabeledScore { label: false, score: 0.2 },
    /// ];
    ///
    /// let curve = ThresholdOptimizer::precision_recall_curve(&samples).unwrap();
    ///
    /// // At threshold 0.8, two of the three positives are captured with
    /// // no false positives.
    /// let point = curve
    ///     .iter()
    ///     .find(|p| p.threshold == Some(0.8))
    ///     .unwrap();
    /// assert_eq!(point.precision, 1.0);
    /// assert_eq!(point.recall, 2.0 / 3.0);
    ///
    /// // The boundary point closes the curve.
    /// let last = curve.last().unwrap();
    /// assert_eq!(last.precision, 1.0);
    /// assert_eq!(last.recall, 0.0);
    /// assert_eq!(last.threshold, None);
    /// ```
    pub fn precision_recall_curve(samples: &[LabeledScore]) -> Result<Vec<PrPoint>, EvalError> {
        if samples.is_empty() {
            return Err(EvalError::Validation(
                "cannot compute a precision-recall curve over an empty dataset".to_string(),
            ));
        }
        if let Some(bad) = samples.iter().find(|s| !s.score.is_finite()) {
            return Err(EvalError::Validation(format!(
                "score '{}' is not a finite number",
                bad.score
            )));
        }

        let mut order: Vec<usize> = (0..samples.len()).collect();
        order.sort_by(|&a, &b| samples[b].score.total_cmp(&samples[a].score));

        let total_positives = samples.iter().filter(|s| s.label).count();

        // Cumulative true positives and predicted positives at each
        // distinct threshold, highest threshold first. Equal scores share
        // a threshold and collapse into one point.
        let mut swept: Vec<(f64, usize, usize)> = Vec::new();
        let mut true_positives = 0usize;
        let mut predicted_positives = 0usize;
        let mut i = 0;
        while i < order.len() {
            let threshold = samples[order[i]].score;
            while i < order.len() && samples[order[i]].score == threshold {
                predicted_positives += 1;
                if samples[order[i]].label {
                    true_positives += 1;
                }
                i += 1;
            }
            swept.push((threshold, true_positives, predicted_positives));
        }

        // Recall saturates once every positive is captured; lower
        // thresholds add nothing but false positives.
        let saturation = swept
            .iter()
            .position(|&(_, tp, _)| tp == total_positives)
            .unwrap_or(swept.len() - 1);

        let mut curve: Vec<PrPoint> = swept[..=saturation]
            .iter()
            .rev()
            .map(|&(threshold, tp, pp)| PrPoint {
                precision: tp as f64 / pp as f64,
                recall: if total_positives > 0 {
                    tp as f64 / total_positives as f64
                } else {
                    f64::NAN
                },
                threshold: Some(threshold),
            })
            .collect();
        curve.push(PrPoint {
            precision: 1.0,
            recall: 0.0,
            threshold: None,
        });

        Ok(curve)
    }

    /// Returns the harmonic mean of precision and recall, `2PR/(P+R)`.
    ///
    /// When `P + R == 0` (or either input is `NaN`) the result is `NaN`
    /// rather than a division error; `NaN` F1 values are never candidates
    /// for the maximum.
    ///
    /// ```
    /// use charmkit::eval_utils::ThresholdOptimizer;
    ///
    /// assert_eq!(ThresholdOptimizer::f1_score(1.0, 0.5), 2.0 / 3.0);
    /// assert!(ThresholdOptimizer::f1_score(0.0, 0.0).is_nan());
    /// ```
    pub fn f1_score(precision: f64, recall: f64) -> f64 {
        if precision + recall == 0.0 {
            return f64::NAN;
        }
        2.0 * precision * recall / (precision + recall)
    }

    /// Selects the F1-maximizing operating point from a curve.
    ///
    /// Only swept points (those with an associated threshold) are
    /// candidates, `NaN` F1 values are excluded from the maximum, and
    /// ties resolve to the lowest index in the curve's native order. A
    /// curve with no valid candidate fails with
    /// [`EvalError::DegenerateInput`].
    pub fn optimal_operating_point(
        curve: &[PrPoint],
    ) -> Result<OptimalOperatingPoint, EvalError> {
        let mut best: Option<OptimalOperatingPoint> = None;
        for point in curve {
            let threshold = match point.threshold {
                Some(t) => t,
                None => continue,
            };
            let f1 = Self::f1_score(point.precision, point.recall);
            if f1.is_nan() {
                continue;
            }
            // Strict comparison keeps the first maximizing index on ties.
            if best.map_or(true, |b| f1 > b.f1) {
                best = Some(OptimalOperatingPoint {
                    threshold,
                    precision: point.precision,
                    recall: point.recall,
                    f1,
                });
            }
        }
        best.ok_or_else(|| {
            EvalError::DegenerateInput(
                "no curve point has a well-defined F1 score".to_string(),
            )
        })
    }

    /// Computes the precision-recall curve for one dataset file, derives
    /// its F1-optimal operating point, and appends a [`ResultRecord`]
    /// for `file_identifier` to the caller-owned `accumulator`.
    ///
    /// The returned curve is the exact shape a plotting step needs to
    /// render recall against precision; the accumulator, after a batch of
    /// calls, is the exact shape a comparison step needs to chart F1
    /// across files. Records appear in call order, and nothing is
    /// appended when an error is returned.
    ///
    /// Datasets whose labels all belong to one class fail with
    /// [`EvalError::DegenerateInput`]; no placeholder optimum is
    /// fabricated and no `NaN` reaches the accumulator.
    ///
    /// ```
    /// use charmkit::eval_utils::{LabeledScore, ThresholdOptimizer};
    ///
    /// let samples = vec![
    ///     LabeledScore { label: true, score: 0.9 },
    ///     LabeledScore { label: true, score: 0.8 },
    ///     LabeledScore { label: false, score: 0.4 },
    ///     LabeledScore { label: true, score: 0.3 },
    ///     LabeledScore { label: false, score: 0.2 },
    /// ];
    ///
    /// let mut accumulator = Vec::new();
    /// let curve =
    ///     ThresholdOptimizer::compute(&samples, "scores_q1.csv", &mut accumulator).unwrap();
    ///
    /// assert!(!curve.is_empty());
    /// assert_eq!(accumulator.len(), 1);
    /// assert_eq!(accumulator[0].file_identifier, "scores_q1.csv");
    /// assert_eq!(accumulator[0].threshold, 0.3);
    /// ```
    pub fn compute(
        samples: &[LabeledScore],
        file_identifier: &str,
        accumulator: &mut Vec<ResultRecord>,
    ) -> Result<Vec<PrPoint>, EvalError> {
        if samples.is_empty() {
            return Err(EvalError::Validation(format!(
                "dataset '{}' is empty",
                file_identifier
            )));
        }

        let positives = samples.iter().filter(|s| s.label).count();
        if positives == 0 || positives == samples.len() {
            return Err(EvalError::DegenerateInput(format!(
                "dataset '{}' contains only one class ({} of {} samples positive)",
                file_identifier,
                positives,
                samples.len()
            )));
        }

        let curve = Self::precision_recall_curve(samples)?;
        let optimum = Self::optimal_operating_point(&curve)?;
        accumulator.push(ResultRecord::new(file_identifier, &optimum));

        Ok(curve)
    }
}
