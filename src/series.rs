use std::collections::HashSet;

use crate::error::WriteError;

/// The label name that carries a series' metric name.
pub const METRIC_NAME_LABEL: &str = "__name__";

/// The ordered set of name/value pairs identifying a time series.
///
/// Pairs keep their input order on the wire; backends may rely on it for
/// deduplication, so no sorting is performed here. Callers conventionally
/// put `__name__` first.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSet {
    pairs: Vec<(String, String)>,
}

impl LabelSet {
    /// Validate a set of label pairs.
    ///
    /// An empty set or a repeated label name is rejected.
    pub fn new(pairs: Vec<(String, String)>) -> Result<LabelSet, WriteError> {
        if pairs.is_empty() {
            return Err(WriteError::Validation("label set is empty".into()));
        }
        let mut seen = HashSet::with_capacity(pairs.len());
        for (name, _) in &pairs {
            if !seen.insert(name.as_str()) {
                return Err(WriteError::Validation(format!(
                    "duplicate label name: {}",
                    name
                )));
            }
        }
        Ok(LabelSet { pairs })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// The value of the `__name__` label, if present.
    pub fn metric_name(&self) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == METRIC_NAME_LABEL)
            .map(|(_, value)| value.as_str())
    }
}

/// One series' identity plus its measurements: parallel `values` and
/// `timestamps` sequences, timestamps in milliseconds since the epoch.
///
/// Construction is the validation boundary; a `SampleSeries` that exists
/// is always encodable.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    labels: LabelSet,
    values: Vec<f64>,
    timestamps: Vec<i64>,
}

impl SampleSeries {
    pub fn new(
        labels: LabelSet,
        values: Vec<f64>,
        timestamps: Vec<i64>,
    ) -> Result<SampleSeries, WriteError> {
        if values.len() != timestamps.len() {
            return Err(WriteError::Validation(format!(
                "series has {} values but {} timestamps",
                values.len(),
                timestamps.len()
            )));
        }
        if values.is_empty() {
            return Err(WriteError::Validation("series has no samples".into()));
        }
        Ok(SampleSeries {
            labels,
            values,
            timestamps,
        })
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn sample_count(&self) -> usize {
        self.values.len()
    }
}
