use crate::error::{Error, Result};
use crate::types::{Dataset, Metric, Record};
use serde::Serialize;
use std::cmp::Ordering;

/// The `n` highest records for a metric plus the summed metric of the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopN {
    pub metric: Metric,
    pub leaders: Vec<Record>,
    pub remainder: f64,
}

/// Descending by metric, ties by ascending ordinal.
fn rank_order(metric: Metric) -> impl Fn(&Record, &Record) -> Ordering {
    move |a: &Record, b: &Record| {
        metric
            .value(b)
            .partial_cmp(&metric.value(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ordinal.cmp(&b.ordinal))
    }
}

pub fn top_n(dataset: &Dataset, metric: Metric, n: usize) -> Result<TopN> {
    if n == 0 {
        return Err(Error::InvalidArgument("top-N needs n >= 1".to_string()));
    }
    let mut ranked: Vec<Record> = dataset.records().to_vec();
    ranked.sort_by(rank_order(metric));

    let tail = ranked.split_off(n.min(ranked.len()));
    let remainder: f64 = tail.iter().map(|r| metric.value(r)).sum();
    tracing::debug!(%metric, n, kept = ranked.len(), remainder, "ranked dataset");
    Ok(TopN {
        metric,
        leaders: ranked,
        remainder,
    })
}

/// Entry point for user-supplied counts, which may be zero or negative.
pub fn top_n_signed(dataset: &Dataset, metric: Metric, n: i64) -> Result<TopN> {
    if n <= 0 {
        return Err(Error::InvalidArgument(format!("top-N needs n >= 1, got {n}")));
    }
    let n = usize::try_from(n).map_err(|_| Error::InvalidArgument(format!("n = {n} too large")))?;
    top_n(dataset, metric, n)
}

/// Highest record for a metric; the earliest ordinal wins a tie.
pub fn leader(dataset: &Dataset, metric: Metric) -> Result<Record> {
    let order = rank_order(metric);
    dataset
        .iter()
        .min_by(|a, b| order(a, b))
        .cloned()
        .ok_or(Error::EmptyInput)
}
