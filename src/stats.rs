//! Descriptive statistics and correlation over numeric series.
//!
//! Every function here is pure and leaves its input untouched. Empty input is
//! an error rather than a silent `0.0` or `NaN`, since a wrong figure on the
//! dashboard is worse than no figure.

use crate::error::{Error, Result};
use serde::Serialize;
use std::cmp::Ordering;

pub fn average(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sum: f64 = xs.iter().copied().sum();
    Ok(sum / xs.len() as f64)
}

/// Middle value of the sorted series, or the mean of the two middle values
/// when the length is even. Sorts a copy.
pub fn median(xs: &[f64]) -> Result<f64> {
    if xs.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Population standard deviation. A single value has deviation 0.
pub fn standard_deviation(xs: &[f64]) -> Result<f64> {
    let mean = average(xs)?;
    let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
    Ok(variance.sqrt())
}

pub fn min_max(xs: &[f64]) -> Result<(f64, f64)> {
    let first = *xs.first().ok_or(Error::EmptyInput)?;
    Ok(xs
        .iter()
        .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

pub fn range(xs: &[f64]) -> Result<f64> {
    let (lo, hi) = min_max(xs)?;
    Ok(hi - lo)
}

/// Pearson product-moment correlation of two equally long series.
///
/// Needs at least two points per side and non-zero variance in both.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return Err(Error::DimensionMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    // A constant series leaves rounding residue in its deviations, so test
    // the values themselves rather than the summed squares.
    if is_constant(xs) || is_constant(ys) {
        return Err(Error::UndefinedCorrelation);
    }
    let mean_x = average(xs)?;
    let mean_y = average(ys)?;

    let (mut num, mut den_x, mut den_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    if den_x == 0.0 || den_y == 0.0 {
        return Err(Error::UndefinedCorrelation);
    }
    let r = num / (den_x.sqrt() * den_y.sqrt());
    if !r.is_finite() {
        return Err(Error::UndefinedCorrelation);
    }
    Ok(r.clamp(-1.0, 1.0))
}

fn is_constant(xs: &[f64]) -> bool {
    xs.split_first()
        .map_or(true, |(first, rest)| rest.iter().all(|x| x == first))
}

/// Descriptive statistics for one metric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl Summary {
    pub fn compute(xs: &[f64]) -> Result<Self> {
        let (min, max) = min_max(xs)?;
        let summary = Self {
            count: xs.len(),
            mean: average(xs)?,
            median: median(xs)?,
            std_dev: standard_deviation(xs)?,
            min,
            max,
            range: max - min,
        };
        tracing::debug!(count = summary.count, mean = summary.mean, "computed summary");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[60.0, 70.0, 80.0]).unwrap(), 70.0);
        assert_eq!(median(&[60.0, 70.0]).unwrap(), 65.0);
        assert_eq!(median(&[80.0, 60.0, 70.0]).unwrap(), 70.0);
    }

    #[test]
    fn median_leaves_input_unsorted() {
        let xs = vec![3.0, 1.0, 2.0];
        median(&xs).unwrap();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn empty_input_is_rejected_everywhere() {
        assert!(matches!(average(&[]), Err(Error::EmptyInput)));
        assert!(matches!(median(&[]), Err(Error::EmptyInput)));
        assert!(matches!(standard_deviation(&[]), Err(Error::EmptyInput)));
        assert!(matches!(range(&[]), Err(Error::EmptyInput)));
        assert!(Summary::compute(&[]).is_err());
    }

    #[test]
    fn average_stays_within_bounds() {
        let series: [&[f64]; 4] = [
            &[5.0],
            &[80.0, 40.0],
            &[0.0, 100.0, 33.3, 66.6, 12.5],
            &[55.9, 55.9, 55.9],
        ];
        for xs in series {
            let (lo, hi) = min_max(xs).unwrap();
            let avg = average(xs).unwrap();
            assert!(avg >= lo - EPS && avg <= hi + EPS, "{avg} not in [{lo}, {hi}]");
        }
    }

    #[test]
    fn std_dev_is_population() {
        assert_eq!(standard_deviation(&[42.0]).unwrap(), 0.0);
        let sd = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.0).abs() < EPS);
    }

    #[test]
    fn range_is_max_minus_min() {
        assert_eq!(range(&[50.0, 64.0, 57.0]).unwrap(), 14.0);
        assert_eq!(range(&[1.0]).unwrap(), 0.0);
    }

    #[test]
    fn pearson_self_and_symmetry() {
        let xs = [80.0, 40.0, 55.0, 61.5, 70.0];
        let ys = [20.0, 60.0, 45.0, 38.5, 29.0];
        assert!((pearson_correlation(&xs, &xs).unwrap() - 1.0).abs() < EPS);
        let a = pearson_correlation(&xs, &ys).unwrap();
        let b = pearson_correlation(&ys, &xs).unwrap();
        assert_eq!(a, b);
        assert!((-1.0..=1.0).contains(&a));
    }

    #[test]
    fn pearson_perfect_negative() {
        let xs = [80.0, 40.0, 55.0];
        let ys: Vec<f64> = xs.iter().map(|x| 100.0 - x).collect();
        assert!((pearson_correlation(&xs, &ys).unwrap() + 1.0).abs() < EPS);
    }

    #[test]
    fn pearson_rejects_bad_shapes() {
        assert!(matches!(
            pearson_correlation(&[1.0, 2.0], &[1.0]),
            Err(Error::DimensionMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(
            pearson_correlation(&[1.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            pearson_correlation(&[50.0, 50.0, 50.0], &[1.0, 2.0, 3.0]),
            Err(Error::UndefinedCorrelation)
        ));
    }

    #[test]
    fn pearson_rejects_inexact_constants() {
        for v in [55.9, 0.1, 44.1, 12.7, 78.3] {
            for n in [3usize, 7, 10] {
                let constant = vec![v; n];
                let ramp: Vec<f64> = (0..n).map(|i| i as f64).collect();
                assert!(
                    matches!(
                        pearson_correlation(&constant, &ramp),
                        Err(Error::UndefinedCorrelation)
                    ),
                    "{v} x {n}"
                );
                assert!(matches!(
                    pearson_correlation(&ramp, &constant),
                    Err(Error::UndefinedCorrelation)
                ));
            }
        }
    }

    #[test]
    fn pearson_survives_large_magnitudes() {
        let xs = [1e100, 2e100, 3e100];
        let ys = [3e100, 2e100, 1e100];
        assert!((pearson_correlation(&xs, &ys).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_matches_individual_functions() {
        let xs = [80.0, 40.0];
        let s = Summary::compute(&xs).unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 60.0);
        assert_eq!(s.median, 60.0);
        assert_eq!(s.std_dev, 20.0);
        assert_eq!((s.min, s.max, s.range), (40.0, 80.0, 40.0));
    }
}
