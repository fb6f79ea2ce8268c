use crate::types::{Bucket, Dataset, Record};

/// Search text plus bucket selector, as entered at the table controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub text: String,
    pub bucket: Bucket,
}

impl FilterQuery {
    pub fn new(text: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            text: text.into(),
            bucket,
        }
    }

    pub fn apply(&self, dataset: &Dataset) -> Vec<Record> {
        filter(dataset, &self.text, self.bucket)
    }
}

/// Records whose country contains `query` (case-insensitive) and whose
/// mobile share falls in `bucket`, in dataset order. No match yields an
/// empty vec.
pub fn filter(dataset: &Dataset, query: &str, bucket: Bucket) -> Vec<Record> {
    let needle = query.to_lowercase();
    let out: Vec<Record> = dataset
        .iter()
        .filter(|r| needle.is_empty() || r.country.to_lowercase().contains(&needle))
        .filter(|r| bucket.matches(r.mobile))
        .cloned()
        .collect();
    tracing::debug!(query, %bucket, matched = out.len(), "filtered table");
    out
}
