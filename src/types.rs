use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tabled::Tabled;

/// One object of the JSON source: `{no?, country, mobile, computer}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub no: Option<u32>,
    pub country: String,
    pub mobile: f64,
    pub computer: f64,
}

/// A country's usage entry after ordinal backfill and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct Record {
    #[serde(rename = "no")]
    #[tabled(rename = "No")]
    pub ordinal: u32,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Mobile (%)")]
    pub mobile: f64,
    #[tabled(rename = "Computer (%)")]
    pub computer: f64,
}

impl Record {
    pub fn new(ordinal: u32, country: impl Into<String>, mobile: f64, computer: f64) -> Self {
        Self {
            ordinal,
            country: country.into(),
            mobile,
            computer,
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRecord { index, reason };
        if self.ordinal == 0 {
            return Err(invalid("ordinal must be positive".to_string()));
        }
        if self.country.trim().is_empty() {
            return Err(invalid("country is empty".to_string()));
        }
        for (name, v) in [("mobile", self.mobile), ("computer", self.computer)] {
            if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                return Err(invalid(format!("{name} = {v} is outside [0, 100]")));
            }
        }
        Ok(())
    }
}

/// Immutable, ordered set of records. Insertion order is the source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate already-numbered records.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::InvalidArgument("dataset has no records".to_string()));
        }
        let mut seen = HashSet::with_capacity(records.len());
        for (index, r) in records.iter().enumerate() {
            r.check(index)?;
            if !seen.insert(r.ordinal) {
                return Err(Error::InvalidRecord {
                    index,
                    reason: format!("duplicate ordinal {}", r.ordinal),
                });
            }
        }
        Ok(Self { records })
    }

    /// Backfill missing ordinals from input position, then validate.
    ///
    /// A `no` of 0 counts as missing, same as an absent field.
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self> {
        let mut records = Vec::with_capacity(raw.len());
        for (i, r) in raw.into_iter().enumerate() {
            let position = u32::try_from(i + 1).map_err(|_| Error::InvalidRecord {
                index: i,
                reason: "too many records".to_string(),
            })?;
            let ordinal = r.no.filter(|n| *n > 0).unwrap_or(position);
            records.push(Record {
                ordinal,
                country: r.country.trim().to_string(),
                mobile: r.mobile,
                computer: r.computer,
            });
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The chosen metric for every record, in dataset order.
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| metric.value(r)).collect()
    }

    pub fn get_by_ordinal(&self, ordinal: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.ordinal == ordinal)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Mobile,
    Computer,
}

impl Metric {
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Metric::Mobile => record.mobile,
            Metric::Computer => record.computer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Mobile => "Mobile",
            Metric::Computer => "Computer",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Mobile => f.write_str("mobile"),
            Metric::Computer => f.write_str("computer"),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Metric::Mobile),
            "computer" => Ok(Metric::Computer),
            other => Err(Error::InvalidArgument(format!("unknown metric '{other}'"))),
        }
    }
}

/// Mutually exclusive range predicate over `mobile` used by the table filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bucket {
    #[default]
    None,
    MobileGt60,
    Mobile50To60,
    MobileLt50,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::None,
        Bucket::MobileGt60,
        Bucket::Mobile50To60,
        Bucket::MobileLt50,
    ];

    pub fn matches(self, mobile: f64) -> bool {
        match self {
            Bucket::None => true,
            Bucket::MobileGt60 => mobile > 60.0,
            Bucket::Mobile50To60 => (50.0..=60.0).contains(&mobile),
            Bucket::MobileLt50 => mobile < 50.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::None => "none",
            Bucket::MobileGt60 => "mobile_gt_60",
            Bucket::Mobile50To60 => "mobile_50_60",
            Bucket::MobileLt50 => "mobile_lt_50",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = Error;

    /// An empty selector is the "all" option.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Bucket::None);
        }
        Bucket::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown bucket '{s}'")))
    }
}
