//! Headline figures and the analysis narrative.
//!
//! Every number shown here is computed from the full dataset at call time;
//! nothing in the narrative is a literal.

use crate::error::{Error, Result};
use crate::ranking::leader;
use crate::stats::{pearson_correlation, Summary};
use crate::types::{Dataset, Metric};
use crate::util::{format_number, format_percent};
use serde::Serialize;

pub const SOURCE_NOTE: &str =
    "Source: DataReportal, Digital 2024 Global Overview (https://wearesocial.com/id/blog/2024/07/digital-2024-july-global-statshot-report/)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub avg_mobile: f64,
    pub avg_computer: f64,
    pub top_country: String,
    pub top_mobile: f64,
}

impl Kpis {
    pub fn compute(dataset: &Dataset) -> Result<Self> {
        let top = leader(dataset, Metric::Mobile)?;
        Ok(Self {
            avg_mobile: crate::stats::average(&dataset.values(Metric::Mobile))?,
            avg_computer: crate::stats::average(&dataset.values(Metric::Computer))?,
            top_country: top.country,
            top_mobile: top.mobile,
        })
    }

    /// The three KPI cards, one decimal like the dashboard header.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Average mobile:   {}", format_percent(self.avg_mobile, 1)),
            format!("Average computer: {}", format_percent(self.avg_computer, 1)),
            format!("Top mobile:       {} ({}%)", self.top_country, self.top_mobile),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub mobile: Summary,
    pub computer: Summary,
    /// `None` when the dataset cannot support a correlation (fewer than two
    /// rows, or a constant column).
    pub correlation: Option<f64>,
    pub correlation_note: Option<String>,
}

impl Analysis {
    pub fn compute(dataset: &Dataset) -> Result<Self> {
        let mobile_values = dataset.values(Metric::Mobile);
        let computer_values = dataset.values(Metric::Computer);
        let mobile = Summary::compute(&mobile_values)?;
        let computer = Summary::compute(&computer_values)?;

        let (correlation, correlation_note) =
            match pearson_correlation(&mobile_values, &computer_values) {
                Ok(r) => (Some(r), None),
                Err(e @ (Error::DimensionMismatch { .. } | Error::UndefinedCorrelation)) => {
                    tracing::warn!(error = %e, "correlation not shown");
                    (None, Some(e.to_string()))
                }
                Err(e) => return Err(e),
            };

        Ok(Self {
            mobile,
            computer,
            correlation,
            correlation_note,
        })
    }

    fn spread_label(&self) -> &'static str {
        match self.mobile.range {
            r if r < 10.0 => "low",
            r if r <= 25.0 => "moderate",
            _ => "high",
        }
    }

    fn dominant(&self) -> &'static str {
        if self.mobile.mean >= self.computer.mean {
            "mobile devices"
        } else {
            "computers"
        }
    }

    /// Analysis paragraph, one sentence per line.
    pub fn narrative(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Average mobile usage is {}.", format_percent(self.mobile.mean, 1)),
            format!(
                "Average computer usage is {}.",
                format_percent(self.computer.mean, 1)
            ),
            format!(
                "Median usage: mobile {}, computer {}.",
                format_percent(self.mobile.median, 1),
                format_percent(self.computer.median, 1)
            ),
            format!(
                "Mobile usage spans a range of {} across countries, a {} variation.",
                format_percent(self.mobile.range, 1),
                self.spread_label()
            ),
            format!(
                "Standard deviation of mobile usage is {}.",
                format_percent(self.mobile.std_dev, 2)
            ),
        ];
        match (self.correlation, &self.correlation_note) {
            (Some(r), _) => lines.push(format!(
                "Pearson correlation between mobile and computer usage is {}.",
                format_number(r, 4)
            )),
            (None, Some(note)) => {
                lines.push(format!("Correlation between mobile and computer usage is undefined ({note})."))
            }
            (None, None) => {}
        }
        lines.push(format!(
            "Internet access across the {} countries is led by {}.",
            self.mobile.count,
            self.dominant()
        ));
        lines
    }
}
