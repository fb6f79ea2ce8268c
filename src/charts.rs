//! Declarative chart descriptions.
//!
//! Each dashboard chart has exactly one builder here. Builders only map
//! computed statistics and rankings into a [`ChartSpec`]; drawing, colours and
//! layout belong to whatever renders the spec.

use crate::error::Result;
use crate::ranking::{top_n, TopN};
use crate::stats::{average, median};
use crate::types::{Dataset, Metric};
use serde::Serialize;

/// Records shown on the overview bar chart.
pub const OVERVIEW_LIMIT: usize = 30;
/// Entries in the share pie and the top-N bar charts.
pub const TOP_LIMIT: usize = 5;
pub const OTHERS_LABEL: &str = "Others";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// Upper bound of the value axis, when the chart has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
}

fn series(name: impl Into<String>, values: Vec<f64>) -> Series {
    Series {
        name: name.into(),
        values,
    }
}

/// Mobile and computer share for the first records in dataset order.
pub fn usage_bar(dataset: &Dataset) -> ChartSpec {
    let shown = &dataset.records()[..dataset.len().min(OVERVIEW_LIMIT)];
    ChartSpec {
        id: "usage",
        kind: ChartKind::Bar,
        title: "Mobile vs computer usage by country".to_string(),
        labels: shown
            .iter()
            .map(|r| format!("{}. {}", r.ordinal, r.country))
            .collect(),
        series: vec![
            series(Metric::Mobile.label(), shown.iter().map(|r| r.mobile).collect()),
            series(Metric::Computer.label(), shown.iter().map(|r| r.computer).collect()),
        ],
        y_max: Some(100.0),
    }
}

/// Top countries by mobile share, with the rest folded into one slice.
pub fn mobile_share_pie(dataset: &Dataset) -> Result<ChartSpec> {
    let top = top_n(dataset, Metric::Mobile, TOP_LIMIT)?;
    let mut labels: Vec<String> = top
        .leaders
        .iter()
        .map(|r| format!("{}. {}", r.ordinal, r.country))
        .collect();
    let mut values: Vec<f64> = top.leaders.iter().map(|r| r.mobile).collect();
    if top.leaders.len() < dataset.len() {
        labels.push(OTHERS_LABEL.to_string());
        values.push(top.remainder);
    }
    Ok(ChartSpec {
        id: "mobile_share",
        kind: ChartKind::Pie,
        title: format!("Top {} mobile usage", top.leaders.len()),
        labels,
        series: vec![series("Mobile (%)", values)],
        y_max: None,
    })
}

fn top_bar(id: &'static str, top: TopN) -> ChartSpec {
    let metric = top.metric;
    ChartSpec {
        id,
        kind: ChartKind::Bar,
        title: format!("Top {} {} usage", top.leaders.len(), metric),
        labels: top.leaders.iter().map(|r| r.country.clone()).collect(),
        series: vec![series(
            format!("{} (%)", metric.label()),
            top.leaders.iter().map(|r| metric.value(r)).collect(),
        )],
        y_max: Some(100.0),
    }
}

pub fn top_mobile_bar(dataset: &Dataset) -> Result<ChartSpec> {
    Ok(top_bar("top_mobile", top_n(dataset, Metric::Mobile, TOP_LIMIT)?))
}

pub fn top_computer_bar(dataset: &Dataset) -> Result<ChartSpec> {
    Ok(top_bar(
        "top_computer",
        top_n(dataset, Metric::Computer, TOP_LIMIT)?,
    ))
}

pub fn average_doughnut(dataset: &Dataset) -> Result<ChartSpec> {
    Ok(ChartSpec {
        id: "average",
        kind: ChartKind::Doughnut,
        title: "Average usage".to_string(),
        labels: vec![Metric::Mobile.label().to_string(), Metric::Computer.label().to_string()],
        series: vec![series(
            "Average (%)",
            vec![
                average(&dataset.values(Metric::Mobile))?,
                average(&dataset.values(Metric::Computer))?,
            ],
        )],
        y_max: None,
    })
}

pub fn median_bar(dataset: &Dataset) -> Result<ChartSpec> {
    Ok(ChartSpec {
        id: "median",
        kind: ChartKind::Bar,
        title: "Median usage".to_string(),
        labels: vec![Metric::Mobile.label().to_string(), Metric::Computer.label().to_string()],
        series: vec![series(
            "Median (%)",
            vec![
                median(&dataset.values(Metric::Mobile))?,
                median(&dataset.values(Metric::Computer))?,
            ],
        )],
        y_max: Some(100.0),
    })
}

pub fn all_charts(dataset: &Dataset) -> Result<Vec<ChartSpec>> {
    Ok(vec![
        usage_bar(dataset),
        mobile_share_pie(dataset)?,
        top_mobile_bar(dataset)?,
        top_computer_bar(dataset)?,
        average_doughnut(dataset)?,
        median_bar(dataset)?,
    ])
}
