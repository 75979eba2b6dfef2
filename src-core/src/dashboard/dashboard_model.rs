use serde::{Deserialize, Serialize};

/// Everything the page needs to draw one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub selected_month: Option<String>,
    pub available_months: Vec<String>,
    /// Goal, paid, remaining, daily pace, days left, in that order
    pub kpis: Vec<KpiCard>,
    pub progress: ProgressBar,
    pub charts: DashboardCharts,
    pub summary: MonthSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub key: KpiKey,
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub accent: String,
    pub background: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KpiKey {
    Goal,
    Paid,
    Remaining,
    DailyPace,
    DaysLeft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    /// Fill width in percent, within 0..=100
    pub width_percent: f64,
    pub percent_achieved: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub revenue: ChartSpec,
    pub commission: ChartSpec,
    pub clients: ChartSpec,
}

/// Declarative chart description, independent of the drawing library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub category_label: String,
    pub value_label: String,
    pub markers: bool,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    HorizontalBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub category: String,
    pub value: f64,
    pub color: String,
    /// Hover text, e.g. `Cliente A: R$ 1,000.00`
    pub tooltip: String,
}

/// Secondary figures shown below the charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub order_count: usize,
    pub quantity: String,
    pub commission: String,
}
