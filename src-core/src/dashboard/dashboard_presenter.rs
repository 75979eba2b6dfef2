use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::dashboard_model::{
    ChartKind, ChartPoint, ChartSpec, DashboardCharts, DashboardView, KpiCard, KpiKey,
    MonthSummary, ProgressBar,
};
use super::formatting::{format_currency, format_percent};
use super::palette::{client_colors, COMMISSION_COLOR, REVENUE_COLOR};
use crate::aggregation::{DailyPoint, MonthlyAggregate};
use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::goals::GoalPacing;

pub const DASHBOARD_TITLE: &str = "Dashboard Livro Caixa";

/// Turns aggregated figures into display strings and chart specs
#[derive(Debug, Clone)]
pub struct DashboardPresenter {
    currency_symbol: String,
}

impl Default for DashboardPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl DashboardPresenter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, value: Decimal) -> String {
        format_currency(&self.currency_symbol, value)
    }

    /// Build the view; month selector fields are left empty for the caller
    pub fn present(&self, aggregate: &MonthlyAggregate, pacing: &GoalPacing) -> DashboardView {
        DashboardView {
            title: DASHBOARD_TITLE.to_string(),
            selected_month: None,
            available_months: Vec::new(),
            kpis: self.kpi_cards(pacing),
            progress: progress_bar(pacing),
            charts: DashboardCharts {
                revenue: self.daily_chart(
                    ChartKind::Bar,
                    "📅 Receita Diária no Mês",
                    "Receita",
                    REVENUE_COLOR,
                    &aggregate.daily_revenue,
                ),
                commission: self.daily_chart(
                    ChartKind::Line,
                    "Comissão Diária no Mês",
                    "Comissão",
                    COMMISSION_COLOR,
                    &aggregate.daily_commission,
                ),
                clients: self.client_chart(aggregate),
            },
            summary: MonthSummary {
                order_count: aggregate.order_count,
                quantity: aggregate.quantity.normalize().to_string(),
                commission: self.money(aggregate.commission),
            },
        }
    }

    fn kpi_cards(&self, pacing: &GoalPacing) -> Vec<KpiCard> {
        let card = |key, title: &str, value: String, detail, accent: &str, background: &str| KpiCard {
            key,
            title: title.to_string(),
            value,
            detail,
            accent: accent.to_string(),
            background: background.to_string(),
        };

        vec![
            card(
                KpiKey::Goal,
                "🎯 Meta Mensal",
                self.money(pacing.goal),
                None,
                "#00FFB4",
                "#1e2026",
            ),
            card(
                KpiKey::Paid,
                "💸 Valor Pago",
                self.money(pacing.paid),
                None,
                "#43FF86",
                "rgba(67,255,134,0.1)",
            ),
            card(
                KpiKey::Remaining,
                "⏳ Valor Restante",
                self.money(pacing.remaining),
                None,
                "#FF1744",
                "rgba(255,23,68,0.1)",
            ),
            card(
                KpiKey::DailyPace,
                "📈 Meta Diária (dias úteis)",
                format!("{}/dia", self.money(pacing.daily_pace)),
                Some(format!(
                    "({} dias úteis restantes)",
                    pacing.business_days_remaining
                )),
                "#FF7F50",
                "rgba(255,127,80,0.1)",
            ),
            card(
                KpiKey::DaysLeft,
                "📅 Dias p/ final do mês",
                format!("{} dia(s)", pacing.days_remaining),
                None,
                "#7EC8E3",
                "rgba(126,200,227,0.1)",
            ),
        ]
    }

    fn daily_chart(
        &self,
        kind: ChartKind,
        title: &str,
        value_label: &str,
        color: &str,
        points: &[DailyPoint],
    ) -> ChartSpec {
        ChartSpec {
            kind,
            title: title.to_string(),
            category_label: "Data".to_string(),
            value_label: format!("{} ({})", value_label, self.currency_symbol),
            markers: kind == ChartKind::Line,
            points: points
                .iter()
                .map(|p| ChartPoint {
                    category: p.label.clone(),
                    value: to_f64(p.value),
                    color: color.to_string(),
                    tooltip: format!("{}: {}", p.label, self.money(p.value)),
                })
                .collect(),
        }
    }

    fn client_chart(&self, aggregate: &MonthlyAggregate) -> ChartSpec {
        let colors = client_colors(aggregate.ranking.len());
        ChartSpec {
            kind: ChartKind::HorizontalBar,
            title: "🏅 Ranking TOP 10 Clientes".to_string(),
            category_label: "Cliente".to_string(),
            value_label: format!("Receita ({})", self.currency_symbol),
            markers: false,
            points: aggregate
                .ranking
                .iter()
                .zip(colors)
                .map(|(entry, color)| ChartPoint {
                    category: entry.client.clone(),
                    value: to_f64(entry.total),
                    color,
                    tooltip: format!("{}: {}", entry.client, self.money(entry.total)),
                })
                .collect(),
        }
    }
}

/// Present with the default currency symbol
pub fn present(aggregate: &MonthlyAggregate, pacing: &GoalPacing) -> DashboardView {
    DashboardPresenter::default().present(aggregate, pacing)
}

fn progress_bar(pacing: &GoalPacing) -> ProgressBar {
    ProgressBar {
        width_percent: to_f64(pacing.progress_width().round_dp(2)),
        percent_achieved: to_f64(pacing.percent_achieved.round_dp(2)),
        label: format!(
            "Progresso da Meta: {}%",
            format_percent(pacing.percent_achieved)
        ),
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
