//! Table and JSON rendering of dashboards, views and summaries.

use std::fmt::Write as _;
use std::str::FromStr;

use finboard_core::types::Series;
use finboard_series::dashboard::{DashboardData, DashboardView, Metric};
use finboard_series::summary::DashboardSummary;
use finboard_series::tabs::UserTab;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format of a command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Name accepted on the command line and in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// JSON envelope naming the tab and seed a payload was generated with.
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    user: String,
    seed: u64,
    #[serde(flatten)]
    payload: &'a T,
}

fn to_json<T: Serialize>(tab: UserTab, seed: u64, payload: &T) -> Result<String> {
    let report = Report {
        user: tab.id(),
        seed,
        payload,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn mean(series: &Series) -> f64 {
    if series.is_empty() {
        0.0
    } else {
        series.total() / series.len() as f64
    }
}

/// Renders the daily series of a generated dashboard.
pub fn render_dashboard(
    tab: UserTab,
    seed: u64,
    data: &DashboardData,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(tab, seed, data);
    }

    let mut out = String::new();
    writeln!(out, "{} (seed {})", tab.title(), seed).ok();
    writeln!(
        out,
        "{:<20} {:>6} {:>12} {:>12} {:>14}",
        "Series", "Points", "From", "To", "Mean"
    )
    .ok();

    let rows = Metric::ALL
        .iter()
        .map(|&metric| (metric.label(), data.metric(metric)))
        .chain(
            data.expense_breakdown
                .iter()
                .map(|entry| (entry.category.label(), &entry.series)),
        );
    for (name, series) in rows {
        let from = series.first().map(|p| p.date().to_string()).unwrap_or_default();
        let to = series.last().map(|p| p.date().to_string()).unwrap_or_default();
        writeln!(
            out,
            "{:<20} {:>6} {:>12} {:>12} {:>14.2}",
            name,
            series.len(),
            from,
            to,
            mean(series)
        )
        .ok();
    }
    Ok(out)
}

/// Renders the monthly chart series of a view.
pub fn render_view(
    tab: UserTab,
    seed: u64,
    view: &DashboardView,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(tab, seed, view);
    }

    let mut out = String::new();
    writeln!(out, "{} [{}]", tab.title(), view.range).ok();
    if view.revenue.is_empty() {
        writeln!(out, "(no data in range)").ok();
        return Ok(out);
    }

    writeln!(
        out,
        "{:<10} {:>14} {:>14} {:>20}",
        "Month",
        Metric::Revenue.label(),
        Metric::Expenses.label(),
        Metric::Portfolio.label()
    )
    .ok();
    for ((revenue, expenses), portfolio) in view
        .revenue
        .iter()
        .zip(view.expenses.iter())
        .zip(view.portfolio.iter())
    {
        writeln!(
            out,
            "{:<10} {:>14.2} {:>14.2} {:>20.2}",
            revenue.label().unwrap_or_default(),
            revenue.value(),
            expenses.value(),
            portfolio.value()
        )
        .ok();
    }

    writeln!(out).ok();
    writeln!(out, "Expense breakdown").ok();
    for entry in &view.expense_breakdown {
        let values: Vec<String> = entry
            .series
            .values()
            .map(|v| format!("{:.2}", v))
            .collect();
        writeln!(out, "{:<14} {}", entry.category.label(), values.join("  ")).ok();
    }
    Ok(out)
}

/// Renders the headline figures of a view.
pub fn render_summary(
    tab: UserTab,
    seed: u64,
    view: &DashboardView,
    summary: &DashboardSummary,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(tab, seed, summary);
    }

    let mut out = String::new();
    writeln!(out, "{} [{}]", tab.title(), view.range).ok();
    writeln!(out, "{:<18} {:>14.2}", "Total revenue", summary.total_revenue).ok();
    writeln!(out, "{:<18} {:>14.2}", "Total expenses", summary.total_expenses).ok();
    writeln!(out, "{:<18} {:>14.2}", "Net profit", summary.net_profit).ok();
    writeln!(out, "{:<18} {:>14.2}", "Portfolio value", summary.portfolio_value).ok();
    match summary.portfolio_change_pct {
        Some(pct) => writeln!(out, "{:<18} {:>13.2}%", "Portfolio change", pct).ok(),
        None => writeln!(out, "{:<18} {:>14}", "Portfolio change", "n/a").ok(),
    };

    writeln!(out).ok();
    writeln!(out, "Expense breakdown").ok();
    for share in &summary.expense_shares {
        writeln!(
            out,
            "{:<14} {:>14.2} {:>7.1}%",
            share.category.label(),
            share.total,
            share.share * 100.0
        )
        .ok();
    }

    writeln!(out).ok();
    writeln!(out, "Asset allocation").ok();
    for share in summary.asset_allocation.shares() {
        writeln!(out, "{:<14} {:>5}%", share.asset.label(), share.percent).ok();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finboard_core::clock::FixedClock;
    use finboard_core::types::{Date, DateRange};
    use finboard_series::generator::TimeSeriesGenerator;

    fn data() -> DashboardData {
        let generator =
            TimeSeriesGenerator::new(FixedClock::new(Date::from_ymd(2024, 10, 19).unwrap()));
        UserTab::default().dashboard(&generator, 7).unwrap()
    }

    fn quarter() -> DateRange {
        DateRange::new(
            Date::from_ymd(2024, 7, 1).unwrap(),
            Date::from_ymd(2024, 9, 30).unwrap(),
        )
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().name(), "table");
    }

    #[test]
    fn test_render_dashboard_table() {
        let text = render_dashboard(UserTab::default(), 7, &data(), OutputFormat::Table).unwrap();
        assert!(text.starts_with("User 1 Dashboard (seed 7)"));
        assert!(text.contains("Revenue"));
        assert!(text.contains("2023-10-19"));
        // Header, column names, three metrics and six categories.
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_render_view_table_lists_months() {
        let view = data().view(&quarter());
        let text = render_view(UserTab::default(), 7, &view, OutputFormat::Table).unwrap();
        assert!(text.contains("Jul 2024"));
        assert!(text.contains("Aug 2024"));
        assert!(text.contains("Sep 2024"));
        assert!(text.contains("Expense breakdown"));
    }

    #[test]
    fn test_render_view_empty_range() {
        let empty = DateRange::new(
            Date::from_ymd(2030, 1, 1).unwrap(),
            Date::from_ymd(2030, 2, 1).unwrap(),
        );
        let view = data().view(&empty);
        let text = render_view(UserTab::default(), 7, &view, OutputFormat::Table).unwrap();
        assert!(text.contains("(no data in range)"));
    }

    #[test]
    fn test_render_summary_json() {
        let view = data().view(&quarter());
        let summary = DashboardSummary::from_view(&view);
        let text =
            render_summary(UserTab::default(), 7, &view, &summary, OutputFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["user"], "user1");
        assert_eq!(json["seed"], 7);
        let total_revenue = json["total_revenue"].as_f64().unwrap();
        let total_expenses = json["total_expenses"].as_f64().unwrap();
        assert_relative_eq!(total_revenue, summary.total_revenue);
        assert_relative_eq!(
            json["net_profit"].as_f64().unwrap(),
            total_revenue - total_expenses,
            max_relative = 1e-12
        );
        assert_eq!(json["expense_shares"].as_array().unwrap().len(), 6);

        let shares: f64 = json["expense_shares"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["share"].as_f64().unwrap())
            .sum();
        assert_relative_eq!(shares, 1.0, epsilon = 1e-9);

        let allocation = json["asset_allocation"].as_array().unwrap();
        assert_eq!(allocation.len(), 5);
        assert_eq!(allocation[0]["asset"], "stocks");
        assert_eq!(allocation[0]["percent"], 45);
    }

    #[test]
    fn test_render_summary_table_lists_allocation() {
        let generator =
            TimeSeriesGenerator::new(FixedClock::new(Date::from_ymd(2024, 10, 19).unwrap()));
        let tab = UserTab::new(3).unwrap();
        let view = tab.dashboard(&generator, 7).unwrap().view(&quarter());
        let summary = DashboardSummary::from_view(&view);
        let text = render_summary(tab, 7, &view, &summary, OutputFormat::Table).unwrap();

        assert!(text.contains("Asset allocation"));
        assert!(text.contains("Real Estate       20%"));
        assert!(text.contains("Crypto             3%"));
    }

    #[test]
    fn test_render_view_json_has_labels() {
        let view = data().view(&quarter());
        let text = render_view(UserTab::default(), 7, &view, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["revenue"][0]["label"], "Jul 2024");
        assert_eq!(json["range"]["start_date"], "2024-07-01");
    }
}
