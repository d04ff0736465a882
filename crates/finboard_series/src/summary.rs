//! Headline figures for the dashboard cards, breakdown and allocation charts.

use finboard_core::types::Series;

use crate::allocation::AssetAllocation;
use crate::dashboard::{DashboardView, ExpenseCategory};

/// Total spend of one category and its share of all category spend.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryShare {
    /// Expense category.
    pub category: ExpenseCategory,
    /// Sum of the category's monthly values.
    pub total: f64,
    /// `total` divided by the sum over all categories; `0.0` when that sum is zero.
    pub share: f64,
}

/// Summary figures computed from a [`DashboardView`].
///
/// All totals are sums of monthly averages, matching what the charts plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardSummary {
    /// Sum of monthly revenue.
    pub total_revenue: f64,
    /// Sum of monthly expenses.
    pub total_expenses: f64,
    /// Revenue minus expenses.
    pub net_profit: f64,
    /// Last monthly portfolio value, `0.0` when the view is empty.
    pub portfolio_value: f64,
    /// Percentage change from the first to the last monthly portfolio value.
    pub portfolio_change_pct: Option<f64>,
    /// Per-category totals for the breakdown chart.
    pub expense_shares: Vec<CategoryShare>,
    /// Portfolio split for the allocation chart.
    pub asset_allocation: AssetAllocation,
}

impl DashboardSummary {
    /// Computes the summary of `view`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use finboard_core::clock::FixedClock;
    /// use finboard_core::types::{Date, DateRange};
    /// use finboard_series::dashboard::DashboardData;
    /// use finboard_series::generator::TimeSeriesGenerator;
    /// use finboard_series::rng::SeriesRng;
    /// use finboard_series::summary::DashboardSummary;
    ///
    /// let today = Date::from_ymd(2024, 10, 19).unwrap();
    /// let generator = TimeSeriesGenerator::new(FixedClock::new(today));
    /// let data = DashboardData::generate(&generator, &mut SeriesRng::from_seed(1)).unwrap();
    /// let view = data.view(&DateRange::new(
    ///     Date::from_ymd(2024, 1, 1).unwrap(),
    ///     Date::from_ymd(2024, 6, 30).unwrap(),
    /// ));
    ///
    /// let summary = DashboardSummary::from_view(&view);
    /// assert!(summary.total_revenue > 0.0);
    /// assert_eq!(summary.expense_shares.len(), 6);
    /// ```
    pub fn from_view(view: &DashboardView) -> Self {
        let total_revenue = view.revenue.total();
        let total_expenses = view.expenses.total();

        let category_totals: Vec<(ExpenseCategory, f64)> = view
            .expense_breakdown
            .iter()
            .map(|entry| (entry.category, entry.series.total()))
            .collect();
        let grand_total: f64 = category_totals.iter().map(|(_, total)| total).sum();

        let expense_shares = category_totals
            .into_iter()
            .map(|(category, total)| CategoryShare {
                category,
                total,
                share: if grand_total == 0.0 {
                    0.0
                } else {
                    total / grand_total
                },
            })
            .collect();

        Self {
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            portfolio_value: view.portfolio.last().map_or(0.0, |p| p.value()),
            portfolio_change_pct: percent_change(&view.portfolio),
            expense_shares,
            asset_allocation: view.asset_allocation,
        }
    }
}

/// Percentage change from the first to the last value of `series`.
///
/// `None` with fewer than two points or a zero first value.
pub fn percent_change(series: &Series) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?.value();
    let last = series.last()?.value();
    if first == 0.0 {
        None
    } else {
        Some((last - first) / first.abs() * 100.0)
    }
}
