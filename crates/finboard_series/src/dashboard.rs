//! Dashboard data bundle.
//!
//! A dashboard shows three headline metrics (revenue, expenses, portfolio
//! value), six expense categories and a static asset allocation. Each
//! metric and category is a generated daily series;
//! every date-range change re-derives monthly chart series through the fixed
//! pipeline filter → aggregate → label.

use std::fmt;

use finboard_core::clock::Clock;
use finboard_core::types::{DateRange, Series};
use rand::Rng;
use tracing::{debug, info};

use crate::aggregate::aggregate_monthly;
use crate::allocation::AssetAllocation;
use crate::error::GeneratorError;
use crate::filter::filter_by_range;
use crate::format::label_by_month;
use crate::generator::{GeneratorParams, TimeSeriesGenerator};

/// Headline metric of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Company revenue.
    Revenue,
    /// Company expenses.
    Expenses,
    /// Investment portfolio value.
    Portfolio,
}

impl Metric {
    /// All metrics in generation order.
    pub const ALL: [Metric; 3] = [Metric::Revenue, Metric::Expenses, Metric::Portfolio];

    /// Generation parameters for the metric.
    pub fn params(&self) -> GeneratorParams {
        match self {
            Metric::Revenue => GeneratorParams::new(75_000.0).with_variance(0.15).with_trend(0.05),
            Metric::Expenses => GeneratorParams::new(55_000.0).with_variance(0.12).with_trend(0.03),
            Metric::Portfolio => GeneratorParams::new(300_000.0)
                .with_variance(0.08)
                .with_trend(0.08),
        }
    }

    /// Chart legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue ($)",
            Metric::Expenses => "Expenses ($)",
            Metric::Portfolio => "Portfolio Value ($)",
        }
    }
}

/// Expense category of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExpenseCategory {
    /// Marketing spend.
    Marketing,
    /// Operations spend.
    Operations,
    /// Salaries.
    Salaries,
    /// Technology spend.
    Technology,
    /// Office costs.
    Office,
    /// Everything else.
    Other,
}

impl ExpenseCategory {
    /// All categories in chart order.
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Marketing,
        ExpenseCategory::Operations,
        ExpenseCategory::Salaries,
        ExpenseCategory::Technology,
        ExpenseCategory::Office,
        ExpenseCategory::Other,
    ];

    /// Generation parameters; every category uses the default trend.
    pub fn params(&self) -> GeneratorParams {
        let (base, variance) = match self {
            ExpenseCategory::Marketing => (15_000.0, 0.2),
            ExpenseCategory::Operations => (25_000.0, 0.15),
            ExpenseCategory::Salaries => (35_000.0, 0.1),
            ExpenseCategory::Technology => (12_000.0, 0.25),
            ExpenseCategory::Office => (8_000.0, 0.3),
            ExpenseCategory::Other => (5_000.0, 0.4),
        };
        GeneratorParams::new(base).with_variance(variance)
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Operations => "Operations",
            ExpenseCategory::Salaries => "Salaries",
            ExpenseCategory::Technology => "Technology",
            ExpenseCategory::Office => "Office",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category paired with its series.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySeries {
    /// Expense category.
    pub category: ExpenseCategory,
    /// Series for the category.
    pub series: Series,
}

/// Filters `series` to `range`, averages it per month and labels each month.
pub fn monthly_view(series: &Series, range: &DateRange) -> Series {
    label_by_month(&aggregate_monthly(&filter_by_range(series, range)))
}

/// Daily series backing one dashboard.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardData {
    /// Daily revenue.
    pub revenue: Series,
    /// Daily expenses.
    pub expenses: Series,
    /// Daily portfolio value.
    pub portfolio: Series,
    /// Daily spend per expense category, in [`ExpenseCategory::ALL`] order.
    pub expense_breakdown: Vec<CategorySeries>,
    /// Portfolio split across asset classes.
    pub asset_allocation: AssetAllocation,
}

impl DashboardData {
    /// Generates all nine series, drawing from `rng` in a fixed order.
    ///
    /// The asset allocation starts at [`AssetAllocation::default`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use finboard_core::clock::FixedClock;
    /// use finboard_core::types::Date;
    /// use finboard_series::dashboard::DashboardData;
    /// use finboard_series::generator::TimeSeriesGenerator;
    /// use finboard_series::rng::SeriesRng;
    ///
    /// let today = Date::from_ymd(2024, 10, 19).unwrap();
    /// let generator = TimeSeriesGenerator::new(FixedClock::new(today));
    /// let data = DashboardData::generate(&generator, &mut SeriesRng::from_seed(1)).unwrap();
    /// assert_eq!(data.revenue.len(), 365);
    /// assert_eq!(data.expense_breakdown.len(), 6);
    /// ```
    pub fn generate<C: Clock, R: Rng + ?Sized>(
        generator: &TimeSeriesGenerator<C>,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        let revenue = generator.generate(&Metric::Revenue.params(), rng)?;
        let expenses = generator.generate(&Metric::Expenses.params(), rng)?;
        let portfolio = generator.generate(&Metric::Portfolio.params(), rng)?;

        let expense_breakdown = ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                generator
                    .generate(&category.params(), rng)
                    .map(|series| CategorySeries { category, series })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            series = 3 + expense_breakdown.len(),
            points = revenue.len(),
            "generated dashboard data"
        );

        Ok(Self {
            revenue,
            expenses,
            portfolio,
            expense_breakdown,
            asset_allocation: AssetAllocation::default(),
        })
    }

    /// Replaces the asset allocation.
    pub fn with_allocation(mut self, asset_allocation: AssetAllocation) -> Self {
        self.asset_allocation = asset_allocation;
        self
    }

    /// Daily series of a headline metric.
    pub fn metric(&self, metric: Metric) -> &Series {
        match metric {
            Metric::Revenue => &self.revenue,
            Metric::Expenses => &self.expenses,
            Metric::Portfolio => &self.portfolio,
        }
    }

    /// Daily series of an expense category.
    pub fn category(&self, category: ExpenseCategory) -> Option<&Series> {
        self.expense_breakdown
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| &entry.series)
    }

    /// Derives the monthly chart series for `range`.
    pub fn view(&self, range: &DateRange) -> DashboardView {
        debug!(range = %range, "deriving dashboard view");

        DashboardView {
            range: *range,
            revenue: monthly_view(&self.revenue, range),
            expenses: monthly_view(&self.expenses, range),
            portfolio: monthly_view(&self.portfolio, range),
            expense_breakdown: self
                .expense_breakdown
                .iter()
                .map(|entry| CategorySeries {
                    category: entry.category,
                    series: monthly_view(&entry.series, range),
                })
                .collect(),
            asset_allocation: self.asset_allocation,
        }
    }
}

/// Monthly, labelled chart series for one selected date range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardView {
    /// Range the view was derived for.
    pub range: DateRange,
    /// Monthly revenue.
    pub revenue: Series,
    /// Monthly expenses.
    pub expenses: Series,
    /// Monthly portfolio value.
    pub portfolio: Series,
    /// Monthly spend per expense category.
    pub expense_breakdown: Vec<CategorySeries>,
    /// Portfolio split across asset classes; independent of the range.
    pub asset_allocation: AssetAllocation,
}

impl DashboardView {
    /// Monthly series of a headline metric.
    pub fn metric(&self, metric: Metric) -> &Series {
        match metric {
            Metric::Revenue => &self.revenue,
            Metric::Expenses => &self.expenses,
            Metric::Portfolio => &self.portfolio,
        }
    }

    /// Axis labels, taken from the revenue series.
    ///
    /// All series of a view share the same months because they are generated
    /// over the same days.
    pub fn labels(&self) -> Vec<String> {
        self.revenue
            .iter()
            .filter_map(|point| point.label().map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SERIES_LENGTH;
    use crate::rng::SeriesRng;
    use finboard_core::clock::FixedClock;
    use finboard_core::types::{DataPoint, Date};

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn generator() -> TimeSeriesGenerator<FixedClock> {
        TimeSeriesGenerator::new(FixedClock::new(d(2024, 10, 19)))
    }

    #[test]
    fn test_metric_params() {
        let revenue = Metric::Revenue.params();
        assert_eq!(revenue.base_value, 75_000.0);
        assert_eq!(revenue.variance_fraction, 0.15);
        assert_eq!(revenue.trend_fraction, 0.05);
        assert_eq!(Metric::Portfolio.params().trend_fraction, 0.08);
    }

    #[test]
    fn test_category_params_use_default_trend() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.params().trend_fraction, 0.02);
        }
        assert_eq!(ExpenseCategory::Other.params().variance_fraction, 0.4);
        assert_eq!(ExpenseCategory::Salaries.params().base_value, 35_000.0);
    }

    #[test]
    fn test_generate_shape() {
        let data = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(11)).unwrap();
        for metric in Metric::ALL {
            assert_eq!(data.metric(metric).len(), SERIES_LENGTH);
        }
        let categories: Vec<ExpenseCategory> =
            data.expense_breakdown.iter().map(|c| c.category).collect();
        assert_eq!(categories, ExpenseCategory::ALL.to_vec());
        assert!(data.category(ExpenseCategory::Office).is_some());
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(5)).unwrap();
        let b = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(5)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.revenue, a.expenses);
    }

    #[test]
    fn test_view_last_quarter() {
        let data = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(3)).unwrap();
        let view = data.view(&DateRange::new(d(2024, 7, 1), d(2024, 9, 30)));

        assert_eq!(view.labels(), vec!["Jul 2024", "Aug 2024", "Sep 2024"]);
        assert_eq!(view.expenses.len(), 3);
        assert_eq!(view.portfolio.len(), 3);
        for entry in &view.expense_breakdown {
            assert_eq!(entry.series.len(), 3);
        }
    }

    #[test]
    fn test_view_carries_allocation() {
        let allocation = AssetAllocation::from_percentages([40, 30, 20, 7, 3]).unwrap();
        let data = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(3))
            .unwrap()
            .with_allocation(allocation);
        let view = data.view(&DateRange::new(d(2024, 7, 1), d(2024, 9, 30)));
        assert_eq!(view.asset_allocation, allocation);
        assert_eq!(
            DashboardData::generate(&generator(), &mut SeriesRng::from_seed(3))
                .unwrap()
                .asset_allocation,
            AssetAllocation::default()
        );
    }

    #[test]
    fn test_view_outside_generated_window_is_empty() {
        let data = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(3)).unwrap();
        let view = data.view(&DateRange::new(d(2030, 1, 1), d(2030, 12, 31)));
        assert!(view.revenue.is_empty());
        assert!(view.labels().is_empty());
    }

    #[test]
    fn test_monthly_view_pipeline() {
        let series = Series::new(vec![
            DataPoint::new(d(2024, 1, 1), 100.0),
            DataPoint::new(d(2024, 1, 15), 200.0),
            DataPoint::new(d(2024, 2, 1), 300.0),
        ]);
        let view = monthly_view(&series, &DateRange::new(d(2024, 1, 1), d(2024, 1, 31)));
        assert_eq!(
            view,
            Series::new(vec![DataPoint::new(d(2024, 1, 1), 150.0).with_label("Jan 2024")])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_view_serialises_categories_lowercase() {
        let data = DashboardData::generate(&generator(), &mut SeriesRng::from_seed(3)).unwrap();
        let view = data.view(&DateRange::new(d(2024, 9, 1), d(2024, 9, 30)));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["expense_breakdown"][0]["category"], "marketing");
        assert_eq!(json["range"]["start_date"], "2024-09-01");
        assert_eq!(json["revenue"][0]["label"], "Sep 2024");
    }
}
