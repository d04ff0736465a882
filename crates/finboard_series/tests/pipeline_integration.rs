//! End-to-end tests of the generate → filter → aggregate → format pipeline.

use approx::assert_relative_eq;
use finboard_core::clock::FixedClock;
use finboard_core::types::{DataPoint, Date, DateRange, Series};
use finboard_series::prelude::*;

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn scenario_series() -> Series {
    Series::new(vec![
        DataPoint::new(d(2024, 1, 1), 100.0),
        DataPoint::new(d(2024, 1, 15), 200.0),
        DataPoint::new(d(2024, 2, 1), 300.0),
    ])
}

#[test]
fn test_documented_scenarios() {
    let series = scenario_series();

    let monthly = aggregate_monthly(&series);
    assert_eq!(
        monthly,
        Series::new(vec![
            DataPoint::new(d(2024, 1, 1), 150.0),
            DataPoint::new(d(2024, 2, 1), 300.0),
        ])
    );

    let filtered = filter_by_range(&series, &DateRange::new(d(2024, 1, 10), d(2024, 1, 31)));
    assert_eq!(filtered, Series::new(vec![DataPoint::new(d(2024, 1, 15), 200.0)]));

    assert_eq!(format_month_label(d(2024, 1, 15)), "Jan 2024");

    assert!(aggregate_monthly(&Series::empty()).is_empty());
    assert!(filter_by_range(&Series::empty(), &DateRange::new(d(2024, 1, 1), d(2024, 12, 31)))
        .is_empty());
}

#[test]
fn test_inputs_not_mutated() {
    let series = scenario_series();
    let before = series.clone();
    let _ = filter_by_range(&series, &DateRange::new(d(2024, 1, 10), d(2024, 1, 31)));
    let _ = aggregate_monthly(&series);
    let _ = label_by_month(&series);
    assert_eq!(series, before);
}

#[test]
fn test_full_year_pipeline_with_fixed_clock() {
    let clock = FixedClock::new(d(2024, 10, 19));
    let generator = TimeSeriesGenerator::new(clock);
    let params = GeneratorParams::new(1_000.0).with_variance(0.0).with_trend(0.365);
    let series = generator
        .generate(&params, &mut SeriesRng::from_seed(0))
        .unwrap();

    // Without noise the whole-year aggregate is the trend averaged per month.
    let monthly = aggregate_monthly(&series);
    assert_eq!(monthly.len(), 13);
    assert_eq!(monthly.first().unwrap().date(), d(2023, 10, 1));
    assert_eq!(monthly.last().unwrap().date(), d(2024, 10, 1));

    // October 2023 covers days 0..=12 of the walk (19th to 31st).
    let expected_oct: f64 = (0..13).map(|i| params.trend_value(i)).sum::<f64>() / 13.0;
    assert_relative_eq!(monthly.first().unwrap().value(), expected_oct, epsilon = 1e-9);
}

#[test]
fn test_presets_select_whole_months_of_generated_data() {
    let clock = FixedClock::new(d(2024, 10, 19));
    let generator = TimeSeriesGenerator::new(clock);
    let series = generator
        .generate(&GeneratorParams::new(500.0), &mut SeriesRng::from_seed(8))
        .unwrap();

    let month = DateRangeSelection::LastMonth.resolve(&clock).unwrap();
    assert_eq!(filter_by_range(&series, &month).len(), 30);

    let quarter = DateRangeSelection::LastQuarter.resolve(&clock).unwrap();
    let selected = filter_by_range(&series, &quarter);
    assert_eq!(selected.len(), 92);
    let labels: Vec<String> = aggregate_monthly(&selected)
        .dates()
        .map(format_month_label)
        .collect();
    assert_eq!(labels, ["Jul 2024", "Aug 2024", "Sep 2024"]);
}

#[test]
fn test_custom_range_spanning_generation_start() {
    let clock = FixedClock::new(d(2024, 10, 19));
    let generator = TimeSeriesGenerator::new(clock);
    let series = generator
        .generate(&GeneratorParams::new(500.0), &mut SeriesRng::from_seed(8))
        .unwrap();

    let selection = DateRangeSelection::Custom(CustomRange::new(d(2023, 10, 1), d(2023, 10, 31)));
    let range = selection.resolve(&clock).unwrap();
    let selected = filter_by_range(&series, &range);
    assert_eq!(selected.len(), 13);
    assert_eq!(selected.first().unwrap().date(), d(2023, 10, 19));
}

#[test]
fn test_summary_from_tab_dashboard() {
    let clock = FixedClock::new(d(2024, 10, 19));
    let generator = TimeSeriesGenerator::new(clock);
    let tab = UserTab::new(2).unwrap();
    let data = tab.dashboard(&generator, 2024).unwrap();

    let range = DateRangeSelection::LastQuarter.resolve(&clock).unwrap();
    let view = data.view(&range);
    let summary = DashboardSummary::from_view(&view);

    assert_relative_eq!(summary.total_revenue, view.revenue.total());
    assert_relative_eq!(summary.net_profit, summary.total_revenue - summary.total_expenses);
    assert_relative_eq!(
        summary.expense_shares.iter().map(|s| s.share).sum::<f64>(),
        1.0,
        epsilon = 1e-12
    );
    // Revenue is generated around 75k/day with a +5% trend.
    assert!(summary.total_revenue > 3.0 * 70_000.0);
}
