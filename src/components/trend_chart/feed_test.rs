use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
}

fn point(label: &str, total: u32) -> TrendPoint {
	TrendPoint {
		label: label.into(),
		total,
		positive: 1,
		negative: 0,
		neutral: 0,
	}
}

#[test]
fn initialize_produces_a_week_ending_today() {
	let mut rng = StdRng::seed_from_u64(7);
	let series = TrendSeries::initialize(today(), &FeedConfig::default(), &mut rng);
	let labels: Vec<&str> = series.points().iter().map(|p| p.label.as_str()).collect();
	assert_eq!(
		labels,
		["Oct 9", "Oct 10", "Oct 11", "Oct 12", "Oct 13", "Oct 14", "Oct 15"]
	);
	assert_eq!(series.latest().label, day_label(today()));
}

#[test]
fn initialize_labels_cross_month_boundaries() {
	let mut rng = StdRng::seed_from_u64(1);
	let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
	let series = TrendSeries::initialize(start, &FeedConfig::default(), &mut rng);
	assert_eq!(series.points()[0].label, "Feb 24");
	assert_eq!(series.latest().label, "Mar 2");
}

#[test]
fn initialize_respects_configured_ranges() {
	let config = FeedConfig::default();
	for seed in 0..50 {
		let mut rng = StdRng::seed_from_u64(seed);
		let series = TrendSeries::initialize(today(), &config, &mut rng);
		for p in series.points() {
			assert!(config.total.contains(&p.total));
			assert!(config.positive.contains(&p.positive));
			assert!(config.negative.contains(&p.negative));
			assert!(config.neutral.contains(&p.neutral));
		}
	}
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn empty_ranges_fall_back_to_their_start() {
	let config = FeedConfig {
		total: 20..=5,
		neutral: 7..=6,
		..FeedConfig::default()
	};
	let mut rng = StdRng::seed_from_u64(3);
	let series = TrendSeries::initialize(today(), &config, &mut rng);
	for p in series.points() {
		assert_eq!(p.total, 20);
		assert_eq!(p.neutral, 7);
		assert!(config.positive.contains(&p.positive));
	}
}

#[test]
fn out_of_range_probabilities_are_clamped() {
	let config = FeedConfig {
		total_up_probability: 1.5,
		positive_probability: -0.3,
		negative_probability: f64::NAN,
		neutral_probability: 7.0,
		..FeedConfig::default()
	};
	let mut series = TrendSeries::from_points(std::array::from_fn(|i| point("d", i as u32 + 1)));
	let mut rng = StdRng::seed_from_u64(11);
	for _ in 0..10 {
		series.tick(&config, &mut rng);
	}
	let latest = series.latest();
	assert_eq!(latest.total, 17);
	assert_eq!(latest.positive, 1);
	assert_eq!(latest.negative, 0);
	assert_eq!(latest.neutral, 10);
}

#[test]
fn tick_floors_a_depleted_point() {
	let config = FeedConfig {
		total_up_probability: 0.0,
		positive_probability: 0.0,
		negative_probability: 0.0,
		neutral_probability: 0.0,
		..FeedConfig::default()
	};
	let mut series = TrendSeries::from_points(std::array::from_fn(|i| point(&i.to_string(), 1)));
	let mut rng = StdRng::seed_from_u64(3);
	for _ in 0..5 {
		series.tick(&config, &mut rng);
	}
	assert_eq!(series.latest().total, 1);
	assert_eq!(series.latest().positive, 1);
	assert_eq!(series.latest().negative, 0);
	assert_eq!(series.latest().neutral, 0);
}

#[test]
fn tick_with_certain_odds_increments_every_field() {
	let config = FeedConfig {
		total_up_probability: 1.0,
		positive_probability: 1.0,
		negative_probability: 1.0,
		neutral_probability: 1.0,
		..FeedConfig::default()
	};
	let mut series = TrendSeries::from_points(std::array::from_fn(|i| point(&i.to_string(), 10)));
	series.tick(&config, &mut StdRng::seed_from_u64(0));
	assert_eq!(
		*series.latest(),
		TrendPoint {
			label: "6".into(),
			total: 11,
			positive: 2,
			negative: 1,
			neutral: 1,
		}
	);
}

#[test]
fn summary_reports_average_peak_and_today() {
	let totals = [10, 20, 30, 40, 20, 10, 24];
	let series = TrendSeries::from_points(std::array::from_fn(|i| point("d", totals[i])));
	let summary = series.summary();
	assert_eq!(summary.average_daily, 22);
	assert_eq!(summary.peak_day, 40);
	assert_eq!(summary.today, 24);
	let trend = summary.trend_percent.expect("baseline is positive");
	assert!((trend - 10.769_230).abs() < 1e-5);
	assert_eq!(summary.trend_label(), "↑ 11%");
}

#[test]
fn summary_trend_is_absent_for_an_empty_baseline() {
	let mut points: [TrendPoint; SERIES_LEN] = std::array::from_fn(|_| point("d", 0));
	points[SERIES_LEN - 1].total = 5;
	let summary = TrendSeries::from_points(points).summary();
	assert_eq!(summary.trend_percent, None);
	assert_eq!(summary.trend_label(), "–");
}

#[test]
fn falling_trend_uses_a_down_arrow() {
	let totals = [20, 20, 20, 20, 20, 20, 15];
	let series = TrendSeries::from_points(std::array::from_fn(|i| point("d", totals[i])));
	assert_eq!(series.summary().trend_label(), "↓ 25%");
}

#[test]
fn max_value_spans_all_metrics() {
	let mut series = TrendSeries::from_points(std::array::from_fn(|_| point("d", 3)));
	series.tick(
		&FeedConfig {
			total_up_probability: 0.0,
			positive_probability: 1.0,
			..FeedConfig::default()
		},
		&mut StdRng::seed_from_u64(9),
	);
	assert_eq!(series.max_value(), 3);
}

proptest! {
	#[test]
	fn ticks_only_touch_the_newest_point(seed in any::<u64>(), ticks in 0usize..200) {
		let config = FeedConfig::default();
		let mut rng = StdRng::seed_from_u64(seed);
		let mut series = TrendSeries::initialize(today(), &config, &mut rng);
		let history = series.points()[..SERIES_LEN - 1].to_vec();

		for _ in 0..ticks {
			series.tick(&config, &mut rng);
			let latest = series.latest();
			prop_assert!(latest.total >= 1);
			prop_assert!(latest.positive >= 1);
		}

		prop_assert_eq!(series.points().len(), SERIES_LEN);
		prop_assert_eq!(&series.points()[..SERIES_LEN - 1], history.as_slice());
		prop_assert_eq!(&series.latest().label, &day_label(today()));
	}
}
