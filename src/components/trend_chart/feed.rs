//! Simulated rolling 7-day response metrics.
//!
//! The series is seeded with uniform random values and then only its newest
//! point drifts on every tick, the way a live counter for "today" would.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Days, NaiveDate};
use rand::Rng;

pub const SERIES_LEN: usize = 7;

/// Bounds and odds driving the simulated feed.
///
/// An empty range yields its start value. Probabilities are clamped to
/// `[0, 1]` and NaN counts as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedConfig {
	pub total: RangeInclusive<u32>,
	pub positive: RangeInclusive<u32>,
	pub negative: RangeInclusive<u32>,
	pub neutral: RangeInclusive<u32>,
	/// Chance that a tick adds one response to the total; otherwise it drops one.
	pub total_up_probability: f64,
	pub positive_probability: f64,
	pub negative_probability: f64,
	pub neutral_probability: f64,
	pub tick_interval: Duration,
}

impl Default for FeedConfig {
	fn default() -> Self {
		Self {
			total: 15..=44,
			positive: 10..=29,
			negative: 2..=9,
			neutral: 3..=12,
			total_up_probability: 0.5,
			positive_probability: 0.4,
			negative_probability: 0.2,
			neutral_probability: 0.3,
			tick_interval: Duration::from_secs(3),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendPoint {
	pub label: String,
	pub total: u32,
	pub positive: u32,
	pub negative: u32,
	pub neutral: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendSeries {
	points: [TrendPoint; SERIES_LEN],
}

fn sample<R: Rng>(rng: &mut R, range: &RangeInclusive<u32>) -> u32 {
	if range.is_empty() {
		*range.start()
	} else {
		rng.gen_range(range.clone())
	}
}

fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
	let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
	rng.gen_bool(p)
}

pub fn day_label(date: NaiveDate) -> String {
	date.format("%b %-d").to_string()
}

impl TrendSeries {
	/// One randomized point per day, oldest first, ending at `today`.
	pub fn initialize<R: Rng>(today: NaiveDate, config: &FeedConfig, rng: &mut R) -> Self {
		let points = std::array::from_fn(|i| {
			let days_back = (SERIES_LEN - 1 - i) as u64;
			let date = today.checked_sub_days(Days::new(days_back)).unwrap_or(today);
			TrendPoint {
				label: day_label(date),
				total: sample(rng, &config.total),
				positive: sample(rng, &config.positive),
				negative: sample(rng, &config.negative),
				neutral: sample(rng, &config.neutral),
			}
		});
		Self { points }
	}

	#[cfg(test)]
	pub fn from_points(points: [TrendPoint; SERIES_LEN]) -> Self {
		Self { points }
	}

	pub fn points(&self) -> &[TrendPoint] {
		&self.points
	}

	pub fn latest(&self) -> &TrendPoint {
		&self.points[SERIES_LEN - 1]
	}

	/// Nudges the newest point only.
	pub fn tick<R: Rng>(&mut self, config: &FeedConfig, rng: &mut R) {
		let latest = &mut self.points[SERIES_LEN - 1];
		latest.total = if chance(rng, config.total_up_probability) {
			latest.total.saturating_add(1)
		} else {
			latest.total.saturating_sub(1)
		}
		.max(1);
		if chance(rng, config.positive_probability) {
			latest.positive = latest.positive.saturating_add(1);
		}
		latest.positive = latest.positive.max(1);
		if chance(rng, config.negative_probability) {
			latest.negative = latest.negative.saturating_add(1);
		}
		if chance(rng, config.neutral_probability) {
			latest.neutral = latest.neutral.saturating_add(1);
		}
	}

	pub fn max_value(&self) -> u32 {
		self.points
			.iter()
			.flat_map(|p| [p.total, p.positive, p.negative, p.neutral])
			.max()
			.unwrap_or(0)
	}

	pub fn summary(&self) -> TrendSummary {
		let totals = self.points.iter().map(|p| p.total);
		let sum: u32 = totals.clone().sum();
		let today = self.latest().total;

		let previous = &self.points[..SERIES_LEN - 1];
		let baseline =
			previous.iter().map(|p| p.total as f64).sum::<f64>() / previous.len() as f64;
		let trend_percent = (baseline > 0.0).then(|| (today as f64 - baseline) / baseline * 100.0);

		TrendSummary {
			average_daily: (sum as f64 / SERIES_LEN as f64).round() as u32,
			peak_day: totals.max().unwrap_or(0),
			today,
			trend_percent,
		}
	}
}

/// Figures shown under the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSummary {
	pub average_daily: u32,
	pub peak_day: u32,
	pub today: u32,
	/// Today's total against the mean of the six days before it.
	pub trend_percent: Option<f64>,
}

impl TrendSummary {
	pub fn trend_label(&self) -> String {
		match self.trend_percent {
			Some(p) if p >= 0.0 => format!("↑ {}%", p.round() as i64),
			Some(p) => format!("↓ {}%", (-p).round() as i64),
			None => "–".to_owned(),
		}
	}
}
