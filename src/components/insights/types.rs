//! Typed schema for the analysis payload shown on the dashboard.
//!
//! The payload is plain JSON; everything the views rely on (percentages
//! adding up, scores in range, known tags) is checked once in
//! [`InsightReport::from_json`] so rendering never has to second-guess it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_REPORT: &str = include_str!("insights.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
	Positive,
	Mixed,
	Negative,
}

impl Sentiment {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Positive => "positive",
			Self::Mixed => "mixed",
			Self::Negative => "negative",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Self::Positive => "#4CAF50",
			Self::Mixed => "#FFC107",
			Self::Negative => "#EF5350",
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Distribution {
	pub positive: u8,
	pub neutral: u8,
	pub negative: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SentimentSummary {
	pub overall: Sentiment,
	pub score: f64,
	pub distribution: Distribution,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Theme {
	pub theme: String,
	pub mentions: u32,
	pub sentiment: Sentiment,
	pub score: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
	Up,
	Steady,
	Down,
}

impl TrendDirection {
	pub fn arrow(self) -> &'static str {
		match self {
			Self::Up => "↑",
			Self::Steady => "→",
			Self::Down => "↓",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Self::Up => "#4CAF50",
			Self::Steady => "#FFC107",
			Self::Down => "#EF5350",
		}
	}
}

/// A movement worth calling out, e.g. "Visual design praise" / "increased 34%".
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NotableTrend {
	pub direction: TrendDirection,
	pub text: String,
	/// Emphasized tail of the sentence.
	pub emphasis: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
	pub label: String,
	pub text: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
	Image,
	Video,
	Audio,
}

impl MediaKind {
	pub fn icon(self) -> &'static str {
		match self {
			Self::Image => "🖼",
			Self::Video => "🎬",
			Self::Audio => "🎙",
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MediaAttachment {
	pub kind: MediaKind,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FeedbackResponse {
	pub id: u32,
	pub text: String,
	pub sentiment: Sentiment,
	pub tags: Vec<String>,
	pub emotional_tone: String,
	#[serde(default)]
	pub media: Vec<MediaAttachment>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct InsightReport {
	pub response_count: u32,
	pub with_media: u32,
	pub emotional_tone: String,
	pub top_tags: Vec<String>,
	pub sentiment: SentimentSummary,
	pub themes: Vec<Theme>,
	pub key_findings: Vec<String>,
	pub notable_trends: Vec<NotableTrend>,
	pub action_items: Vec<ActionItem>,
	pub available_tags: Vec<String>,
	pub responses: Vec<FeedbackResponse>,
}

#[derive(Debug, Error)]
pub enum InsightError {
	#[error("malformed insight report: {0}")]
	Json(#[from] serde_json::Error),
	#[error("sentiment distribution sums to {0}%, expected 100%")]
	Distribution(u32),
	#[error("{field} score {score} is outside [0, 1]")]
	ScoreOutOfRange { field: String, score: f64 },
	#[error("response {id} uses unknown tag `{tag}`")]
	UnknownTag { id: u32, tag: String },
	#[error("{with_media} responses with media exceeds the {total} collected")]
	MediaCount { with_media: u32, total: u32 },
}

impl InsightReport {
	pub fn from_json(json: &str) -> Result<Self, InsightError> {
		let report: Self = serde_json::from_str(json)?;
		report.validate()?;
		Ok(report)
	}

	/// The report bundled with the application.
	pub fn embedded() -> Result<Self, InsightError> {
		Self::from_json(EMBEDDED_REPORT)
	}

	fn validate(&self) -> Result<(), InsightError> {
		let d = &self.sentiment.distribution;
		let sum = d.positive as u32 + d.neutral as u32 + d.negative as u32;
		if sum != 100 {
			return Err(InsightError::Distribution(sum));
		}

		check_score("overall sentiment", self.sentiment.score)?;
		for theme in &self.themes {
			check_score(&theme.theme, theme.score)?;
		}

		for response in &self.responses {
			if let Some(tag) = response
				.tags
				.iter()
				.find(|t| !self.available_tags.contains(t))
			{
				return Err(InsightError::UnknownTag {
					id: response.id,
					tag: tag.clone(),
				});
			}
		}

		if self.with_media > self.response_count {
			return Err(InsightError::MediaCount {
				with_media: self.with_media,
				total: self.response_count,
			});
		}
		Ok(())
	}

	pub fn text_only(&self) -> u32 {
		self.response_count - self.with_media
	}
}

fn check_score(field: &str, score: f64) -> Result<(), InsightError> {
	if (0.0..=1.0).contains(&score) {
		Ok(())
	} else {
		Err(InsightError::ScoreOutOfRange {
			field: field.to_owned(),
			score,
		})
	}
}
