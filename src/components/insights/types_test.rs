use super::*;

fn embedded_json() -> serde_json::Value {
	serde_json::from_str(EMBEDDED_REPORT).expect("embedded report is JSON")
}

#[test]
fn embedded_report_validates() {
	let report = InsightReport::embedded().expect("embedded report should validate");
	assert_eq!(report.response_count, 158);
	assert_eq!(report.text_only(), 69);
	assert_eq!(report.sentiment.overall, Sentiment::Positive);
	assert_eq!(report.themes.len(), 4);
	assert_eq!(report.responses.len(), 3);
	assert_eq!(report.responses[1].media[0].kind, MediaKind::Video);

	let directions: Vec<TrendDirection> =
		report.notable_trends.iter().map(|t| t.direction).collect();
	assert_eq!(
		directions,
		[TrendDirection::Up, TrendDirection::Steady, TrendDirection::Up]
	);
	assert_eq!(report.notable_trends[0].text, "Visual design praise");
	assert_eq!(report.notable_trends[0].emphasis, "increased 34%");

	let labels: Vec<&str> = report.action_items.iter().map(|a| a.label.as_str()).collect();
	assert_eq!(labels, ["Priority", "Address", "Leverage"]);
	assert_eq!(
		report.action_items[0].text,
		"Improve text readability in smaller sizes"
	);
}

#[test]
fn rejects_unknown_trend_direction() {
	let mut json = embedded_json();
	json["notable_trends"][1]["direction"] = "sideways".into();
	assert!(matches!(
		InsightReport::from_json(&json.to_string()),
		Err(InsightError::Json(_))
	));
}

#[test]
fn trend_directions_map_to_arrows() {
	assert_eq!(TrendDirection::Up.arrow(), "↑");
	assert_eq!(TrendDirection::Steady.arrow(), "→");
	assert_eq!(TrendDirection::Down.arrow(), "↓");
}

#[test]
fn rejects_distribution_not_summing_to_100() {
	let mut json = embedded_json();
	json["sentiment"]["distribution"]["negative"] = 20.into();
	let err = InsightReport::from_json(&json.to_string()).unwrap_err();
	assert!(matches!(err, InsightError::Distribution(107)));
	assert_eq!(err.to_string(), "sentiment distribution sums to 107%, expected 100%");
}

#[test]
fn rejects_theme_score_out_of_range() {
	let mut json = embedded_json();
	json["themes"][3]["score"] = 1.5.into();
	match InsightReport::from_json(&json.to_string()) {
		Err(InsightError::ScoreOutOfRange { field, score }) => {
			assert_eq!(field, "Accessibility");
			assert_eq!(score, 1.5);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn rejects_tags_outside_the_vocabulary() {
	let mut json = embedded_json();
	json["responses"][0]["tags"] = serde_json::json!(["modern", "sleek"]);
	match InsightReport::from_json(&json.to_string()) {
		Err(InsightError::UnknownTag { id, tag }) => {
			assert_eq!(id, 1);
			assert_eq!(tag, "sleek");
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn rejects_more_media_responses_than_responses() {
	let mut json = embedded_json();
	json["with_media"] = 200.into();
	assert!(matches!(
		InsightReport::from_json(&json.to_string()),
		Err(InsightError::MediaCount { with_media: 200, total: 158 })
	));
}

#[test]
fn rejects_unknown_sentiment_variant() {
	let mut json = embedded_json();
	json["themes"][0]["sentiment"] = "ecstatic".into();
	assert!(matches!(
		InsightReport::from_json(&json.to_string()),
		Err(InsightError::Json(_))
	));
}

#[test]
fn media_defaults_to_empty() {
	let mut json = embedded_json();
	json["responses"][2]
		.as_object_mut()
		.expect("response object")
		.remove("media");
	let report = InsightReport::from_json(&json.to_string()).expect("media is optional");
	assert!(report.responses[2].media.is_empty());
}
