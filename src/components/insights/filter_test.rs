use super::*;
use crate::components::insights::types::InsightReport;

fn responses() -> Vec<FeedbackResponse> {
	InsightReport::embedded()
		.expect("embedded report")
		.responses
}

fn ids(found: &[&FeedbackResponse]) -> Vec<u32> {
	found.iter().map(|r| r.id).collect()
}

#[test]
fn empty_filter_keeps_everything() {
	let all = responses();
	assert_eq!(ids(&ResponseFilter::default().apply(&all)), [1, 2, 3]);
}

#[test]
fn search_is_case_insensitive_substring() {
	let all = responses();
	let filter = ResponseFilter {
		query: "COLOR".into(),
		..ResponseFilter::default()
	};
	assert_eq!(ids(&filter.apply(&all)), [3]);
}

#[test]
fn padded_query_is_matched_literally() {
	let all = responses();
	let filter = ResponseFilter {
		query: "  COLOR ".into(),
		..ResponseFilter::default()
	};
	assert!(filter.apply(&all).is_empty());

	let inner_space = ResponseFilter {
		query: "color scheme".into(),
		..ResponseFilter::default()
	};
	assert_eq!(ids(&inner_space.apply(&all)), [3]);
}

#[test]
fn any_selected_tag_matches() {
	let all = responses();
	let mut filter = ResponseFilter::default();
	filter.toggle_tag("confusing");
	filter.toggle_tag("smiling");
	assert_eq!(ids(&filter.apply(&all)), [2, 3]);
}

#[test]
fn search_and_tags_must_both_match() {
	let all = responses();
	let mut filter = ResponseFilter {
		query: "packaging".into(),
		..ResponseFilter::default()
	};
	filter.toggle_tag("frustrated");
	assert!(filter.apply(&all).is_empty());
}

#[test]
fn toggling_a_tag_twice_deselects_it() {
	let mut filter = ResponseFilter::default();
	filter.toggle_tag("modern");
	assert!(filter.is_selected("modern"));
	filter.toggle_tag("modern");
	assert!(!filter.is_selected("modern"));
	assert_eq!(filter, ResponseFilter::default());
}
