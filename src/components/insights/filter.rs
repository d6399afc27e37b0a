#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use super::types::FeedbackResponse;

/// Search text and tag selection narrowing the response list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseFilter {
	pub query: String,
	pub selected_tags: Vec<String>,
}

impl ResponseFilter {
	pub fn toggle_tag(&mut self, tag: &str) {
		if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
			self.selected_tags.remove(pos);
		} else {
			self.selected_tags.push(tag.to_owned());
		}
	}

	pub fn is_selected(&self, tag: &str) -> bool {
		self.selected_tags.iter().any(|t| t == tag)
	}

	/// Text contains the query (case-insensitively) and, when any tag is
	/// selected, the response carries at least one of them.
	pub fn matches(&self, response: &FeedbackResponse) -> bool {
		let matches_search = self.query.is_empty()
			|| response.text.to_lowercase().contains(&self.query.to_lowercase());
		let matches_tags = self.selected_tags.is_empty()
			|| self.selected_tags.iter().any(|t| response.tags.contains(t));
		matches_search && matches_tags
	}

	pub fn apply<'a>(&self, responses: &'a [FeedbackResponse]) -> Vec<&'a FeedbackResponse> {
		responses.iter().filter(|r| self.matches(r)).collect()
	}
}
