use leptos::prelude::*;

use super::filter::ResponseFilter;
use super::types::{
	ActionItem, FeedbackResponse, InsightReport, NotableTrend, Sentiment, SentimentSummary, Theme,
};

fn percent_bar(label: &'static str, percent: u8, color: &'static str) -> impl IntoView {
	view! {
		<div class="bar-row">
			<span class="bar-label">{label}</span>
			<span class="bar-value" style:color=color>{format!("{percent}%")}</span>
		</div>
		<div class="bar-track">
			<div
				class="bar-fill"
				style:background-color=color
				style:width=format!("{percent}%")
			/>
		</div>
	}
}

fn sentiment_badge(sentiment: Sentiment) -> impl IntoView {
	view! {
		<span class="badge" style:border-color=sentiment.color() style:color=sentiment.color()>
			{sentiment.as_str()}
		</span>
	}
}

#[component]
pub fn SentimentOverview(sentiment: SentimentSummary) -> impl IntoView {
	let d = sentiment.distribution;
	view! {
		<section class="card">
			<h3>"Sentiment Overview"</h3>
			<div class="bar-row">
				<span class="bar-label">"Overall"</span>
				{sentiment_badge(sentiment.overall)}
			</div>
			{percent_bar("Positive", d.positive, Sentiment::Positive.color())}
			{percent_bar("Neutral", d.neutral, Sentiment::Mixed.color())}
			{percent_bar("Negative", d.negative, Sentiment::Negative.color())}
		</section>
	}
}

#[component]
pub fn ResponseStats(report: InsightReport) -> impl IntoView {
	let tags = report
		.top_tags
		.iter()
		.map(|t| view! { <span class="badge">{t.clone()}</span> })
		.collect_view();
	view! {
		<section class="card">
			<h3>"Response Stats"</h3>
			<div class="stat-row">
				<span>"Total Responses"</span>
				<strong>{report.response_count}</strong>
			</div>
			<div class="stat-row">
				<span>"With Media"</span>
				<strong>{report.with_media}</strong>
			</div>
			<div class="stat-row">
				<span>"Text Only"</span>
				<strong>{report.text_only()}</strong>
			</div>
			<p class="stat-label">"Top Detected Tags"</p>
			<div class="badge-row">{tags}</div>
			<p class="stat-label">"Emotional Tone"</p>
			<p class="stat-value">{report.emotional_tone.clone()}</p>
		</section>
	}
}

/// Findings, trends and follow-up actions side by side.
#[component]
pub fn ExecutiveSummary(
	response_count: u32,
	findings: Vec<String>,
	trends: Vec<NotableTrend>,
	actions: Vec<ActionItem>,
) -> impl IntoView {
	let findings = findings
		.into_iter()
		.map(|finding| {
			view! {
				<li>
					<span class="bullet" style:color=Sentiment::Positive.color()>"•"</span>
					{finding}
				</li>
			}
		})
		.collect_view();
	let trends = trends
		.into_iter()
		.map(|trend| {
			view! {
				<li>
					<span class="bullet" style:color=trend.direction.color()>
						{trend.direction.arrow()}
					</span>
					{format!("{} ", trend.text)}
					<strong>{trend.emphasis}</strong>
				</li>
			}
		})
		.collect_view();
	let actions = actions
		.into_iter()
		.map(|action| {
			view! {
				<li>
					<span class="bullet" style:color=Sentiment::Negative.color()>"!"</span>
					<strong>{format!("{}:", action.label)}</strong>
					{format!(" {}", action.text)}
				</li>
			}
		})
		.collect_view();

	view! {
		<section class="card executive-summary">
			<h2>"Executive Summary"</h2>
			<p class="subtitle">
				{format!("AI-powered analysis of {response_count} responses collected")}
			</p>
			<div class="summary-columns">
				<div>
					<h3 class="badge" style:color=Sentiment::Positive.color()>"Key Findings"</h3>
					<ul class="summary-list">{findings}</ul>
				</div>
				<div>
					<h3 class="badge" style:color=Sentiment::Mixed.color()>"Notable Trends"</h3>
					<ul class="summary-list">{trends}</ul>
				</div>
				<div>
					<h3 class="badge" style:color=Sentiment::Negative.color()>"Action Items"</h3>
					<ul class="summary-list">{actions}</ul>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn ThemeList(themes: Vec<Theme>) -> impl IntoView {
	themes
		.into_iter()
		.map(|theme| {
			let percent = (theme.score * 100.0).round() as u32;
			view! {
				<section class="card theme">
					<div>
						<h3>{theme.theme}</h3>
						<p class="subtitle">{format!("{} mentions across responses", theme.mentions)}</p>
						{sentiment_badge(theme.sentiment)}
					</div>
					<div class="theme-score">
						<div class="bar-track">
							<div
								class="bar-fill"
								style:background-color=theme.sentiment.color()
								style:width=format!("{percent}%")
							/>
						</div>
						<strong>{format!("{percent}%")}</strong>
					</div>
				</section>
			}
		})
		.collect_view()
}

fn response_card(response: FeedbackResponse) -> impl IntoView {
	let tags = response
		.tags
		.into_iter()
		.map(|t| view! { <span class="badge">{t}</span> })
		.collect_view();
	let media = response
		.media
		.into_iter()
		.map(|m| view! { <li>{format!("{} {}", m.kind.icon(), m.name)}</li> })
		.collect_view();
	view! {
		<article class="card response">
			<div class="response-header">
				<p>{response.text}</p>
				{sentiment_badge(response.sentiment)}
			</div>
			<p class="subtitle">{format!("Emotional tone: {}", response.emotional_tone)}</p>
			<div class="badge-row">{tags}</div>
			<ul class="media-list">{media}</ul>
		</article>
	}
}

/// Responses narrowed by a search box and tag chips.
#[component]
pub fn ResponseList(responses: Vec<FeedbackResponse>, available_tags: Vec<String>) -> impl IntoView {
	let filter = RwSignal::new(ResponseFilter::default());
	let total = responses.len();
	let responses = StoredValue::new(responses);

	let chips = available_tags
		.into_iter()
		.map(|tag| {
			let (toggle, selected) = (tag.clone(), tag.clone());
			view! {
				<button
					class="badge chip"
					class:selected=move || filter.with(|f| f.is_selected(&selected))
					on:click=move |_| filter.update(|f| f.toggle_tag(&toggle))
				>
					{tag}
				</button>
			}
		})
		.collect_view();

	let visible = move || {
		filter.with(|f| {
			responses.with_value(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>())
		})
	};

	view! {
		<div class="card filter-bar">
			<input
				type="search"
				placeholder="Search responses..."
				prop:value=move || filter.with(|f| f.query.clone())
				on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
			/>
			<div class="badge-row">
				<span class="stat-label">"Filters:"</span>
				{chips}
			</div>
		</div>
		<p class="subtitle">
			{move || format!("Showing {} of {total} responses", visible().len())}
		</p>
		{move || visible().into_iter().map(response_card).collect_view()}
	}
}
