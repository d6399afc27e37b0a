use leptos::prelude::*;
use leptos_meta::Title;
use log::{error, info};

use crate::components::insights::{
	ExecutiveSummary, InsightReport, ResponseList, ResponseStats, SentimentOverview, ThemeList,
};
use crate::components::mind_map::{MindMap, MindMapCanvas};
use crate::components::trend_chart::TrendChart;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DashboardTab {
	Overview,
	Themes,
	Responses,
}

impl DashboardTab {
	const ALL: [DashboardTab; 3] = [Self::Overview, Self::Themes, Self::Responses];

	fn label(self) -> &'static str {
		match self {
			Self::Overview => "Overview",
			Self::Themes => "Themes",
			Self::Responses => "Responses",
		}
	}
}

/// Analysis dashboard with the mind map, insight panels and live trends.
#[component]
pub fn Dashboard() -> impl IntoView {
	let tab = RwSignal::new(DashboardTab::Overview);

	let report = InsightReport::embedded();
	match &report {
		Ok(r) => info!(
			"loaded insight report: {} responses, {} themes",
			r.response_count,
			r.themes.len()
		),
		Err(err) => error!("insight report rejected: {err}"),
	}
	let themes = report.as_ref().ok().map(|r| r.themes.clone());
	let responses = report
		.as_ref()
		.ok()
		.map(|r| (r.responses.clone(), r.available_tags.clone()));

	let mind_map = MindMap::feedback_overview()
		.inspect_err(|err| error!("mind map rejected: {err}"))
		.map(|map| view! { <MindMapCanvas map /> });

	let overview_cards = report.map(|report| {
		let findings = report.key_findings.clone();
		let trends = report.notable_trends.clone();
		let actions = report.action_items.clone();
		let sentiment = report.sentiment.clone();
		view! {
			<ExecutiveSummary
				response_count=report.response_count
				findings
				trends
				actions
			/>
			<div class="card-grid">
				<SentimentOverview sentiment />
				<ResponseStats report />
			</div>
		}
	});

	let tabs = DashboardTab::ALL
		.into_iter()
		.map(|t| {
			view! {
				<button
					class="tab"
					class:active=move || tab.get() == t
					on:click=move |_| tab.set(t)
				>
					{t.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<Title text="Analysis Dashboard" />
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="dashboard">
				<header>
					<h1>"Analysis Dashboard"</h1>
					<p class="subtitle">"AI-powered insights from multimodal feedback"</p>
				</header>
				<nav class="tabs">{tabs}</nav>

				<div class="tab-panel" class:hidden=move || tab.get() != DashboardTab::Overview>
					{mind_map}
					{overview_cards}
					<TrendChart />
				</div>
				<div class="tab-panel" class:hidden=move || tab.get() != DashboardTab::Themes>
					{themes.map(|themes| view! { <ThemeList themes /> })}
				</div>
				<div class="tab-panel" class:hidden=move || tab.get() != DashboardTab::Responses>
					{responses
						.map(|(responses, available_tags)| {
							view! { <ResponseList responses available_tags /> }
						})}
				</div>
			</main>
		</ErrorBoundary>
	}
}
