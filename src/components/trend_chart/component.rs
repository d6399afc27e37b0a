use leptos::ev;
use leptos::prelude::*;
use log::{debug, error, info};
use web_sys::MouseEvent;

use super::feed::{FeedConfig, TrendSeries};
use super::render::{self, ChartFrame, Metric};
use crate::components::canvas::{context_2d, parent_width, pointer_position};

const CHART_HEIGHT: f64 = 300.0;
const FALLBACK_WIDTH: f64 = 720.0;

/// Seven-day response chart fed by the simulated live series.
///
/// The feed ticks on an interval owned by this component; the interval is
/// cleared when the component is unmounted.
#[component]
pub fn TrendChart(#[prop(optional)] config: Option<FeedConfig>) -> impl IntoView {
	let config = StoredValue::new(config.unwrap_or_default());
	let today = chrono::Local::now().date_naive();
	let series = RwSignal::new(
		config.with_value(|c| TrendSeries::initialize(today, c, &mut rand::thread_rng())),
	);
	let hovered = RwSignal::new(None::<usize>);
	let width = RwSignal::new(FALLBACK_WIDTH);
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let interval = config.with_value(|c| c.tick_interval);
	match set_interval_with_handle(
		move || config.with_value(|c| series.update(|s| s.tick(c, &mut rand::thread_rng()))),
		interval,
	) {
		Ok(handle) => {
			info!("live feed started, ticking every {interval:?}");
			on_cleanup(move || {
				debug!("live feed stopped");
				handle.clear();
			});
		}
		Err(err) => error!("failed to start live feed: {err:?}"),
	}

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(w) = canvas_ref.get_untracked().and_then(|c| parent_width(&c)) {
			width.set(w);
		}
	});
	on_cleanup(move || resize.remove());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(w) = parent_width(&canvas) {
			width.set(w);
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let w = width.get();
		canvas.set_width(w as u32);
		canvas.set_height(CHART_HEIGHT as u32);
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		let hovered = hovered.get();
		series.with(|s| render::render(s, hovered, w, CHART_HEIGHT, &ctx));
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, _) = pointer_position(&canvas, &ev);
		let index = series.with_untracked(|s| {
			ChartFrame::new(s, width.get_untracked(), CHART_HEIGHT).nearest_index(x)
		});
		if hovered.get_untracked() != index {
			hovered.set(index);
		}
	};

	let tooltip = move || {
		let i = hovered.get()?;
		let (point, left) = series.with(|s| {
			let frame = ChartFrame::new(s, width.get(), CHART_HEIGHT);
			(s.points()[i].clone(), frame.x(i))
		});
		let rows = Metric::ALL
			.iter()
			.map(|m| {
				view! {
					<p style:color=m.color()>
						<span class="metric-name">{format!("{}: ", m.name())}</span>
						<strong>{m.value(&point)}</strong>
					</p>
				}
			})
			.collect_view();
		Some(view! {
			<div class="chart-tooltip" style:left=format!("{left}px")>
				<p class="tooltip-title">{point.label.clone()}</p>
				{rows}
			</div>
		})
	};

	let summary = move || series.with(TrendSeries::summary);

	view! {
		<section class="card trend-chart">
			<header class="card-header">
				<div>
					<h2>"Response Trends - Last 7 Days"</h2>
					<p class="subtitle">"Real-time sentiment tracking with live updates"</p>
				</div>
				<div class="live-indicator">
					<span class="pulse" />
					<span>"Live"</span>
				</div>
			</header>
			<div class="chart-viewport">
				<canvas
					node_ref=canvas_ref
					class="trend-canvas"
					on:mousemove=on_mousemove
					on:mouseleave=move |_| hovered.set(None)
					style:display="block"
				/>
				{tooltip}
			</div>
			<div class="trend-summary">
				<div>
					<p class="stat-label">"Avg Daily"</p>
					<p class="stat-value">{move || summary().average_daily}</p>
				</div>
				<div>
					<p class="stat-label">"Peak Day"</p>
					<p class="stat-value">{move || summary().peak_day}</p>
				</div>
				<div>
					<p class="stat-label">"Trend"</p>
					<p
						class="stat-value"
						class:trend-up=move || summary().trend_percent.is_some_and(|p| p >= 0.0)
						class:trend-down=move || summary().trend_percent.is_some_and(|p| p < 0.0)
					>
						{move || summary().trend_label()}
					</p>
				</div>
				<div>
					<p class="stat-label">"Today"</p>
					<p class="stat-value">{move || summary().today}</p>
				</div>
			</div>
		</section>
	}
}
