use leptos::ev;
use leptos::prelude::*;
use log::{debug, info};
use web_sys::{MouseEvent, WheelEvent};

use super::layout::DiagramGeometry;
use super::render;
use super::state::DiagramViewState;
use super::types::{MindMap, NodeKind};
use crate::components::canvas::{context_2d, parent_width, pointer_position};

const FALLBACK_WIDTH: f64 = 960.0;
const RIGHT_MARGIN: f64 = 24.0;

/// Interactive mind map of the feedback categories.
///
/// Hovering highlights a node, clicking a category expands its annotations
/// (one category at a time) and the wheel or the toolbar buttons zoom about
/// the canvas center.
#[component]
pub fn MindMapCanvas(
	map: MindMap,
	#[prop(optional)] geometry: Option<DiagramGeometry>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let view_state = RwSignal::new(DiagramViewState::default());
	let available_width = RwSignal::new(FALLBACK_WIDTH);
	let geometry = StoredValue::new(geometry.unwrap_or_default());
	info!("mind map mounted with {} categories", map.categories().len());
	let map = StoredValue::new(map);

	let layout = Memo::new(move |_| {
		view_state.with(|s| map.with_value(|m| geometry.with_value(|g| s.layout(m, g))))
	});
	let canvas_width = Memo::new(move |_| {
		available_width
			.get()
			.max(layout.with(|l| l.extent()) + RIGHT_MARGIN)
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Some(w) = parent_width(&canvas) {
			available_width.set(w);
		}
	});

	let resize = window_event_listener(ev::resize, move |_| {
		if let Some(w) = canvas_ref.get_untracked().and_then(|c| parent_width(&c)) {
			available_width.set(w);
		}
	});
	on_cleanup(move || {
		debug!("mind map unmounted");
		resize.remove();
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (w, h) = (
			canvas_width.get(),
			geometry.with_value(|g| g.container_height),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		view_state.with(|s| layout.with(|l| render::render(s, l, w, h, &ctx)));
	});

	let node_under_pointer = move |ev: &MouseEvent| {
		let canvas = canvas_ref.get_untracked()?;
		let (sx, sy) = pointer_position(&canvas, ev);
		let (w, h) = (
			canvas_width.get_untracked(),
			geometry.with_value(|g| g.container_height),
		);
		let (x, y) = view_state.with_untracked(|s| s.screen_to_diagram(sx, sy, w, h));
		layout.with_untracked(|l| l.node_at(x, y).map(|b| (b.id.clone(), b.kind)))
	};

	let on_mousemove = move |ev: MouseEvent| {
		let hovered = node_under_pointer(&ev).map(|(id, _)| id);
		view_state.maybe_update(|s| {
			let changed = s.set_hover(hovered.as_deref());
			if let Some(id) = hovered.as_deref().filter(|_| changed) {
				map.with_value(|m| {
					if let Some(node) = m.node(id) {
						debug!("hovering {:?} node {}", node.kind, node.label);
					}
				});
			}
			changed
		});
	};

	let on_click = move |ev: MouseEvent| {
		if let Some((id, NodeKind::Category)) = node_under_pointer(&ev) {
			map.with_value(|m| view_state.update(|s| s.toggle_category_expansion(m, &id)));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		view_state.maybe_update(|s| s.set_hover(None));
	};

	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let delta_y = ev.delta_y();
		view_state.maybe_update(|s| s.apply_wheel(delta_y));
	};

	let cursor = move || {
		let over_category = view_state.with(|s| {
			s.hovered_node_id()
				.and_then(|id| map.with_value(|m| m.category(id).map(|_| ())))
				.is_some()
		});
		if over_category { "pointer" } else { "default" }
	};

	view! {
		<section class="card mind-map">
			<header class="card-header">
				<div>
					<h2>"AI Insights Mind Map"</h2>
					<p class="subtitle">
						"Interactive visualization of key themes, sentiments, and recommendations"
					</p>
				</div>
				<div class="zoom-controls">
					<button
						title="Zoom out"
						disabled=move || !view_state.with(|s| s.can_zoom_out())
						on:click=move |_| view_state.update(DiagramViewState::zoom_out)
					>
						"−"
					</button>
					<span class="zoom-label">
						{move || format!("{}%", view_state.with(|s| s.zoom_percent()))}
					</span>
					<button
						title="Zoom in"
						disabled=move || !view_state.with(|s| s.can_zoom_in())
						on:click=move |_| view_state.update(DiagramViewState::zoom_in)
					>
						"+"
					</button>
					<button
						title="Reset zoom"
						on:click=move |_| view_state.update(DiagramViewState::reset_zoom)
					>
						"⤢"
					</button>
				</div>
			</header>
			<div class="mind-map-viewport">
				<canvas
					node_ref=canvas_ref
					class="mind-map-canvas"
					on:mousemove=on_mousemove
					on:click=on_click
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
					style:display="block"
					style:cursor=cursor
				/>
			</div>
		</section>
	}
}
