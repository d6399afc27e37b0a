use proptest::prelude::*;

use super::*;

fn overview() -> MindMap {
	MindMap::feedback_overview().expect("static tree")
}

#[test]
fn defaults_to_unit_zoom_with_nothing_selected() {
	let state = DiagramViewState::default();
	assert_eq!(state.zoom_factor(), 1.0);
	assert_eq!(state.zoom_percent(), 100);
	assert!(state.hovered_node_id().is_none());
	assert!(state.expanded_category_id().is_none());
}

#[test]
fn zoom_steps_by_a_fifth_and_clamps() {
	let mut state = DiagramViewState::default();
	state.zoom_in();
	assert_eq!(state.zoom_factor(), 1.2);
	for _ in 0..10 {
		state.zoom_in();
	}
	assert_eq!(state.zoom_factor(), MAX_ZOOM);
	assert!(!state.can_zoom_in());

	for _ in 0..10 {
		state.zoom_out();
	}
	assert_eq!(state.zoom_factor(), MIN_ZOOM);
	assert!(!state.can_zoom_out());
	assert_eq!(state.zoom_percent(), 50);
}

#[test]
fn zoom_in_then_out_returns_to_exactly_one() {
	let mut state = DiagramViewState::default();
	for _ in 0..3 {
		state.zoom_in();
	}
	for _ in 0..3 {
		state.zoom_out();
	}
	assert_eq!(state.zoom_factor(), 1.0);
}

#[test]
fn wheel_zooms_by_vertical_direction_only() {
	let mut state = DiagramViewState::default();
	assert!(!state.apply_wheel(0.0));
	assert_eq!(state.zoom_factor(), 1.0);

	assert!(state.apply_wheel(-53.0));
	assert_eq!(state.zoom_factor(), 1.2);
	assert!(state.apply_wheel(120.0));
	assert!(state.apply_wheel(0.5));
	assert_eq!(state.zoom_factor(), 0.8);
}

#[test]
fn hover_clear_reports_no_change_when_nothing_was_hovered() {
	let mut state = DiagramViewState::default();
	assert!(!state.set_hover(None));
	state.set_hover(Some("visual-design"));
	assert!(!state.set_hover(Some("visual-design")));
	assert!(state.set_hover(Some("accessibility")));
	assert!(state.is_hovered("accessibility"));
}

#[test]
fn toggling_a_second_category_collapses_the_first() {
	let map = overview();
	let mut state = DiagramViewState::default();
	state.toggle_category_expansion(&map, "visual-design");
	assert_eq!(state.expanded_category_id(), Some("visual-design"));
	state.toggle_category_expansion(&map, "accessibility");
	assert_eq!(state.expanded_category_id(), Some("accessibility"));
	assert!(!state.is_expanded("visual-design"));
	state.toggle_category_expansion(&map, "accessibility");
	assert_eq!(state.expanded_category_id(), None);
}

#[test]
fn toggling_unknown_or_non_category_ids_is_a_no_op() {
	let map = overview();
	let mut state = DiagramViewState::default();
	state.toggle_category_expansion(&map, "sentiment");
	let before = state.clone();
	state.toggle_category_expansion(&map, "nope");
	state.toggle_category_expansion(&map, "root");
	state.toggle_category_expansion(&map, "acc-1");
	assert_eq!(state, before);
}

#[test]
fn set_hover_reports_changes_only() {
	let mut state = DiagramViewState::default();
	assert!(state.set_hover(Some("root")));
	assert!(!state.set_hover(Some("root")));
	assert!(state.is_hovered("root"));
	assert!(state.set_hover(None));
	assert!(state.hovered_node_id().is_none());
}

#[test]
fn screen_to_diagram_is_identity_at_unit_zoom_and_fixes_the_center() {
	let mut state = DiagramViewState::default();
	assert_eq!(state.screen_to_diagram(10.0, 20.0, 800.0, 600.0), (10.0, 20.0));
	state.zoom_in();
	state.zoom_in();
	assert_eq!(state.screen_to_diagram(400.0, 300.0, 800.0, 600.0), (400.0, 300.0));
	let (x, _) = state.screen_to_diagram(540.0, 300.0, 800.0, 600.0);
	assert!((x - 500.0).abs() < 1e-9);
}

#[test]
fn layout_follows_expansion_only() {
	let map = overview();
	let geometry = DiagramGeometry::default();
	let mut a = DiagramViewState::default();
	let mut b = DiagramViewState::default();
	a.toggle_category_expansion(&map, "media-insights");
	b.zoom_in();
	b.set_hover(Some("root"));
	b.toggle_category_expansion(&map, "visual-design");
	b.toggle_category_expansion(&map, "media-insights");
	assert_eq!(a.layout(&map, &geometry), b.layout(&map, &geometry));
}

#[derive(Clone, Debug)]
enum ZoomAction {
	In,
	Out,
	Reset,
}

fn zoom_action() -> impl Strategy<Value = ZoomAction> {
	prop_oneof![Just(ZoomAction::In), Just(ZoomAction::Out), Just(ZoomAction::Reset)]
}

proptest! {
	#[test]
	fn zoom_stays_in_bounds(actions in prop::collection::vec(zoom_action(), 0..64)) {
		let mut state = DiagramViewState::default();
		for action in &actions {
			match action {
				ZoomAction::In => state.zoom_in(),
				ZoomAction::Out => state.zoom_out(),
				ZoomAction::Reset => state.reset_zoom(),
			}
			prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&state.zoom_factor()));
		}
		state.reset_zoom();
		prop_assert_eq!(state.zoom_factor(), 1.0);
	}

	#[test]
	fn double_toggle_restores_expansion(
		prefix in prop::collection::vec(0usize..9, 0..16),
		target in 0usize..9,
	) {
		let map = overview();
		let ids: Vec<String> = map
			.categories()
			.iter()
			.map(|c| c.id.clone())
			.chain(["root".to_owned(), "missing".to_owned()])
			.collect();
		let mut state = DiagramViewState::default();
		for i in &prefix {
			state.toggle_category_expansion(&map, &ids[*i]);
			if let Some(id) = state.expanded_category_id() {
				prop_assert!(map.category(id).is_some());
			}
		}
		let before = state.expanded_category_id().map(str::to_owned);
		let target_id = &ids[target];
		state.toggle_category_expansion(&map, target_id);
		state.toggle_category_expansion(&map, target_id);
		let after = state.expanded_category_id().map(str::to_owned);

		let other_was_open = map.category(target_id).is_some()
			&& before.as_ref().is_some_and(|id| id != target_id);
		if other_was_open {
			// the first toggle auto-collapsed the other category
			prop_assert_eq!(after, None);
		} else {
			prop_assert_eq!(after, before);
		}
	}
}
