use std::collections::HashMap;

use super::*;
use crate::components::interactive_svg::types::{InteractionRule, InteractionSet};

/// Visual state of one element after a plan has been applied.
#[derive(Clone, Debug, Default, PartialEq)]
struct ElementState {
	shown: Option<bool>,
	styles: HashMap<String, String>,
}

/// Folds a plan into per-element visual state, in plan order.
fn fold(ops: &[ElementOp]) -> HashMap<String, ElementState> {
	let mut state: HashMap<String, ElementState> = HashMap::new();
	for op in ops {
		match op {
			ElementOp::Show { id, .. } => {
				state.entry(id.clone()).or_default().shown = Some(true);
			}
			ElementOp::Hide { id } => {
				state.entry(id.clone()).or_default().shown = Some(false);
			}
			ElementOp::Style { id, props } => {
				let entry = state.entry(id.clone()).or_default();
				for (key, value) in props {
					entry.styles.insert(key.clone(), value.clone());
				}
			}
		}
	}
	state
}

fn shown(state: &HashMap<String, ElementState>, id: &str) -> Option<bool> {
	state.get(id).and_then(|element| element.shown)
}

fn rule(trigger: &str, show: &[&str]) -> InteractionRule {
	InteractionRule {
		trigger_id: trigger.to_owned(),
		show_elements: show.iter().map(|id| (*id).to_owned()).collect(),
		..Default::default()
	}
}

fn two_rule_set() -> InteractionSet {
	let mut first = rule("t1", &["e1"]);
	first.is_default = true;
	InteractionSet {
		rules: vec![first, rule("t2", &["e2"])],
	}
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_activates_the_default_rule() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();
	assert_eq!(resolver.active_trigger(), Some("t1"));
}

#[test]
fn initialize_shows_only_the_default_rules_elements() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	let state = fold(&resolver.initialize());
	assert_eq!(shown(&state, "e1"), Some(true));
	assert_eq!(shown(&state, "e2"), Some(false));
}

#[test]
fn initialize_without_default_hides_everything() {
	let set = InteractionSet {
		rules: vec![rule("t1", &["e1"]), rule("t2", &["e2"])],
	};
	let mut resolver = InteractionResolver::new(set);
	let state = fold(&resolver.initialize());
	assert_eq!(resolver.active_trigger(), None);
	assert_eq!(shown(&state, "e1"), Some(false));
	assert_eq!(shown(&state, "e2"), Some(false));
}

#[test]
fn initialize_takes_the_first_of_duplicate_defaults() {
	let mut first = rule("t1", &["e1"]);
	first.is_default = true;
	let mut second = rule("t2", &["e2"]);
	second.is_default = true;
	let mut resolver = InteractionResolver::new(InteractionSet {
		rules: vec![first, second],
	});
	resolver.initialize();
	assert_eq!(resolver.active_trigger(), Some("t1"));
}

#[test]
fn initialize_does_not_descend_into_subtrees() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	let deep = resolver
		.initialize()
		.iter()
		.any(|op| matches!(op, ElementOp::Show { with_descendants: true, .. }));
	assert!(!deep);
}

#[test]
fn initialize_applies_initial_trigger_styles() {
	let mut set = two_rule_set();
	set.rules[0]
		.active_style
		.insert("opacity".to_owned(), "1".to_owned());
	set.rules[1]
		.inactive_style
		.insert("opacity".to_owned(), "0.5".to_owned());
	let mut resolver = InteractionResolver::new(set);
	let state = fold(&resolver.initialize());
	assert_eq!(state["t1"].styles["opacity"], "1");
	assert_eq!(state["t2"].styles["opacity"], "0.5");
}

// =============================================================
// select
// =============================================================

#[test]
fn select_switches_shown_elements_between_rules() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();

	let state = fold(&resolver.select("t2"));
	assert_eq!(resolver.active_trigger(), Some("t2"));
	assert_eq!(shown(&state, "e1"), Some(false));
	assert_eq!(shown(&state, "e2"), Some(true));

	let state = fold(&resolver.select("t1"));
	assert_eq!(resolver.active_trigger(), Some("t1"));
	assert_eq!(shown(&state, "e1"), Some(true));
	assert_eq!(shown(&state, "e2"), Some(false));
}

#[test]
fn select_is_idempotent() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();
	let first = resolver.select("t2");
	let second = resolver.select("t2");
	assert_eq!(first, second);
	assert_eq!(fold(&first), fold(&second));
}

#[test]
fn select_shows_active_elements_with_descendants() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();
	let deep = resolver.select("t2").iter().any(|op| {
		matches!(op, ElementOp::Show { id, with_descendants: true } if id == "e2")
	});
	assert!(deep);
}

#[test]
fn select_hides_the_active_rules_hide_elements() {
	let mut set = two_rule_set();
	set.rules[1].hide_elements.push("legend".to_owned());
	let mut resolver = InteractionResolver::new(set);
	resolver.initialize();
	let state = fold(&resolver.select("t2"));
	assert_eq!(shown(&state, "legend"), Some(false));
}

#[test]
fn deactivation_leaves_hide_elements_untouched() {
	let mut set = two_rule_set();
	set.rules[1].hide_elements.push("legend".to_owned());
	let mut resolver = InteractionResolver::new(set);
	resolver.initialize();
	resolver.select("t2");
	// Switching away hides t2's show_elements but never revisits "legend".
	let state = fold(&resolver.select("t1"));
	assert_eq!(shown(&state, "legend"), None);
}

#[test]
fn select_unknown_id_becomes_active_and_deactivates_the_rest() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();
	let ops = resolver.select("nope");
	assert_eq!(resolver.active_trigger(), Some("nope"));

	let state = fold(&ops);
	assert_eq!(shown(&state, "e1"), Some(false));
	assert_eq!(shown(&state, "e2"), Some(false));
	// The unknown id itself contributes no element changes.
	assert!(!state.contains_key("nope"));
}

#[test]
fn later_rules_win_on_conflicting_element_ids() {
	// t2's show list and t3's hide list both name "shared"; t3 is processed
	// later, so its instruction lands last.
	let mut set = InteractionSet {
		rules: vec![rule("t1", &[]), rule("t2", &["shared"]), rule("t3", &[])],
	};
	set.rules[2].hide_elements.push("shared".to_owned());
	// Make t2 and t3 the same trigger so both branches run in one pass.
	set.rules[2].trigger_id = "t2".to_owned();

	let mut resolver = InteractionResolver::new(set);
	resolver.initialize();
	let state = fold(&resolver.select("t2"));
	assert_eq!(shown(&state, "shared"), Some(false));
}

#[test]
fn select_applies_active_and_inactive_styles() {
	let mut set = two_rule_set();
	set.rules[0]
		.inactive_style
		.insert("opacity".to_owned(), "0.4".to_owned());
	set.rules[1]
		.active_style
		.insert("stroke".to_owned(), "#2563eb".to_owned());
	let mut resolver = InteractionResolver::new(set);
	resolver.initialize();
	let state = fold(&resolver.select("t2"));
	assert_eq!(state["t1"].styles["opacity"], "0.4");
	assert_eq!(state["t2"].styles["stroke"], "#2563eb");
}

#[test]
fn empty_style_maps_emit_no_style_ops() {
	let mut resolver = InteractionResolver::new(two_rule_set());
	resolver.initialize();
	let styled = resolver
		.select("t2")
		.iter()
		.any(|op| matches!(op, ElementOp::Style { .. }));
	assert!(!styled);
}

// =============================================================
// full walkthrough
// =============================================================

#[test]
fn default_then_select_then_return_round_trip() {
	let mut resolver = InteractionResolver::new(two_rule_set());

	let state = fold(&resolver.initialize());
	assert_eq!(resolver.active_trigger(), Some("t1"));
	assert_eq!(shown(&state, "e1"), Some(true));
	assert_eq!(shown(&state, "e2"), Some(false));

	let state = fold(&resolver.select("t2"));
	assert_eq!(resolver.active_trigger(), Some("t2"));
	assert_eq!(shown(&state, "e1"), Some(false));
	assert_eq!(shown(&state, "e2"), Some(true));

	let state = fold(&resolver.select("t1"));
	assert_eq!(resolver.active_trigger(), Some("t1"));
	assert_eq!(shown(&state, "e1"), Some(true));
	assert_eq!(shown(&state, "e2"), Some(false));
}
