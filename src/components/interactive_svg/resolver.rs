//! Interaction-state resolution.
//!
//! Maps the currently selected trigger id to an ordered plan of visual
//! operations over named elements. The resolver never touches the DOM;
//! `render::apply` executes the plan against the mounted subtree. Keeping
//! this split mirrors how the rest of the crate separates state from its
//! drawing surface and lets the contract be tested without a browser.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::types::{InteractionRule, InteractionSet, StyleProps};

/// One visual operation against a named element.
///
/// Plans are applied in order, so an id referenced by several rules ends up
/// in the state the last operation leaves it in.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementOp {
	/// Make the element visible: display, visibility and opacity are set
	/// together, never independently. With `with_descendants` the shown
	/// state also overrides any hidden state on descendant elements.
	Show {
		/// Target element id.
		id: String,
		/// Propagate the shown state through the element's subtree.
		with_descendants: bool,
	},
	/// Hide the element: display none, visibility hidden, opacity zero.
	Hide {
		/// Target element id.
		id: String,
	},
	/// Apply a style map to the element.
	Style {
		/// Target element id.
		id: String,
		/// Properties to set.
		props: StyleProps,
	},
}

/// Holds the rule sequence and the single active trigger id.
pub struct InteractionResolver {
	set: InteractionSet,
	active: Option<String>,
}

impl InteractionResolver {
	/// Wraps a rule set. No trigger is active until [`initialize`] runs.
	///
	/// [`initialize`]: InteractionResolver::initialize
	pub fn new(set: InteractionSet) -> Self {
		Self { set, active: None }
	}

	/// Id of the currently active trigger, or `None` before initialization.
	pub fn active_trigger(&self) -> Option<&str> {
		self.active.as_deref()
	}

	/// Rules in processing order.
	pub fn rules(&self) -> &[InteractionRule] {
		&self.set.rules
	}

	/// Establishes the resting visual state.
	///
	/// The default rule's trigger (if any) becomes active. Every rule's
	/// `show_elements` are shown only when the rule is the initial one,
	/// hidden otherwise, and each trigger gets its initial style map.
	pub fn initialize(&mut self) -> Vec<ElementOp> {
		self.active = self.set.default_trigger().map(str::to_owned);

		let mut ops = Vec::new();
		for rule in &self.set.rules {
			let is_initial = self.active.as_deref() == Some(rule.trigger_id.as_str());
			push_trigger_style(&mut ops, rule, is_initial);
			for id in &rule.show_elements {
				if is_initial {
					ops.push(ElementOp::Show {
						id: id.clone(),
						with_descendants: false,
					});
				} else {
					ops.push(ElementOp::Hide { id: id.clone() });
				}
			}
		}
		ops
	}

	/// Recomputes the visual state for a newly selected trigger.
	///
	/// Unknown ids are accepted: they still become the active trigger and
	/// deactivate every rule, they just contribute no element changes of
	/// their own. Selecting the same id twice produces the same plan, so
	/// the resulting visual state is idempotent.
	///
	/// The active rule shows its `show_elements` (descendants included) and
	/// hides its `hide_elements`; an inactive rule only hides its
	/// `show_elements`. Its `hide_elements` are left untouched on
	/// deactivation.
	pub fn select(&mut self, trigger_id: &str) -> Vec<ElementOp> {
		self.active = Some(trigger_id.to_owned());

		let mut ops = Vec::new();
		for rule in &self.set.rules {
			let is_active = rule.trigger_id == trigger_id;
			push_trigger_style(&mut ops, rule, is_active);
			if is_active {
				for id in &rule.show_elements {
					ops.push(ElementOp::Show {
						id: id.clone(),
						with_descendants: true,
					});
				}
				for id in &rule.hide_elements {
					ops.push(ElementOp::Hide { id: id.clone() });
				}
			} else {
				for id in &rule.show_elements {
					ops.push(ElementOp::Hide { id: id.clone() });
				}
			}
		}
		ops
	}
}

fn push_trigger_style(ops: &mut Vec<ElementOp>, rule: &InteractionRule, active: bool) {
	let props = if active {
		&rule.active_style
	} else {
		&rule.inactive_style
	};
	if !props.is_empty() {
		ops.push(ElementOp::Style {
			id: rule.trigger_id.clone(),
			props: props.clone(),
		});
	}
}
