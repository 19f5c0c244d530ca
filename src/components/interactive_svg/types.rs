use std::collections::HashMap;

/// Style-property name to value map applied to a trigger element.
pub type StyleProps = HashMap<String, String>;

/// One configuration entry: what to show, hide and restyle when its
/// trigger element is clicked.
#[derive(Clone, Debug, Default)]
pub struct InteractionRule {
	/// Id of the element that activates this rule when clicked.
	pub trigger_id: String,
	/// Element ids revealed while this rule is active.
	pub show_elements: Vec<String>,
	/// Element ids hidden when this rule becomes active.
	pub hide_elements: Vec<String>,
	/// Marks the rule whose trigger is active before any interaction.
	pub is_default: bool,
	/// Styles applied to the trigger element while active.
	pub active_style: StyleProps,
	/// Styles applied to the trigger element while inactive.
	pub inactive_style: StyleProps,
}

/// The full ordered rule sequence for one mounted diagram.
///
/// Supplied once per mount and treated as immutable for the component's
/// lifetime; a new set replaces the whole resolver state.
#[derive(Clone, Debug, Default)]
pub struct InteractionSet {
	/// Rules in processing order. Later rules win on conflicting element ids.
	pub rules: Vec<InteractionRule>,
}

impl InteractionSet {
	/// Trigger id of the first rule marked default, if any. Duplicate
	/// defaults are not validated; the first match wins.
	pub fn default_trigger(&self) -> Option<&str> {
		self.rules
			.iter()
			.find(|rule| rule.is_default)
			.map(|rule| rule.trigger_id.as_str())
	}
}
