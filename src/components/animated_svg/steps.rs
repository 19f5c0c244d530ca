//! Step-visibility laws for the staged walkthrough.
//!
//! At step `k`, every element belonging to steps `0..=k` is revealed and
//! every element of a later step is concealed. Pure functions; the
//! component applies the result to the mounted subtree.

#[cfg(test)]
#[path = "steps_test.rs"]
mod steps_test;

/// One stage of a diagram walkthrough.
#[derive(Clone, Debug, Default)]
pub struct AnimationStep {
	/// Stable identifier for the step.
	pub id: String,
	/// Element ids revealed once this step is reached.
	pub elements: Vec<String>,
	/// Caption shown while the step is current.
	pub description: String,
}

/// Element ids visible at `current`: everything introduced so far.
pub fn revealed_ids(steps: &[AnimationStep], current: usize) -> Vec<&str> {
	steps
		.iter()
		.take(current.saturating_add(1))
		.flat_map(|step| step.elements.iter().map(String::as_str))
		.collect()
}

/// Element ids concealed at `current`: everything a later step introduces.
pub fn concealed_ids(steps: &[AnimationStep], current: usize) -> Vec<&str> {
	steps
		.iter()
		.skip(current.saturating_add(1))
		.flat_map(|step| step.elements.iter().map(String::as_str))
		.collect()
}

/// Clamps a requested step index to the valid range for `len` steps.
pub fn clamp_step(len: usize, requested: usize) -> usize {
	if len == 0 {
		0
	} else {
		requested.min(len - 1)
	}
}

/// Progress through the walkthrough as a percentage, 1-based so the first
/// step already shows progress.
pub fn progress_percent(len: usize, current: usize) -> f64 {
	if len == 0 {
		0.0
	} else {
		((clamp_step(len, current) + 1) as f64 / len as f64) * 100.0
	}
}
