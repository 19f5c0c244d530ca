use super::*;

fn step(id: &str, elements: &[&str]) -> AnimationStep {
	AnimationStep {
		id: id.to_owned(),
		elements: elements.iter().map(|element| (*element).to_owned()).collect(),
		description: format!("step {id}"),
	}
}

fn three_steps() -> Vec<AnimationStep> {
	vec![
		step("intake", &["arrow-1", "box-intake"]),
		step("process", &["box-process"]),
		step("publish", &["arrow-2", "box-publish"]),
	]
}

// =============================================================
// revealed / concealed
// =============================================================

#[test]
fn first_step_reveals_only_its_own_elements() {
	let steps = three_steps();
	assert_eq!(revealed_ids(&steps, 0), vec!["arrow-1", "box-intake"]);
	assert_eq!(
		concealed_ids(&steps, 0),
		vec!["box-process", "arrow-2", "box-publish"]
	);
}

#[test]
fn middle_step_accumulates_earlier_elements() {
	let steps = three_steps();
	assert_eq!(
		revealed_ids(&steps, 1),
		vec!["arrow-1", "box-intake", "box-process"]
	);
	assert_eq!(concealed_ids(&steps, 1), vec!["arrow-2", "box-publish"]);
}

#[test]
fn last_step_reveals_everything() {
	let steps = three_steps();
	assert_eq!(revealed_ids(&steps, 2).len(), 5);
	assert!(concealed_ids(&steps, 2).is_empty());
}

#[test]
fn out_of_range_step_behaves_like_the_last() {
	let steps = three_steps();
	assert_eq!(revealed_ids(&steps, 99).len(), 5);
	assert!(concealed_ids(&steps, 99).is_empty());
}

#[test]
fn empty_walkthrough_reveals_nothing() {
	assert!(revealed_ids(&[], 0).is_empty());
	assert!(concealed_ids(&[], 0).is_empty());
}

// =============================================================
// clamp / progress
// =============================================================

#[test]
fn clamp_step_limits_to_last_index() {
	assert_eq!(clamp_step(3, 0), 0);
	assert_eq!(clamp_step(3, 2), 2);
	assert_eq!(clamp_step(3, 7), 2);
	assert_eq!(clamp_step(0, 7), 0);
}

#[test]
fn progress_is_one_based() {
	assert_eq!(progress_percent(4, 0), 25.0);
	assert_eq!(progress_percent(4, 3), 100.0);
}

#[test]
fn progress_of_empty_walkthrough_is_zero() {
	assert_eq!(progress_percent(0, 0), 0.0);
}

#[test]
fn progress_clamps_out_of_range_steps() {
	assert_eq!(progress_percent(4, 42), 100.0);
}
